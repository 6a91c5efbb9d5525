#![forbid(unsafe_code)]
#![warn(clippy::unused_async, clippy::unwrap_used, clippy::expect_used)]

use std::{io, process};

use anyhow::Context;
use tracing::{info, Level};

mod app_data;
mod app_error;
mod docker_data;
mod input_handler;
mod parse_args;
mod ui;

use app_error::AppError;
use docker_data::DockerData;
use parse_args::CliArgs;
use ui::Ui;

/// Only an engine failure gets the engine hint, terminal failures speak for themselves
fn ui_error(err: AppError) -> anyhow::Error {
    match err {
        AppError::DockerConnect(_) => anyhow::Error::new(err)
            .context("Unable to list containers, is the engine still running?"),
        _ => anyhow::Error::new(err),
    }
}

/// Log to stderr, so the menu on stdout isn't interleaved with log lines
fn setup_tracing(args: &CliArgs) {
    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let docker = DockerData::connect(&args)
        .await
        .context("Unable to connect to the container engine, is it running?")?;
    info!("connected to the container engine");

    let stdin = io::stdin();
    let mut ui = Ui::new(docker, stdin.lock(), io::stdout(), &args);
    ui.run().await.map_err(ui_error)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::new();
    setup_tracing(&args);

    if let Err(e) = run(args).await {
        eprintln!("CRITICAL ERROR: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_failure_has_hint() {
        let err = ui_error(AppError::DockerConnect(String::from("connection refused")));
        assert_eq!(
            format!("{err:#}"),
            "Unable to list containers, is the engine still running?: Unable to access the container engine: connection refused"
        );
    }

    #[test]
    fn terminal_failure_has_no_engine_hint() {
        let err = ui_error(AppError::Terminal);
        assert_eq!(
            format!("{err:#}"),
            "Unable to read from or write to the terminal"
        );
    }
}
