use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
#[command(version, about)]
pub struct CliArgs {
    /// Docker socket to connect to, defaults to DOCKER_HOST or the platform's local socket
    #[clap(long)]
    pub host: Option<String>,

    /// Don't clear the screen before each menu render
    #[clap(long = "no-clear")]
    pub no_clear: bool,

    /// Skip the short pauses after status messages
    #[clap(long = "no-pause")]
    pub no_pause: bool,

    /// Log debug output to stderr
    #[clap(short, long)]
    pub debug: bool,
}

impl CliArgs {
    /// An ugly way to parse the cli args
    pub fn new() -> Self {
        let args = Self::parse();
        Self {
            host: args.host.filter(|h| !h.trim().is_empty()),
            no_clear: args.no_clear,
            no_pause: args.no_pause,
            debug: args.debug,
        }
    }
}
