use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::{
    app_data::AppData, app_error::AppError, docker_data::ContainerEngine,
    input_handler::InputHandler, parse_args::CliArgs,
};

pub use self::gui_state::{MenuChoice, Pause, Status};

mod actions;
mod draw_blocks;
mod gui_state;
mod table;

/// The interactive menu, owns the engine handle for the life of the program
pub struct Ui<E: ContainerEngine, R: BufRead, W: Write> {
    app_data: AppData,
    engine: E,
    input: InputHandler<R>,
    out: W,
    clear_screen: bool,
    pause_enabled: bool,
}

impl<E: ContainerEngine, R: BufRead, W: Write> Ui<E, R, W> {
    pub fn new(engine: E, reader: R, out: W, args: &CliArgs) -> Self {
        Self {
            app_data: AppData::default(),
            engine,
            input: InputHandler::new(reader),
            out,
            clear_screen: !args.no_clear,
            pause_enabled: !args.no_pause,
        }
    }

    /// Run the menu loop until the user exits or input runs out
    /// An unreachable engine on the very first render is fatal, later it is only reported
    pub async fn run(&mut self) -> Result<(), AppError> {
        let mut status = Status::Idle;
        let mut first_render = true;
        while status != Status::Terminated {
            status = match status {
                Status::Idle => {
                    self.refresh(first_render).await?;
                    first_render = false;
                    self.idle().await?
                }
                Status::InAction(choice) => {
                    self.dispatch(choice).await?;
                    status.next(None)
                }
                Status::Terminated => Status::Terminated,
            };
        }
        writeln!(self.out, "Shutting down...")?;
        self.out.flush()?;
        Ok(())
    }

    /// Fetch the running containers for this iteration
    async fn refresh(&mut self, first_render: bool) -> Result<(), AppError> {
        match self.engine.list_containers(None, false).await {
            Ok(running) => {
                debug!("{} running containers", running.len());
                self.app_data.set_running(running);
            }
            Err(e) if first_render => {
                error!("{e}");
                return Err(e);
            }
            Err(e) => {
                error!("{e}");
                self.app_data.set_error(e);
            }
        }
        Ok(())
    }

    /// Draw the main screen, and read a menu choice
    async fn idle(&mut self) -> Result<Status, AppError> {
        self.draw_screen()?;
        draw_blocks::running(&mut self.out, &self.app_data)?;
        draw_blocks::menu(&mut self.out)?;
        draw_blocks::prompt(&mut self.out, "\nEnter your choice: ")?;

        let Some(line) = self.input.read_line()? else {
            return Ok(Status::Terminated);
        };
        let choice = MenuChoice::from_input(&line);
        if choice.is_none() {
            writeln!(self.out, "Invalid option. Please try again.")?;
            self.pause(Pause::Short).await;
        }
        Ok(Status::Idle.next(choice))
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), AppError> {
        info!("menu choice: {choice:?}");
        match choice {
            MenuChoice::StartContainer => self.start_container().await,
            MenuChoice::StopContainer => self.stop_container().await,
            MenuChoice::ListImages => self.list_images().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Clear the terminal, if enabled, and draw the banner
    fn draw_screen(&mut self) -> Result<(), AppError> {
        if self.clear_screen {
            draw_blocks::clear(&mut self.out)?;
        }
        draw_blocks::header(&mut self.out)
    }

    async fn pause(&mut self, pause: Pause) {
        self.out.flush().ok();
        if self.pause_enabled {
            tokio::time::sleep(pause.duration()).await;
        }
    }
}
