use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    app_data::{ContainerItem, ImageItem, State},
    app_error::{AppError, InputError},
    docker_data::{ContainerEngine, DockerMessage, STOP_TIMEOUT},
    input_handler::{parse_selection, Selection},
};

use super::{draw_blocks, Pause, Ui};

impl<E: ContainerEngine, R: BufRead, W: Write> Ui<E, R, W> {
    /// Pick one of the exited containers, and start it
    pub(super) async fn start_container(&mut self) -> Result<(), AppError> {
        self.draw_screen()?;
        draw_blocks::title(&mut self.out, "START CONTAINER")?;
        let stopped = match self.engine.list_containers(Some(State::Exited), true).await {
            Ok(stopped) => stopped,
            Err(e) => return self.report(&e).await,
        };
        if stopped.is_empty() {
            writeln!(self.out, "No stopped containers to start.")?;
            self.pause(Pause::Long).await;
            return Ok(());
        }
        if let Some(container) = self.select(&stopped, "START").await? {
            writeln!(self.out, "\nStarting '{}'...", container.name)?;
            self.send(
                DockerMessage::Start(container.id.clone()),
                "Start command sent successfully.",
            )
            .await?;
        }
        Ok(())
    }

    /// Pick one of the containers shown on the main screen, and stop it
    /// The snapshot isn't re-fetched, a container that has since exited is reported by the engine
    pub(super) async fn stop_container(&mut self) -> Result<(), AppError> {
        self.draw_screen()?;
        draw_blocks::title(&mut self.out, "STOP CONTAINER")?;
        let running = self.app_data.get_running().to_vec();
        if running.is_empty() {
            writeln!(self.out, "No running containers to stop.")?;
            self.pause(Pause::Long).await;
            return Ok(());
        }
        if let Some(container) = self.select(&running, "STOP").await? {
            writeln!(
                self.out,
                "\nStopping '{}'... (waiting up to {STOP_TIMEOUT}s)",
                container.name
            )?;
            self.send(
                DockerMessage::Stop(container.id.clone()),
                "Container stopped successfully.",
            )
            .await?;
        }
        Ok(())
    }

    /// Show the tagged local images, and wait for Enter
    pub(super) async fn list_images(&mut self) -> Result<(), AppError> {
        self.draw_screen()?;
        draw_blocks::title(&mut self.out, "LOCAL IMAGES")?;
        match self.engine.list_images().await {
            Ok(images) => {
                let tagged = images
                    .into_iter()
                    .filter(ImageItem::is_tagged)
                    .collect::<Vec<_>>();
                draw_blocks::images(&mut self.out, &tagged)?;
            }
            Err(e) => {
                warn!("{e}");
                writeln!(self.out, "ERROR: {e}")?;
            }
        }
        draw_blocks::prompt(&mut self.out, "\nPress Enter to return to the menu...")?;
        self.input.read_line()?;
        Ok(())
    }

    /// Display a numbered list and read the user's pick, None if nothing should be done
    async fn select<'a>(
        &mut self,
        containers: &'a [ContainerItem],
        verb: &str,
    ) -> Result<Option<&'a ContainerItem>, AppError> {
        draw_blocks::numbered_list(
            &mut self.out,
            verb,
            containers.iter().map(|c| c.name.as_str()),
        )?;
        draw_blocks::prompt(&mut self.out, "\nYour choice: ")?;

        let Some(line) = self.input.read_line()? else {
            writeln!(self.out, "\nOperation cancelled.")?;
            return Ok(None);
        };
        match parse_selection(&line, containers.len()) {
            Ok(Selection::Index(index)) => Ok(containers.get(index)),
            Ok(Selection::Cancel) => {
                writeln!(self.out, "Operation cancelled.")?;
                self.pause(Pause::Short).await;
                Ok(None)
            }
            Err(e) => {
                writeln!(self.out, "{e}")?;
                let pause = match e {
                    AppError::InvalidInput(InputError::NotANumber) => Pause::Long,
                    _ => Pause::Short,
                };
                self.pause(pause).await;
                Ok(None)
            }
        }
    }

    /// Send a write message to the engine, and report how it went
    async fn send(&mut self, message: DockerMessage, success: &str) -> Result<(), AppError> {
        match self.engine.execute(&message).await {
            Ok(()) => {
                info!("{message:?} succeeded");
                writeln!(self.out, "{success}")?;
            }
            Err(e) => writeln!(self.out, "ERROR: {e}")?,
        }
        self.pause(Pause::Long).await;
        Ok(())
    }

    /// Show an engine error from a listing, the loop carries on
    async fn report(&mut self, error: &AppError) -> Result<(), AppError> {
        warn!("{error}");
        writeln!(self.out, "ERROR: {error}")?;
        self.pause(Pause::Long).await;
        Ok(())
    }
}
