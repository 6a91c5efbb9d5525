use crate::app_error::AppError;

pub mod container_state;
pub mod image_data;

pub use container_state::{ContainerId, ContainerItem, State};
pub use image_data::ImageItem;

/// State gathered during a single menu render, dropped at the start of the next one
#[derive(Debug, Clone, Default)]
pub struct AppData {
    running: Vec<ContainerItem>,
    error: Option<AppError>,
}

impl AppData {
    /// Replace the running snapshot, and clear any error left from the previous refresh
    pub fn set_running(&mut self, running: Vec<ContainerItem>) {
        self.running = running;
        self.error = None;
    }

    /// The running containers, in the order the engine reported them
    pub fn get_running(&self) -> &[ContainerItem] {
        &self.running
    }

    /// Error related methods

    /// return single app_state error
    pub const fn get_error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// insert single app_state error, the running snapshot can no longer be trusted so is emptied
    pub fn set_error(&mut self, error: AppError) {
        self.running.clear();
        self.error = Some(error);
    }
}
