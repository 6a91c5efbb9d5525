use std::collections::HashMap;

use bollard::{
    container::{ListContainersOptions, StartContainerOptions, StopContainerOptions},
    errors::Error as BollardError,
    image::ListImagesOptions,
    Docker, API_DEFAULT_VERSION,
};
use tracing::{debug, warn};

use crate::{
    app_data::{ContainerId, ContainerItem, ImageItem, State},
    app_error::AppError,
    parse_args::CliArgs,
};

mod message;
#[cfg(test)]
pub mod mock;

pub use message::DockerMessage;

/// Seconds the engine waits after SIGTERM before killing a container
pub const STOP_TIMEOUT: i64 = 10;

/// Seconds before a request over a user supplied socket gives up
const SOCKET_TIMEOUT: u64 = 120;

/// Read and write access to a container engine, every failure already normalised into an AppError
#[allow(async_fn_in_trait)]
pub trait ContainerEngine {
    /// Containers in engine order, only running ones unless `all` is set
    async fn list_containers(
        &self,
        status: Option<State>,
        all: bool,
    ) -> Result<Vec<ContainerItem>, AppError>;

    /// Images in engine order, untagged ones included
    async fn list_images(&self) -> Result<Vec<ImageItem>, AppError>;

    async fn start_container(&self, id: &ContainerId) -> Result<(), AppError>;

    /// Graceful stop, the engine owns the grace period and any forced kill
    async fn stop_container(&self, id: &ContainerId) -> Result<(), AppError>;

    /// Dispatch a single write message
    async fn execute(&self, message: &DockerMessage) -> Result<(), AppError> {
        match message {
            DockerMessage::Start(id) => self.start_container(id).await,
            DockerMessage::Stop(id) => self.stop_container(id).await,
        }
    }
}

/// Engine adapter backed by the bollard docker client
#[derive(Debug, Clone)]
pub struct DockerData {
    docker: Docker,
}

impl DockerData {
    /// Connect to the engine, and ping it, so an unreachable engine is found before the menu is drawn
    pub async fn connect(args: &CliArgs) -> Result<Self, AppError> {
        let connection = args
            .host
            .as_ref()
            .map_or_else(Docker::connect_with_local_defaults, |host| {
                Docker::connect_with_socket(host, SOCKET_TIMEOUT, API_DEFAULT_VERSION)
            });
        let docker = connection.map_err(|e| AppError::DockerConnect(e.to_string()))?;
        let version = docker
            .ping()
            .await
            .map_err(|e| AppError::DockerConnect(e.to_string()))?;
        debug!("engine ping: {version}");
        Ok(Self { docker })
    }

    /// Convert a bollard error from a start or stop into the app taxonomy
    fn command_error(err: BollardError, message: &DockerMessage) -> AppError {
        let err = match err {
            BollardError::DockerResponseServerError {
                status_code: 304, ..
            } => AppError::DockerCommand(format!(
                "container is already {}",
                message.target_state()
            )),
            BollardError::DockerResponseServerError {
                status_code,
                message: detail,
            } => {
                if detail.is_empty() {
                    AppError::DockerCommand(format!(
                        "engine refused the request with status {status_code}"
                    ))
                } else {
                    AppError::DockerCommand(detail)
                }
            }
            other => AppError::DockerConnect(other.to_string()),
        };
        warn!("{message:?} failed: {err}");
        err
    }
}

impl ContainerEngine for DockerData {
    async fn list_containers(
        &self,
        status: Option<State>,
        all: bool,
    ) -> Result<Vec<ContainerItem>, AppError> {
        let filters = status.map_or_else(HashMap::new, |s| {
            HashMap::from([("status", vec![s.as_str()])])
        });
        let containers = self
            .docker
            .list_containers(Some(ListContainersOptions {
                all,
                filters,
                ..Default::default()
            }))
            .await
            .map_err(|e| {
                warn!("list containers: {e}");
                AppError::DockerConnect(e.to_string())
            })?;
        Ok(containers.into_iter().map(ContainerItem::from).collect())
    }

    async fn list_images(&self) -> Result<Vec<ImageItem>, AppError> {
        let images = self
            .docker
            .list_images(Some(ListImagesOptions::<String> {
                all: false,
                ..Default::default()
            }))
            .await
            .map_err(|e| {
                warn!("list images: {e}");
                AppError::DockerConnect(e.to_string())
            })?;
        Ok(images.into_iter().map(ImageItem::from).collect())
    }

    async fn start_container(&self, id: &ContainerId) -> Result<(), AppError> {
        debug!("starting {id}");
        self.docker
            .start_container(id.get(), None::<StartContainerOptions<String>>)
            .await
            .map_err(|e| Self::command_error(e, &DockerMessage::Start(id.clone())))
    }

    async fn stop_container(&self, id: &ContainerId) -> Result<(), AppError> {
        debug!("stopping {id}");
        self.docker
            .stop_container(id.get(), Some(StopContainerOptions { t: STOP_TIMEOUT }))
            .await
            .map_err(|e| Self::command_error(e, &DockerMessage::Stop(id.clone())))
    }
}
