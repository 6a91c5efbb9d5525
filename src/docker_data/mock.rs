use parking_lot::Mutex;

use super::{ContainerEngine, DockerMessage};
use crate::{
    app_data::{ContainerId, ContainerItem, ImageItem, State},
    app_error::AppError,
};

/// In memory engine, records every write message it receives
#[derive(Debug, Default)]
pub struct MockEngine {
    containers: Vec<ContainerItem>,
    images: Vec<ImageItem>,
    reject: Option<String>,
    /// Container listings succeed this many times, then the engine is unreachable
    reachable_lists: Option<usize>,
    list_count: Mutex<usize>,
    calls: Mutex<Vec<DockerMessage>>,
}

impl MockEngine {
    pub fn with_container(mut self, id: &str, name: &str, state: State) -> Self {
        self.containers.push(ContainerItem::new(
            ContainerId::from(id),
            name,
            "busybox:latest",
            state,
        ));
        self
    }

    pub fn with_image(mut self, tags: &[&str], size: u64) -> Self {
        self.images.push(ImageItem::new(tags, size));
        self
    }

    /// Every start or stop is refused with the given message
    pub fn rejecting(mut self, message: &str) -> Self {
        self.reject = Some(message.to_owned());
        self
    }

    pub fn unreachable_after(mut self, lists: usize) -> Self {
        self.reachable_lists = Some(lists);
        self
    }

    pub fn calls(&self) -> Vec<DockerMessage> {
        self.calls.lock().clone()
    }

    fn record(&self, message: DockerMessage) -> Result<(), AppError> {
        self.calls.lock().push(message);
        self.reject
            .as_ref()
            .map_or(Ok(()), |m| Err(AppError::DockerCommand(m.clone())))
    }
}

impl ContainerEngine for MockEngine {
    async fn list_containers(
        &self,
        status: Option<State>,
        all: bool,
    ) -> Result<Vec<ContainerItem>, AppError> {
        let mut count = self.list_count.lock();
        if self.reachable_lists.is_some_and(|limit| *count >= limit) {
            return Err(AppError::DockerConnect(String::from(
                "connection refused",
            )));
        }
        *count += 1;
        Ok(self
            .containers
            .iter()
            .filter(|c| all || c.state == State::Running)
            .filter(|c| status.map_or(true, |s| c.state == s))
            .cloned()
            .collect())
    }

    async fn list_images(&self) -> Result<Vec<ImageItem>, AppError> {
        Ok(self.images.clone())
    }

    async fn start_container(&self, id: &ContainerId) -> Result<(), AppError> {
        self.record(DockerMessage::Start(id.clone()))
    }

    async fn stop_container(&self, id: &ContainerId) -> Result<(), AppError> {
        self.record(DockerMessage::Stop(id.clone()))
    }
}
