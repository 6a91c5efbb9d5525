use crate::app_data::ContainerId;

/// The write operations the menu can send to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerMessage {
    Start(ContainerId),
    Stop(ContainerId),
}

impl DockerMessage {
    /// State the container is left in when the message succeeds
    pub const fn target_state(&self) -> &'static str {
        match self {
            Self::Start(_) => "running",
            Self::Stop(_) => "stopped",
        }
    }
}
