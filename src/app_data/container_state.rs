use std::fmt;

use bollard::models::ContainerSummary;

/// Shown in place of an image reference the engine can't name
pub const UNKNOWN_IMAGE: &str = "unknown";

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ContainerId(String);

impl From<String> for ContainerId {
    fn from(x: String) -> Self {
        Self(x)
    }
}

impl From<&str> for ContainerId {
    fn from(x: &str) -> Self {
        Self(x.to_owned())
    }
}

impl ContainerId {
    pub fn get(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a container, as reported by the engine
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum State {
    Created,
    Dead,
    Exited,
    Paused,
    Removing,
    Restarting,
    Running,
    Unknown,
}

impl State {
    /// Name used by the engine, and by its `status` list filter
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Dead => "dead",
            Self::Exited => "exited",
            Self::Paused => "paused",
            Self::Removing => "removing",
            Self::Restarting => "restarting",
            Self::Running => "running",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for State {
    fn from(input: &str) -> Self {
        match input {
            "created" => Self::Created,
            "dead" => Self::Dead,
            "exited" => Self::Exited,
            "paused" => Self::Paused,
            "removing" => Self::Removing,
            "restarting" => Self::Restarting,
            "running" => Self::Running,
            _ => Self::Unknown,
        }
    }
}

impl From<Option<&str>> for State {
    fn from(input: Option<&str>) -> Self {
        input.map_or(Self::Unknown, Self::from)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Info for a single container, fetched fresh for every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerItem {
    pub id: ContainerId,
    pub image: String,
    pub name: String,
    pub state: State,
}

impl ContainerItem {
    #[cfg(test)]
    pub fn new(id: ContainerId, name: &str, image: &str, state: State) -> Self {
        Self {
            id,
            image: image_reference(Some(image)),
            name: name.trim_start_matches('/').to_owned(),
            state,
        }
    }
}

impl From<ContainerSummary> for ContainerItem {
    fn from(summary: ContainerSummary) -> Self {
        let id = ContainerId::from(summary.id.unwrap_or_default());
        let name = summary
            .names
            .as_ref()
            .and_then(|names| names.first())
            .map_or_else(|| id.get().chars().take(12).collect(), Clone::clone);
        Self {
            image: image_reference(summary.image.as_deref()),
            name: name.trim_start_matches('/').to_owned(),
            state: State::from(summary.state.as_deref()),
            id,
        }
    }
}

/// The engine reports a bare digest when the image the container was created from has lost its tag
fn image_reference(image: Option<&str>) -> String {
    match image.map(str::trim) {
        Some(i) if !i.is_empty() && !i.starts_with("sha256:") => i.to_owned(),
        _ => String::from(UNKNOWN_IMAGE),
    }
}
