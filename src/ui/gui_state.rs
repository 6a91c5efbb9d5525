use std::time::Duration;

/// The options offered by the main menu
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum MenuChoice {
    StartContainer,
    StopContainer,
    ListImages,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 4] = [
        Self::StartContainer,
        Self::StopContainer,
        Self::ListImages,
        Self::Exit,
    ];

    pub const fn key(self) -> char {
        match self {
            Self::StartContainer => '1',
            Self::StopContainer => '2',
            Self::ListImages => '3',
            Self::Exit => '4',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StartContainer => "Start a stopped container",
            Self::StopContainer => "Stop a running container",
            Self::ListImages => "List all local images",
            Self::Exit => "Exit",
        }
    }

    /// None for anything that isn't exactly one of the menu keys
    pub fn from_input(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL.into_iter().find(|choice| choice.key() == c),
            _ => None,
        }
    }
}

/// The menu loop is always in exactly one of these states
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Status {
    Idle,
    InAction(MenuChoice),
    Terminated,
}

impl Status {
    /// Move to the next state, given the menu choice read while Idle
    pub const fn next(self, choice: Option<MenuChoice>) -> Self {
        match (self, choice) {
            (Self::Idle, Some(MenuChoice::Exit)) | (Self::Terminated, _) => Self::Terminated,
            (Self::Idle, Some(choice)) => Self::InAction(choice),
            (Self::Idle, None) | (Self::InAction(_), _) => Self::Idle,
        }
    }
}

/// Cosmetic pause so a message can be read before the screen is cleared
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Pause {
    Short,
    Long,
}

impl Pause {
    pub const fn duration(self) -> Duration {
        match self {
            Self::Short => Duration::from_secs(1),
            Self::Long => Duration::from_secs(2),
        }
    }
}
