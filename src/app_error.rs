use std::fmt;

/// Reasons a user supplied selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotANumber,
    OutOfRange,
}

/// Errors raised while driving the menu, engine errors are normalised into these by docker_data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The engine could not be contacted, holds the client detail
    DockerConnect(String),
    /// The engine refused a start or stop, holds the engine's message verbatim
    DockerCommand(String),
    InvalidInput(InputError),
    Terminal,
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(_: std::io::Error) -> Self {
        Self::Terminal
    }
}

/// Convert errors into strings to display
impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DockerConnect(detail) => {
                write!(f, "Unable to access the container engine: {detail}")
            }
            Self::DockerCommand(detail) => write!(f, "{detail}"),
            Self::InvalidInput(InputError::NotANumber) => {
                write!(f, "Invalid input, please enter a number.")
            }
            Self::InvalidInput(InputError::OutOfRange) => write!(f, "Invalid choice."),
            Self::Terminal => write!(f, "Unable to read from or write to the terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docker_command_is_shown_verbatim() {
        let err = AppError::DockerCommand(String::from("container abc is not running"));
        assert_eq!(err.to_string(), "container abc is not running");
    }

    #[test]
    fn io_error_becomes_terminal() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(AppError::from(io), AppError::Terminal);
    }

    #[test]
    fn invalid_input_messages() {
        assert_eq!(
            AppError::InvalidInput(InputError::NotANumber).to_string(),
            "Invalid input, please enter a number."
        );
        assert_eq!(
            AppError::InvalidInput(InputError::OutOfRange).to_string(),
            "Invalid choice."
        );
    }
}
