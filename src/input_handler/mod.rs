use std::{io::BufRead, num::IntErrorKind};

use tracing::debug;

pub use message::Selection;

use crate::app_error::{AppError, InputError};

mod message;

/// Reads whole lines of user input, one answer per line
#[derive(Debug)]
pub struct InputHandler<R: BufRead> {
    reader: R,
}

impl<R: BufRead> InputHandler<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read a single line, without the line ending, None once input is exhausted
    /// Bytes that aren't valid UTF-8 are replaced, so they fail validation like any other bad answer
    pub fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = vec![];
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// Validate an answer to a list of `len` numbered items, where 0 cancels
pub fn parse_selection(input: &str, len: usize) -> Result<Selection, AppError> {
    let choice = input.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            AppError::InvalidInput(InputError::OutOfRange)
        }
        _ => AppError::InvalidInput(InputError::NotANumber),
    })?;
    match usize::try_from(choice) {
        Ok(0) => Ok(Selection::Cancel),
        Ok(x) if x <= len => Ok(Selection::Index(x - 1)),
        _ => Err(AppError::InvalidInput(InputError::OutOfRange)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_line_strips_line_endings() {
        let mut input = InputHandler::new(Cursor::new("1\r\n 2 \n"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(" 2 "));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_replaces_invalid_utf8() {
        let mut input = InputHandler::new(Cursor::new(b"\xff\xfe\n4\n".to_vec()));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn selection_zero_cancels() {
        assert_eq!(parse_selection("0", 3), Ok(Selection::Cancel));
        assert_eq!(parse_selection("0", 0), Ok(Selection::Cancel));
    }

    #[test]
    fn selection_is_one_based() {
        assert_eq!(parse_selection("1", 3), Ok(Selection::Index(0)));
        assert_eq!(parse_selection(" 3 ", 3), Ok(Selection::Index(2)));
    }

    #[test]
    fn selection_out_of_range() {
        let out_of_range = Err(AppError::InvalidInput(InputError::OutOfRange));
        assert_eq!(parse_selection("4", 3), out_of_range);
        assert_eq!(parse_selection("-1", 3), out_of_range);
        assert_eq!(parse_selection("1", 0), out_of_range);
        assert_eq!(parse_selection("99999999999999999999", 3), out_of_range);
        assert_eq!(parse_selection("-99999999999999999999", 3), out_of_range);
    }

    #[test]
    fn selection_not_a_number() {
        let not_a_number = Err(AppError::InvalidInput(InputError::NotANumber));
        assert_eq!(parse_selection("two", 3), not_a_number);
        assert_eq!(parse_selection("", 3), not_a_number);
        assert_eq!(parse_selection("1.5", 3), not_a_number);
    }
}
