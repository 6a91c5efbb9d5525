use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::{
    app_data::{AppData, ContainerItem, ImageItem},
    app_error::AppError,
};

use super::{
    gui_state::MenuChoice,
    table::{self, Column},
};

const NAME: &str = env!("CARGO_PKG_NAME");
const SEPARATOR: &str = "---------------------------------------------------";

const CONTAINER_COLUMNS: [Column; 4] = [
    Column::new("#", 4),
    Column::new("NAME", 30),
    Column::new("IMAGE", 45),
    Column::new("STATUS", 20),
];

const IMAGE_COLUMNS: [Column; 3] = [
    Column::new("REPOSITORY", 40),
    Column::new("TAG", 20),
    Column::new("SIZE", 15),
];

/// Clear the whole screen and move the cursor to the top left
pub fn clear<W: Write>(out: &mut W) -> Result<(), AppError> {
    Ok(execute!(out, Clear(ClearType::All), MoveTo(0, 0))?)
}

/// Banner shown at the top of every screen
pub fn header<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "### {}: CONTAINER MANAGER ###", NAME.to_uppercase())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

pub fn title<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(out, "--- {text} ---")?;
    Ok(())
}

/// The running containers snapshot, or the error that stopped it being fetched
pub fn running<W: Write>(out: &mut W, app_data: &AppData) -> Result<(), AppError> {
    writeln!(out, "Current status: running containers")?;
    if let Some(error) = app_data.get_error() {
        writeln!(out, "\nERROR: {error}")?;
    } else if app_data.get_running().is_empty() {
        writeln!(out, "No running containers at the moment.")?;
    } else {
        for line in container_table(app_data.get_running()) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn container_table(containers: &[ContainerItem]) -> Vec<String> {
    let rows = containers
        .iter()
        .enumerate()
        .map(|(index, c)| {
            vec![
                format!("[{}]", index + 1),
                c.name.clone(),
                c.image.clone(),
                c.state.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    table::render(&CONTAINER_COLUMNS, &rows)
}

pub fn menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\n--- MENU ---")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "[{}] {}", choice.key(), choice.label())?;
    }
    Ok(())
}

/// A 1-based numbered list of names, with 0 to cancel
pub fn numbered_list<'a, W: Write>(
    out: &mut W,
    verb: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), AppError> {
    writeln!(out, "Select the container to {verb}:")?;
    for (index, name) in names.into_iter().enumerate() {
        writeln!(out, "  [{}] {name}", index + 1)?;
    }
    writeln!(out, "  [0] Cancel")?;
    Ok(())
}

/// Tagged images only, the caller is expected to have filtered out the rest
pub fn images<W: Write>(out: &mut W, images: &[ImageItem]) -> Result<(), AppError> {
    if images.is_empty() {
        writeln!(out, "No images found.")?;
        return Ok(());
    }
    let rows = images
        .iter()
        .map(|i| {
            vec![
                i.repository().to_owned(),
                i.tag().to_owned(),
                i.size_display(),
            ]
        })
        .collect::<Vec<_>>();
    for line in table::render(&IMAGE_COLUMNS, &rows) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write text without a newline, and flush so it is visible before input is read
pub fn prompt<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
