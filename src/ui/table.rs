/// A fixed width, left aligned, column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(title: &'static str, width: usize) -> Self {
        Self { title, width }
    }
}

/// Pad each field to its column width, fields are never truncated, so an overlong value pushes the rest of the row right
pub fn row<S: AsRef<str>>(columns: &[Column], fields: impl IntoIterator<Item = S>) -> String {
    let line = columns
        .iter()
        .zip(fields)
        .map(|(column, field)| format!("{:<width$}", field.as_ref(), width = column.width))
        .collect::<Vec<_>>()
        .join(" ");
    line.trim_end().to_owned()
}

/// Header line followed by one line per row
pub fn render<S: AsRef<str>>(columns: &[Column], rows: &[Vec<S>]) -> Vec<String> {
    std::iter::once(row(columns, columns.iter().map(|c| c.title)))
        .chain(rows.iter().map(|r| row(columns, r)))
        .collect()
}
