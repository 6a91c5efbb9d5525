/// A validated answer to a numbered list prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    /// Zero based position into the list that was displayed
    Index(usize),
}
