/// Content of the pastebin result area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PasteResult {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Saved paste, rendered as a link
    Link(String),
    /// Validation, server or network failure message
    Error(String),
}
