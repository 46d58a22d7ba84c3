use crate::filter::FilterCategory;

/// A user action, independent of whether it came from a click or a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    Select(FilterCategory),
}

impl Command {
    /// Map a DOM `KeyboardEvent.key` value. Unbound keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Command::Previous),
            "ArrowRight" => Some(Command::Next),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => FilterCategory::from_shortcut(c).map(Command::Select),
                    _ => None,
                }
            }
        }
    }
}
