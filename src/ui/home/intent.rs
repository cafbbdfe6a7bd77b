use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// Load an initial value (config pre-seed) into the field.
    Seed { value: String },
    /// Append one typed character.
    Insert(char),
    /// Delete the last character.
    Backspace,
    /// Empty the field.
    Clear,
}

impl Intent for HomeIntent {}
