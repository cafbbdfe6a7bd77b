use crate::ui::mvi::UiState;

/// Home screen state: the name input field.
///
/// The field is write-through — after every reduce the app commits
/// `value` to the session store, so the two never diverge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeFieldState {
    pub value: String,
}

impl UiState for HomeFieldState {}

impl HomeFieldState {
    /// Column the cursor sits at, in display width terms. The field
    /// appends only, so this is the end of the value.
    pub fn cursor_col(&self) -> u16 {
        self.value.chars().count().min(u16::MAX as usize) as u16
    }
}
