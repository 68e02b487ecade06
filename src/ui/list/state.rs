use crate::ui::mvi::UiState;

/// Selected row on the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    pub selected: usize,
}

impl UiState for ListCursor {}
