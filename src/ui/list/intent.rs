use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    MoveUp { len: usize },
    MoveDown { len: usize },
    /// The list was replaced; keep the cursor inside the new length.
    Clamp { len: usize },
}

impl Intent for ListIntent {}
