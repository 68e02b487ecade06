use crate::nav::{NavStack, Route};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub stack: NavStack,
}

impl UiState for NavState {}

impl NavState {
    pub fn current(&self) -> &Route {
        self.stack.current()
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.depth() == 1
    }
}
