use crate::nav::Route;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Push a route on top of the stack.
    Open(Route),
    /// Pop the top route. No-op at the list screen.
    Back,
}

impl Intent for NavIntent {}
