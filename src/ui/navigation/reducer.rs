use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavIntent;
use crate::ui::navigation::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Open(route) => {
                tracing::debug!(route = %route, "Navigate");
                state.stack.push(route);
            }
            NavIntent::Back => {
                if state.stack.pop() {
                    tracing::debug!(route = %state.current(), "Navigate back");
                }
            }
        }
        state
    }
}
