use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListCursor;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListCursor;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let selected = match intent {
            ListIntent::MoveUp { len } => {
                if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected.min(len) - 1
                }
            }
            ListIntent::MoveDown { len } => {
                if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                }
            }
            ListIntent::Clamp { len } => state.selected.min(len.saturating_sub(1)),
        };
        ListCursor { selected }
    }
}
