use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeFieldState;
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeFieldState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::Seed { value } => HomeFieldState { value },
            HomeIntent::Insert(c) => {
                // Control characters never reach the field as text.
                if c.is_control() {
                    return state;
                }
                let mut value = state.value;
                value.push(c);
                HomeFieldState { value }
            }
            HomeIntent::Backspace => {
                let mut value = state.value;
                value.pop();
                HomeFieldState { value }
            }
            HomeIntent::Clear => HomeFieldState::default(),
        }
    }
}
