use crate::ui::mvi::Reducer;
use crate::ui::rows::intent::RowSelectionIntent;
use crate::ui::rows::state::RowSelectionState;

pub struct RowSelectionReducer;

impl Reducer for RowSelectionReducer {
    type State = RowSelectionState;
    type Intent = RowSelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let selected = match intent {
            RowSelectionIntent::MoveUp => state.selected.map(|i| i.saturating_sub(1)),
            RowSelectionIntent::MoveDown { len } => match state.selected {
                _ if len == 0 => None,
                None => Some(0),
                Some(i) => Some((i + 1).min(len - 1)),
            },
            RowSelectionIntent::Sync { len } => match state.selected {
                _ if len == 0 => None,
                None => Some(0),
                Some(i) => Some(i.min(len - 1)),
            },
        };
        RowSelectionState { selected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(selected: Option<usize>) -> RowSelectionState {
        RowSelectionState { selected }
    }

    #[test]
    fn move_down_stops_at_last_row() {
        let state = RowSelectionReducer::reduce(at(Some(1)), RowSelectionIntent::MoveDown { len: 2 });
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn move_up_stops_at_first_row() {
        let state = RowSelectionReducer::reduce(at(Some(0)), RowSelectionIntent::MoveUp);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn sync_clamps_after_delete() {
        let state = RowSelectionReducer::reduce(at(Some(3)), RowSelectionIntent::Sync { len: 3 });
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn sync_selects_first_row_when_rows_appear() {
        let state = RowSelectionReducer::reduce(at(None), RowSelectionIntent::Sync { len: 1 });
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn sync_clears_when_empty() {
        let state = RowSelectionReducer::reduce(at(Some(0)), RowSelectionIntent::Sync { len: 0 });
        assert_eq!(state.selected, None);
    }
}
