use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSelectionState {
    /// Index into the record list; `None` when the table is empty.
    pub selected: Option<usize>,
}

impl UiState for RowSelectionState {}
