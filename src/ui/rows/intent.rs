use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum RowSelectionIntent {
    MoveUp,
    MoveDown { len: usize },
    /// The list changed length; keep the selection in bounds.
    Sync { len: usize },
}

impl Intent for RowSelectionIntent {}
