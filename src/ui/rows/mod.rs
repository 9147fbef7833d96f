//! Selected row of the results table.

mod intent;
mod reducer;
mod state;

pub use intent::RowSelectionIntent;
pub use reducer::RowSelectionReducer;
pub use state::RowSelectionState;
