//! The student form: field values, edit target and input focus.

mod intent;
mod reducer;
mod state;

pub use intent::{FieldValue, FormIntent};
pub use reducer::FormReducer;
pub use state::{FormField, FormState};
