//! Student records as they are held in memory and persisted under `"rows"`.

mod id;
mod record;

pub use id::StudentId;
pub use record::{Age, Gender, Standard, StudentDraft, StudentRecord};
