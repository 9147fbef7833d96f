use thiserror::Error;

use crate::student::Age;

pub const MIN_AGE: i64 = 5;
pub const MAX_AGE: i64 = 100;

/// Reasons a submission is rejected. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out the student's full name!")]
    MissingName,

    #[error("Please add appropriate age!")]
    AgeOutOfRange { age: i64 },

    #[error("Please add appropriate age!")]
    AgeNotANumber { input: String },
}

impl ValidationError {
    /// True when the age input should be flagged.
    pub fn is_age_error(&self) -> bool {
        matches!(self, Self::AgeOutOfRange { .. } | Self::AgeNotANumber { .. })
    }
}

/// Accepts ages from 5 to 100 inclusive.
pub fn validate_age(age: i64) -> Result<Age, ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange { age });
    }
    Ok(Age::new(age as u32))
}
