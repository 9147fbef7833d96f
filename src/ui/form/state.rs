use crate::roster::ValidationError;
use crate::student::{Gender, Standard, StudentDraft, StudentRecord};
use crate::ui::mvi::UiState;

/// Focusable form controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Age,
    Standard,
    Gender,
    Disability,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 6] = [
        Self::Name,
        Self::Age,
        Self::Standard,
        Self::Gender,
        Self::Disability,
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_first(self) -> bool {
        self == Self::ORDER[0]
    }

    pub fn is_last(self) -> bool {
        self == Self::ORDER[Self::ORDER.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub name: String,
    /// Raw text of the numeric age input.
    pub age: String,
    pub standard: Standard,
    pub gender: Gender,
    pub disability: bool,
    /// Record being edited; `None` in create mode.
    pub edit_target: Option<StudentRecord>,
    pub focused: FormField,
    /// Set on a rejected age, cleared by the timer.
    pub age_error: bool,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Edit student data"
        } else {
            "Create student"
        }
    }

    /// Convert the inputs into a draft. The age range itself is checked by
    /// the record store.
    pub fn to_draft(&self) -> Result<StudentDraft, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let age = self
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::AgeNotANumber {
                input: self.age.clone(),
            })?;
        Ok(StudentDraft {
            name: self.name.clone(),
            age,
            standard: self.standard,
            disability: self.disability,
            gender: self.gender,
        })
    }
}
