use crate::student::{Gender, Standard, StudentRecord};
use crate::ui::form::FormField;
use crate::ui::mvi::Intent;

/// A single field overwrite.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Name(String),
    Age(String),
    Standard(Standard),
    Gender(Gender),
    Disability(bool),
}

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Overwrite one field, no validation.
    SetField(FieldValue),
    /// Copy a record into the form and switch submit to "update".
    LoadForEdit(StudentRecord),
    /// Back to defaults and create mode. Focus returns to the name input.
    Reset,
    FocusNext,
    FocusPrev,
    Focus(FormField),
    /// Typed character for the focused text input. Age accepts digits only.
    InsertChar(char),
    Backspace,
    /// Next choice of the focused standard selector or gender radio.
    NextOption,
    PrevOption,
    ToggleDisability,
    FlagAgeError,
    ClearAgeError,
}

impl Intent for FormIntent {}
