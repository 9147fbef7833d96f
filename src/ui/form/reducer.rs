use crate::ui::form::intent::{FieldValue, FormIntent};
use crate::ui::form::state::{FormField, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetField(value) => set_field(state, value),
            FormIntent::LoadForEdit(record) => FormState {
                name: record.name.clone(),
                age: record.age.to_string(),
                standard: record.standard,
                gender: record.gender,
                disability: record.disability,
                edit_target: Some(record),
                focused: FormField::Name,
                age_error: state.age_error,
            },
            FormIntent::Reset => FormState {
                age_error: state.age_error,
                ..FormState::default()
            },
            FormIntent::FocusNext => FormState {
                focused: state.focused.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focused: state.focused.prev(),
                ..state
            },
            FormIntent::Focus(field) => FormState {
                focused: field,
                ..state
            },
            FormIntent::InsertChar(ch) => match state.focused {
                FormField::Name => {
                    let mut name = state.name.clone();
                    name.push(ch);
                    set_field(state, FieldValue::Name(name))
                }
                FormField::Age if ch.is_ascii_digit() => {
                    let mut age = state.age.clone();
                    age.push(ch);
                    set_field(state, FieldValue::Age(age))
                }
                _ => state,
            },
            FormIntent::Backspace => match state.focused {
                FormField::Name => {
                    let mut name = state.name.clone();
                    name.pop();
                    set_field(state, FieldValue::Name(name))
                }
                FormField::Age => {
                    let mut age = state.age.clone();
                    age.pop();
                    set_field(state, FieldValue::Age(age))
                }
                _ => state,
            },
            FormIntent::NextOption => match state.focused {
                FormField::Standard => {
                    let next = state.standard.next();
                    set_field(state, FieldValue::Standard(next))
                }
                FormField::Gender => {
                    let next = state.gender.next();
                    set_field(state, FieldValue::Gender(next))
                }
                _ => state,
            },
            FormIntent::PrevOption => match state.focused {
                FormField::Standard => {
                    let prev = state.standard.prev();
                    set_field(state, FieldValue::Standard(prev))
                }
                FormField::Gender => {
                    let prev = state.gender.prev();
                    set_field(state, FieldValue::Gender(prev))
                }
                _ => state,
            },
            FormIntent::ToggleDisability => {
                let toggled = !state.disability;
                set_field(state, FieldValue::Disability(toggled))
            }
            FormIntent::FlagAgeError => FormState {
                age_error: true,
                ..state
            },
            FormIntent::ClearAgeError => FormState {
                age_error: false,
                ..state
            },
        }
    }
}

fn set_field(state: FormState, value: FieldValue) -> FormState {
    match value {
        FieldValue::Name(name) => FormState { name, ..state },
        FieldValue::Age(age) => FormState { age, ..state },
        FieldValue::Standard(standard) => FormState { standard, ..state },
        FieldValue::Gender(gender) => FormState { gender, ..state },
        FieldValue::Disability(disability) => FormState {
            disability,
            ..state
        },
    }
}
