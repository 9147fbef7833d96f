mod common;

use common::bob;
use student_roster::student::{Gender, Standard};
use student_roster::ui::form::{FieldValue, FormField, FormIntent, FormReducer, FormState};
use student_roster::ui::mvi::Reducer;

fn focused_on(field: FormField) -> FormState {
    FormState {
        focused: field,
        ..FormState::default()
    }
}

#[test]
fn set_field_overwrites_without_validation() {
    let state = FormReducer::reduce(
        FormState::default(),
        FormIntent::SetField(FieldValue::Age("999".to_string())),
    );
    assert_eq!(state.age, "999");
    assert!(!state.age_error);
}

#[test]
fn load_for_edit_copies_record_and_sets_target() {
    let state = FormReducer::reduce(focused_on(FormField::Submit), FormIntent::LoadForEdit(bob()));

    assert_eq!(state.name, "Bob");
    assert_eq!(state.age, "12");
    assert_eq!(state.standard, Standard::First);
    assert_eq!(state.gender, Gender::Male);
    assert!(state.disability);
    assert_eq!(state.edit_target, Some(bob()));
    assert_eq!(state.focused, FormField::Name);
}

#[test]
fn reset_restores_defaults_and_leaves_edit_mode() {
    let editing = FormReducer::reduce(FormState::default(), FormIntent::LoadForEdit(bob()));
    let state = FormReducer::reduce(editing, FormIntent::Reset);

    assert_eq!(
        state,
        FormState::default(),
        "reset should produce a blank create-mode form"
    );
}

#[test]
fn reset_keeps_pending_age_error_flag() {
    let flagged = FormReducer::reduce(FormState::default(), FormIntent::FlagAgeError);
    let state = FormReducer::reduce(flagged, FormIntent::Reset);
    assert!(state.age_error);
}

#[test]
fn insert_char_edits_focused_text_input() {
    let state = FormReducer::reduce(focused_on(FormField::Name), FormIntent::InsertChar('A'));
    assert_eq!(state.name, "A");

    let state = FormReducer::reduce(focused_on(FormField::Standard), FormIntent::InsertChar('A'));
    assert_eq!(state, focused_on(FormField::Standard));
}

#[test]
fn age_input_accepts_digits_only() {
    let mut state = focused_on(FormField::Age);
    for ch in ['1', '-', '2', '.', 'e'] {
        state = FormReducer::reduce(state, FormIntent::InsertChar(ch));
    }
    assert_eq!(state.age, "12");
}

#[test]
fn backspace_removes_last_char() {
    let state = FormState {
        name: "Bob".to_string(),
        ..focused_on(FormField::Name)
    };
    let state = FormReducer::reduce(state, FormIntent::Backspace);
    assert_eq!(state.name, "Bo");

    let empty = FormReducer::reduce(focused_on(FormField::Age), FormIntent::Backspace);
    assert_eq!(empty.age, "");
}

#[test]
fn options_cycle_standard_and_gender() {
    let state = FormReducer::reduce(focused_on(FormField::Standard), FormIntent::PrevOption);
    assert_eq!(state.standard, Standard::Sixth);

    let state = FormReducer::reduce(focused_on(FormField::Gender), FormIntent::NextOption);
    assert_eq!(state.gender, Gender::Male);

    let state = FormReducer::reduce(focused_on(FormField::Name), FormIntent::NextOption);
    assert_eq!(state, focused_on(FormField::Name));
}

#[test]
fn toggle_disability_flips_flag() {
    let state = FormReducer::reduce(FormState::default(), FormIntent::ToggleDisability);
    assert!(state.disability);
    let state = FormReducer::reduce(state, FormIntent::ToggleDisability);
    assert!(!state.disability);
}

#[test]
fn focus_moves_through_controls() {
    let mut state = FormState::default();
    let mut seen = vec![state.focused];
    for _ in 0..5 {
        state = FormReducer::reduce(state, FormIntent::FocusNext);
        seen.push(state.focused);
    }
    assert_eq!(seen, FormField::ORDER);

    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FormField::Name);
    let state = FormReducer::reduce(state, FormIntent::FocusPrev);
    assert_eq!(state.focused, FormField::Submit);
}

#[test]
fn age_error_flag_round_trip() {
    let state = FormReducer::reduce(FormState::default(), FormIntent::FlagAgeError);
    assert!(state.age_error);
    let state = FormReducer::reduce(state, FormIntent::ClearAgeError);
    assert!(!state.age_error);
}
