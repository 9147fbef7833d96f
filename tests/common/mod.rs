//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use student_roster::config::FormConfig;
use student_roster::roster::{RecordStore, ROWS_KEY};
use student_roster::storage::{MemoryStorage, Persistence};
use student_roster::student::{Age, Gender, Standard, StudentId, StudentRecord};
use student_roster::ui::app::App;
use student_roster::ui::input::handle_key;

pub fn record(
    id: &str,
    name: &str,
    age: u32,
    standard: Standard,
    disability: bool,
    gender: Gender,
) -> StudentRecord {
    StudentRecord {
        id: StudentId::new(id),
        name: name.to_string(),
        age: Age::new(age),
        standard,
        disability,
        gender,
    }
}

/// `{id:"x1", name:"Bob", age:12, standard:1, disibility:true, gender:"male"}`
pub fn bob() -> StudentRecord {
    record("x1", "Bob", 12, Standard::First, true, Gender::Male)
}

/// Store hydrated from `rows`, plus a handle on the backing storage.
pub fn store_with(rows: &[StudentRecord]) -> (RecordStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    if !rows.is_empty() {
        storage.insert_raw(ROWS_KEY, &serde_json::to_string(rows).unwrap());
    }
    let store = RecordStore::open(Persistence::new(Box::new(storage.clone())));
    (store, storage)
}

pub fn stored_rows(storage: &MemoryStorage) -> Option<Vec<StudentRecord>> {
    storage
        .raw(ROWS_KEY)
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

pub fn stored_json(storage: &MemoryStorage) -> serde_json::Value {
    serde_json::from_str(&storage.raw(ROWS_KEY).expect("rows not persisted")).unwrap()
}

pub fn app_with(rows: &[StudentRecord]) -> (App, MemoryStorage) {
    let (store, storage) = store_with(rows);
    (App::new(store, &FormConfig::default()), storage)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
