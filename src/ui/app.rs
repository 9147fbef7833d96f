use crate::config::FormConfig;
use crate::roster::{RecordStore, ValidationError};
use crate::student::StudentRecord;
use crate::ui::age_error_timer::AgeErrorTimer;
use crate::ui::alert::{AlertIntent, AlertReducer, AlertState};
use crate::ui::form::{FormField, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::rows::{RowSelectionIntent, RowSelectionReducer, RowSelectionState};
use std::time::{Duration, Instant};

pub const STUDENT_ADDED: &str = "Student added successfully!";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    Table,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application state, owned by the run loop.
///
/// The record store is the only thing that touches storage; everything else
/// here is view state driven through reducers.
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: RecordStore,
    form: FormState,
    selection: RowSelectionState,
    alert: AlertState,
    age_error_timer: AgeErrorTimer,
}

impl App {
    pub fn new(store: RecordStore, config: &FormConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: Focus::Form,
            store,
            form: FormState::default(),
            selection: RowSelectionState::default(),
            alert: AlertState::default(),
            age_error_timer: AgeErrorTimer::new(
                config.age_error_timer,
                Duration::from_millis(config.age_error_ms),
            ),
        };
        app.sync_selection();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selection(&self) -> RowSelectionState {
        self.selection
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn selected_record(&self) -> Option<&StudentRecord> {
        self.selection
            .selected
            .and_then(|index| self.store.rows().get(index))
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_selection(&mut self, intent: RowSelectionIntent) {
        dispatch_mvi!(self, selection, RowSelectionReducer, intent);
    }

    fn dispatch_alert(&mut self, intent: AlertIntent) {
        dispatch_mvi!(self, alert, AlertReducer, intent);
    }

    fn sync_selection(&mut self) {
        let len = self.store.len();
        self.dispatch_selection(RowSelectionIntent::Sync { len });
    }

    /// Tab: walk the form controls, then the table, then back to the name input.
    pub fn focus_next(&mut self) {
        match self.focus {
            Focus::Form if self.form.focused.is_last() && !self.store.is_empty() => {
                self.focus = Focus::Table;
            }
            Focus::Form => self.dispatch_form(FormIntent::FocusNext),
            Focus::Table => {
                self.focus = Focus::Form;
                self.dispatch_form(FormIntent::Focus(FormField::Name));
            }
        }
    }

    pub fn focus_prev(&mut self) {
        match self.focus {
            Focus::Form if self.form.focused.is_first() && !self.store.is_empty() => {
                self.focus = Focus::Table;
            }
            Focus::Form => self.dispatch_form(FormIntent::FocusPrev),
            Focus::Table => {
                self.focus = Focus::Form;
                self.dispatch_form(FormIntent::Focus(FormField::Submit));
            }
        }
    }

    /// Create or update depending on whether a record is loaded for editing.
    pub fn submit(&mut self, now: Instant) {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(err) => return self.reject(err, now),
        };

        let edit_id = self.form.edit_target.as_ref().map(|record| record.id.clone());
        let result = match edit_id {
            Some(id) => self.store.update(&id, draft).map(|()| false),
            None => self.store.create(draft).map(|_| true),
        };

        match result {
            Ok(created) => {
                if created {
                    self.dispatch_alert(AlertIntent::Show {
                        message: STUDENT_ADDED.to_string(),
                    });
                }
                self.dispatch_form(FormIntent::Reset);
                self.sync_selection();
            }
            Err(err) => self.reject(err, now),
        }
    }

    fn reject(&mut self, err: ValidationError, now: Instant) {
        tracing::debug!(error = ?err, "Submission rejected");
        if err.is_age_error() {
            self.dispatch_form(FormIntent::FlagAgeError);
            self.age_error_timer.arm(now);
        }
        self.dispatch_alert(AlertIntent::Show {
            message: err.to_string(),
        });
    }

    pub fn select_prev_row(&mut self) {
        self.dispatch_selection(RowSelectionIntent::MoveUp);
    }

    pub fn select_next_row(&mut self) {
        let len = self.store.len();
        self.dispatch_selection(RowSelectionIntent::MoveDown { len });
    }

    /// Load the selected row into the form.
    pub fn request_edit(&mut self) {
        let Some(record) = self.selected_record().cloned() else {
            return;
        };
        self.dispatch_form(FormIntent::LoadForEdit(record));
        self.focus = Focus::Form;
    }

    /// Delete the selected row.
    pub fn request_delete(&mut self) {
        let Some(id) = self.selected_record().map(|record| record.id.clone()) else {
            return;
        };
        self.store.delete(&id);
        self.sync_selection();
        if self.store.is_empty() {
            self.focus = Focus::Form;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.dispatch_alert(AlertIntent::Dismiss);
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.age_error_timer.poll(now) {
            self.dispatch_form(FormIntent::ClearAgeError);
        }
    }
}
