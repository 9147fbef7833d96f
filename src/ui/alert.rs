//! Blocking message box. While visible it swallows every key except dismiss.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible {
        message: String,
    },
}

impl UiState for AlertState {}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message } => Some(message),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AlertIntent {
    Show { message: String },
    Dismiss,
}

impl Intent for AlertIntent {}

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Show { message } => AlertState::Visible { message },
            AlertIntent::Dismiss => AlertState::Hidden,
        }
    }
}
