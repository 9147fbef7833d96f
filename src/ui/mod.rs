//! Terminal front end: a form on the left, the results table on the right.

pub mod age_error_timer;
pub mod alert;
pub mod alert_view;
pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod form_view;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod rows;
pub mod runtime;
pub mod table_view;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
