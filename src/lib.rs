pub mod cli;
pub mod config;
pub mod logging;
pub mod roster;
pub mod storage;
pub mod student;
pub mod ui;
