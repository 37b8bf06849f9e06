pub mod cli;
pub mod config;
pub mod logging;
pub mod persistence;
pub mod storage;
pub mod ui;
