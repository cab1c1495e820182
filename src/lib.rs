pub mod actions;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod menu;
pub mod source;
pub mod tui;
