//! `stockroom` command-line frontend: argument parsing and the numbered menu.

pub mod args;
pub mod menu;

pub use args::Args;
pub use menu::{Menu, MenuError};
