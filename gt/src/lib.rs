//! GradeTracker - interactive grade tracking for a single student
//!
//! Wraps the [`gradestore`] core with a command-line surface: an interactive
//! menu for adding and removing grades, and a one-shot `stats` command.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration types and loading
//! - [`input`] - Parsing of typed grades and indices
//! - [`menu`] - Interactive menu session
//! - [`render`] - Text and JSON output

pub mod cli;
pub mod config;
pub mod input;
pub mod menu;
pub mod render;

pub use config::Config;
pub use input::InputError;
pub use menu::{MenuSession, run_interactive};
