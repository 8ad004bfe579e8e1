//! Interactive grade menu
//!
//! Reads choices line by line and applies them to a single student's grades.
//! Line editing comes from rustyline; the session itself only sees the
//! [`LineReader`] trait so it can be driven by scripted input.

mod choice;
mod session;

pub use choice::MenuChoice;
pub use session::{MenuSession, prompt_name};

use std::io;

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use crate::config::Config;

/// Outcome of reading one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// Ctrl+D or end of piped input
    Eof,
}

/// Source of user input lines
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Run the interactive menu
///
/// This is the main entry point for `gt menu` and for `gt` with no subcommand.
pub fn run_interactive(config: &Config, name: Option<String>) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
    let mut stdout = io::stdout();

    let name = match name.or_else(|| config.student_name.clone()) {
        Some(name) => name,
        None => match prompt_name(&mut rl)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    info!(%name, "run_interactive: starting menu");

    let mut session = MenuSession::from_config(name, config);
    session.run(&mut rl, &mut stdout)
}
