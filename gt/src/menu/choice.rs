//! Menu choices typed at the `Choice:` prompt

use crate::input::{InputError, parse_grade, parse_index};

/// A parsed menu selection; arguments may be given inline (`add 92`)
/// or left for a follow-up prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Add(Option<f64>),
    Remove(Option<i64>),
    Show,
    Metrics,
    Quit,
    Help,
}

impl std::str::FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        match cmd.to_lowercase().as_str() {
            "1" | "add" | "a" => Ok(Self::Add(arg.map(parse_grade).transpose()?)),
            "2" | "remove" | "rm" | "r" => Ok(Self::Remove(arg.map(parse_index).transpose()?)),
            "3" | "show" | "display" | "s" => Ok(Self::Show),
            "4" | "metrics" | "stats" | "m" => Ok(Self::Metrics),
            "5" | "quit" | "exit" | "q" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            _ => Err(InputError::UnknownChoice(s.trim().to_string())),
        }
    }
}
