//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use gradestore::Metric;
use std::path::PathBuf;
use tracing::debug;

use crate::input::parse_grade;

/// GradeTracker - track a student's grades and compute mean and median
#[derive(Debug, Parser)]
#[command(name = "gt", version, about = "Track a student's grades and compute mean and median")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive grade menu
    Menu {
        /// Student name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Compute metrics for grades given on the command line
    #[command(allow_negative_numbers = true)]
    Stats {
        /// Grades to summarize
        #[arg(required = true, value_parser = parse_grade)]
        grades: Vec<f64>,

        /// Student name shown in the output
        #[arg(short, long)]
        name: Option<String>,

        /// Metric to compute (repeatable; default: from config)
        #[arg(short = 'm', long = "metric")]
        metrics: Vec<Metric>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for `stats`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
