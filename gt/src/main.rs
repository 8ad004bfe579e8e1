//! GradeTracker CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use gradestore::{Metric, Student, Summary};
use tracing::{debug, info};

use gradetracker::cli::{Cli, Command, OutputFormat};
use gradetracker::config::Config;
use gradetracker::menu;
use gradetracker::render::{render_json, render_text};

fn parse_level(s: &str) -> tracing::Level {
    match s.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
            tracing::Level::INFO
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradetracker")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::INFO);

    let log_file = fs::File::create(log_dir.join("gradetracker.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized, writing to {}", log_dir.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;
    debug!(?config, "main: configuration loaded");

    match cli.command {
        None => menu::run_interactive(&config, None),
        Some(Command::Menu { name }) => menu::run_interactive(&config, name),
        Some(Command::Stats {
            grades,
            name,
            metrics,
            format,
        }) => cmd_stats(&config, grades, name, metrics, format),
    }
}

/// Summarize grades given on the command line
fn cmd_stats(
    config: &Config,
    grades: Vec<f64>,
    name: Option<String>,
    metrics: Vec<Metric>,
    format: OutputFormat,
) -> Result<()> {
    debug!(count = grades.len(), %format, "cmd_stats: called");
    let name = name
        .or_else(|| config.student_name.clone())
        .unwrap_or_else(|| "student".to_string());
    let metrics = if metrics.is_empty() { config.active_metrics() } else { metrics };

    let mut student = Student::new(name);
    student.grades_mut().extend(grades);
    let summary = Summary::of(&student, &metrics);

    match format {
        OutputFormat::Json => println!("{}", render_json(&summary)?),
        OutputFormat::Text => print!("{}", render_text(&summary, config.precision)),
    }
    Ok(())
}
