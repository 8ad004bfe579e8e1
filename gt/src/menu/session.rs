//! Menu session state and dispatch

use std::io::Write;

use colored::Colorize;
use eyre::Result;
use gradestore::{Metric, Student, Summary};
use tracing::{debug, info, warn};

use super::{Input, LineReader, MenuChoice};
use crate::config::Config;
use crate::input::{InputError, parse_grade, parse_index};
use crate::render::metric_lines;

/// Interactive session over one student's grades
pub struct MenuSession {
    student: Student,
    metrics: Vec<Metric>,
    precision: usize,
}

/// Whether the loop keeps going after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl MenuSession {
    pub fn new(student: Student, metrics: Vec<Metric>, precision: usize) -> Self {
        Self {
            student,
            metrics,
            precision,
        }
    }

    pub fn from_config(name: impl Into<String>, config: &Config) -> Self {
        Self::new(Student::new(name), config.active_metrics(), config.precision)
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Run the menu loop until quit or end of input
    pub fn run<R: LineReader, W: Write>(&mut self, reader: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", "Student Grade Metrics Application".bright_cyan().bold())?;
        self.print_menu(out)?;

        loop {
            let line = match reader.read_line("Choice: ")? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    writeln!(out, "^C")?;
                    continue;
                }
                Input::Eof => {
                    writeln!(out)?;
                    break;
                }
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match input.parse::<MenuChoice>() {
                Ok(choice) => {
                    if self.handle(choice, reader, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(InputError::UnknownChoice(choice)) => {
                    debug!(%choice, "MenuSession::run: unknown choice");
                    writeln!(out, "{}", "Invalid choice!".red())?;
                }
                Err(e) => {
                    writeln!(out, "{} {}", "Error:".red(), e)?;
                }
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    fn handle<R: LineReader, W: Write>(&mut self, choice: MenuChoice, reader: &mut R, out: &mut W) -> Result<Flow> {
        debug!(?choice, "MenuSession::handle: called");
        match choice {
            MenuChoice::Add(grade) => {
                let grade = match grade {
                    Some(grade) => Some(grade),
                    None => ask(reader, out, "Enter grade: ", parse_grade)?,
                };
                if let Some(grade) = grade {
                    self.add_grade(grade, out)?;
                }
            }
            MenuChoice::Remove(index) => {
                if self.student.grades().is_empty() {
                    writeln!(out, "{}", "No grades to remove!".yellow())?;
                    return Ok(Flow::Continue);
                }
                let index = match index {
                    Some(index) => Some(index),
                    None => {
                        self.show(out)?;
                        let prompt = format!("Enter index to remove (0-{}): ", self.student.grades().len() - 1);
                        ask(reader, out, &prompt, parse_index)?
                    }
                };
                if let Some(index) = index {
                    self.remove_grade(index, out)?;
                }
            }
            MenuChoice::Show => self.show(out)?,
            MenuChoice::Metrics => self.show_metrics(out)?,
            MenuChoice::Help => self.print_menu(out)?,
            MenuChoice::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Append a grade and confirm
    pub fn add_grade<W: Write>(&mut self, grade: f64, out: &mut W) -> Result<()> {
        self.student.grades_mut().push(grade);
        info!(grade, count = self.student.grades().len(), "Grade added");
        writeln!(out, "{} Grade added!", "✓".green())?;
        Ok(())
    }

    /// Remove the grade at a user-supplied index, reporting out-of-range indices
    pub fn remove_grade<W: Write>(&mut self, index: i64, out: &mut W) -> Result<()> {
        match self.student.grades_mut().remove_at_signed(index) {
            Ok(grade) => {
                info!(index, grade, count = self.student.grades().len(), "Grade removed");
                writeln!(out, "{} Grade removed!", "✓".green())?;
            }
            Err(e) => {
                warn!(error = %e, "remove_grade: rejected index");
                writeln!(out, "{}", "Invalid index!".red())?;
            }
        }
        Ok(())
    }

    pub fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{} {}", "Student:".bright_cyan(), self.student.name())?;
        writeln!(out, "{} {}", "Grades:".bright_cyan(), self.student.grades())?;
        Ok(())
    }

    /// Print each configured metric, or a notice when there is nothing to compute
    pub fn show_metrics<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.student.grades().is_empty() {
            writeln!(out, "{}", "No grades available!".yellow())?;
            return Ok(());
        }
        let summary = Summary::of(&self.student, &self.metrics);
        for line in metric_lines(&summary.metrics, self.precision) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn print_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "  {} Add Grade", "1.".yellow())?;
        writeln!(out, "  {} Remove Grade", "2.".yellow())?;
        writeln!(out, "  {} Display Grades", "3.".yellow())?;
        writeln!(out, "  {} Calculate Metrics", "4.".yellow())?;
        writeln!(out, "  {} Exit", "5.".yellow())?;
        writeln!(out, "{}", "Words work too: add 92, remove 0, show, metrics, quit, help".dimmed())?;
        writeln!(out)?;
        Ok(())
    }
}

/// Prompt for the student name until a non-empty one is given
///
/// Returns `None` if input ends or is interrupted first.
pub fn prompt_name<R: LineReader>(reader: &mut R) -> Result<Option<String>> {
    loop {
        match reader.read_line("Enter student name: ")? {
            Input::Line(line) => {
                let name = line.trim();
                if !name.is_empty() {
                    return Ok(Some(name.to_string()));
                }
            }
            Input::Interrupted | Input::Eof => return Ok(None),
        }
    }
}

/// Read and parse a follow-up value; bad input is reported and yields `None`
fn ask<R, W, T>(reader: &mut R, out: &mut W, prompt: &str, parse: fn(&str) -> Result<T, InputError>) -> Result<Option<T>>
where
    R: LineReader,
    W: Write,
{
    let line = match reader.read_line(prompt)? {
        Input::Line(line) => line,
        Input::Interrupted | Input::Eof => {
            writeln!(out, "{}", "Cancelled.".dimmed())?;
            return Ok(None);
        }
    };
    match parse(&line) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(error = %e, "ask: rejected input");
            writeln!(out, "{} {}", "Error:".red(), e)?;
            Ok(None)
        }
    }
}
