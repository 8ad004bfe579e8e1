//! The student whose grades are being tracked

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grades::GradeCollection;

/// A named student owning their grades
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    grades: GradeCollection,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: GradeCollection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &GradeCollection {
        &self.grades
    }

    pub fn grades_mut(&mut self) -> &mut GradeCollection {
        &mut self.grades
    }
}

/// Two-line listing: `Student: <name>` then `Grades: <g0> <g1> ...`
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student: {}", self.name)?;
        write!(f, "Grades: {}", self.grades)
    }
}
