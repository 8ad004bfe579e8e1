//! Ordered, growable collection of grades

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::IndexError;

/// Ordered sequence of grades; insertion order is preserved and indices are stable
/// until the next removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeCollection {
    grades: Vec<f64>,
}

impl GradeCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grade at the end
    pub fn push(&mut self, grade: f64) {
        debug!(grade, len = self.grades.len(), "GradeCollection::push: called");
        self.grades.push(grade);
    }

    /// Remove the grade at `index`, shifting later grades left by one
    ///
    /// Returns the removed grade. On error the collection is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<f64, IndexError> {
        debug!(index, len = self.grades.len(), "GradeCollection::remove_at: called");
        if index >= self.grades.len() {
            debug!(index, "GradeCollection::remove_at: index out of range");
            return Err(IndexError::from_unsigned(index, self.grades.len()));
        }

        let grade = self.grades.remove(index);
        if self.grades.is_empty() {
            // Release the backing allocation once the last grade is gone
            self.grades = Vec::new();
        }
        Ok(grade)
    }

    /// Remove using a signed index as typed by a user; negative indices are rejected
    pub fn remove_at_signed(&mut self, index: i64) -> Result<f64, IndexError> {
        let index = self.checked_index(index)?;
        self.remove_at(index)
    }

    /// Validate a signed index against `0..len`
    pub fn checked_index(&self, index: i64) -> Result<usize, IndexError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.grades.len())
            .ok_or_else(|| IndexError::new(index, self.grades.len()))
    }

    /// Grade at `index`
    pub fn at(&self, index: usize) -> Result<f64, IndexError> {
        self.get(index)
            .ok_or_else(|| IndexError::from_unsigned(index, self.grades.len()))
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.grades.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Iterate grades in insertion order; call again to restart
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.grades.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.grades
    }

    /// Storage currently reserved, in grades
    pub fn capacity(&self) -> usize {
        self.grades.capacity()
    }
}

impl fmt::Display for GradeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, grade) in self.grades.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", grade)?;
        }
        Ok(())
    }
}

impl FromIterator<f64> for GradeCollection {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            grades: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for GradeCollection {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.grades.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GradeCollection {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.grades.iter().copied()
    }
}
