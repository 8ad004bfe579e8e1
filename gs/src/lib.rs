//! GradeStore - in-memory grade tracking for a single student
//!
//! Holds an ordered collection of grades and computes summary metrics over it.
//!
//! # Example
//!
//! ```
//! use gradestore::{Metric, Student};
//!
//! let mut student = Student::new("Ada");
//! student.grades_mut().push(90.0);
//! student.grades_mut().push(80.0);
//! student.grades_mut().push(100.0);
//!
//! assert_eq!(Metric::Mean.compute(student.grades()), 90.0);
//! assert_eq!(Metric::Median.compute(student.grades()), 90.0);
//! ```

mod error;
mod grades;
mod metric;
mod student;
mod summary;

pub use error::IndexError;
pub use grades::GradeCollection;
pub use metric::Metric;
pub use student::Student;
pub use summary::{MetricValue, Summary};
