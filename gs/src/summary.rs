//! Serializable snapshot of a student's grades and metrics

use serde::{Deserialize, Serialize};

use crate::grades::GradeCollection;
use crate::metric::Metric;
use crate::student::Student;

/// One computed metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub metric: Metric,
    pub value: f64,
}

/// Grades plus the requested metrics, computed at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    pub count: usize,
    pub grades: GradeCollection,
    pub metrics: Vec<MetricValue>,
}

impl Summary {
    /// Compute `metrics` for `student`, keeping the order given
    pub fn of(student: &Student, metrics: &[Metric]) -> Self {
        let grades = student.grades();
        Self {
            name: student.name().to_string(),
            count: grades.len(),
            grades: grades.clone(),
            metrics: metrics
                .iter()
                .map(|&metric| MetricValue {
                    metric,
                    value: metric.compute(grades),
                })
                .collect(),
        }
    }

    /// Value of `metric`, if it was requested
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.metrics.iter().find(|m| m.metric == metric).map(|m| m.value)
    }
}
