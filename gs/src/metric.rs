//! Summary metrics computed over a grade collection

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grades::GradeCollection;

/// A summary statistic over a set of grades
///
/// Every metric is a pure function of the collection. An empty collection
/// yields `0.0` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Arithmetic mean
    Mean,
    /// Middle value of the sorted grades; average of the two middle values for even counts
    Median,
}

impl Metric {
    /// All metrics, in display order
    pub const ALL: [Metric; 2] = [Metric::Mean, Metric::Median];

    /// Compute this metric over `grades`
    pub fn compute(&self, grades: &GradeCollection) -> f64 {
        debug!(metric = %self, len = grades.len(), "Metric::compute: called");
        if grades.is_empty() {
            return 0.0;
        }
        match self {
            Self::Mean => mean(grades),
            Self::Median => median(grades),
        }
    }

    /// Human-readable label, e.g. `Mean`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::Median => "Median",
        }
    }
}

fn mean(grades: &GradeCollection) -> f64 {
    grades.iter().sum::<f64>() / grades.len() as f64
}

// Caller guarantees a non-empty collection.
fn median(grades: &GradeCollection) -> f64 {
    let mut sorted: Vec<f64> = grades.iter().collect();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Median => write!(f, "median"),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" | "average" | "avg" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            _ => Err(format!("Unknown metric: {}. Use: mean or median", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(values: &[f64]) -> GradeCollection {
        values.iter().copied().collect()
    }

    #[test]
    fn test_mean() {
        assert_eq!(Metric::Mean.compute(&grades(&[])), 0.0);
        assert_eq!(Metric::Mean.compute(&grades(&[4.0, 6.0])), 5.0);
        assert_eq!(Metric::Mean.compute(&grades(&[1.0, 2.0, 3.0])), 2.0);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(Metric::Median.compute(&grades(&[])), 0.0);
    }

    #[test]
    fn test_median_odd_count_is_order_independent() {
        assert_eq!(Metric::Median.compute(&grades(&[3.0, 1.0, 2.0])), 2.0);
        assert_eq!(Metric::Median.compute(&grades(&[2.0, 3.0, 1.0])), 2.0);
    }

    #[test]
    fn test_median_even_count_averages_middle() {
        assert_eq!(Metric::Median.compute(&grades(&[1.0, 2.0, 3.0, 4.0])), 2.5);
        assert_eq!(Metric::Median.compute(&grades(&[4.0, 1.0, 3.0, 2.0])), 2.5);
    }

    #[test]
    fn test_median_single_and_duplicates() {
        assert_eq!(Metric::Median.compute(&grades(&[42.0])), 42.0);
        assert_eq!(Metric::Median.compute(&grades(&[1.0, 2.0, 2.0, 3.0, 4.0])), 2.0);
    }

    #[test]
    fn test_median_does_not_reorder_collection() {
        let g = grades(&[3.0, 1.0, 2.0]);
        Metric::Median.compute(&g);
        assert_eq!(g.as_slice(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_sorts_nan_last() {
        let g = grades(&[f64::NAN, 1.0, 2.0]);
        assert_eq!(Metric::Median.compute(&g), 2.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let g = grades(&[88.0, 92.5, 71.0, 100.0]);
        for metric in Metric::ALL {
            assert_eq!(metric.compute(&g), metric.compute(&g));
        }
    }

    #[test]
    fn test_metric_display_and_label() {
        assert_eq!(Metric::Mean.to_string(), "mean");
        assert_eq!(Metric::Median.to_string(), "median");
        assert_eq!(Metric::Mean.label(), "Mean");
        assert_eq!(Metric::Median.label(), "Median");
    }

    #[test]
    fn test_metric_parse() {
        assert_eq!("mean".parse::<Metric>().unwrap(), Metric::Mean);
        assert_eq!("MEDIAN".parse::<Metric>().unwrap(), Metric::Median);
        assert_eq!("avg".parse::<Metric>().unwrap(), Metric::Mean);
        assert!("mode".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_serde() {
        let json = serde_json::to_string(&Metric::Median).unwrap();
        assert_eq!(json, "\"median\"");

        let metric: Metric = serde_json::from_str("\"mean\"").unwrap();
        assert_eq!(metric, Metric::Mean);
    }
}
