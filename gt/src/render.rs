//! Text and JSON rendering of grade summaries

use colored::Colorize;
use eyre::Result;
use gradestore::{MetricValue, Summary};

/// One `Label: value` line per metric, e.g. `Mean: 85.00`
pub fn metric_lines(metrics: &[MetricValue], precision: usize) -> Vec<String> {
    metrics
        .iter()
        .map(|m| format!("{}: {:.*}", m.metric.label().bold(), precision, m.value))
        .collect()
}

/// Student listing followed by the metric lines
pub fn render_text(summary: &Summary, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Student:".bright_cyan(), summary.name));
    out.push_str(&format!("{} {}\n", "Grades:".bright_cyan(), summary.grades));
    for line in metric_lines(&summary.metrics, precision) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradestore::{Metric, Student};

    fn summary() -> Summary {
        let mut student = Student::new("Ada");
        student.grades_mut().extend([90.0, 85.0, 70.0]);
        Summary::of(&student, &Metric::ALL)
    }

    #[test]
    fn test_metric_lines_use_precision() {
        colored::control::set_override(false);
        let s = summary();

        assert_eq!(metric_lines(&s.metrics, 2), vec!["Mean: 81.67", "Median: 85.00"]);
        assert_eq!(metric_lines(&s.metrics, 0), vec!["Mean: 82", "Median: 85"]);
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);

        let text = render_text(&summary(), 1);

        assert_eq!(text, "Student: Ada\nGrades: 90 85 70\nMean: 81.7\nMedian: 85.0\n");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Ada");
        assert_eq!(value["count"], 3);
        assert_eq!(value["metrics"][1]["metric"], "median");
        assert_eq!(value["metrics"][1]["value"], 85.0);
    }
}
