//! Render model handed to the presentation sink.
//!
//! Everything here is plain data: the sink decides how a field is drawn,
//! the controller decides what it says.

use crate::error::ViewerError;
use crate::filter::FilterCategory;
use crate::record::{Prediction, SampleRecord};
use crate::stats::SignalStats;

pub const NO_PREDICTION_TEXT: &str = "Failed to make prediction";

/// Controller lifecycle for the current (filter, cursor) target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Empty,
    Loading,
    Loaded,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSummary {
    pub category: FilterCategory,
    /// Length of the active index list.
    pub matching: usize,
    pub total_rows: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationView {
    /// 1-based; 0 when nothing is selected.
    pub position: usize,
    pub total: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl NavigationView {
    pub fn at(cursor: Option<usize>, total: usize) -> Self {
        match cursor {
            Some(c) if c < total => Self {
                position: c + 1,
                total,
                previous_enabled: c > 0,
                next_enabled: c + 1 < total,
            },
            _ => Self {
                total,
                ..Self::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Verdict::Correct => "\u{2713} Correct",
            Verdict::Incorrect => "\u{2717} Incorrect",
        }
    }

    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub class_name: String,
    /// Percentage with one decimal, e.g. `93.4%`.
    pub confidence_text: String,
    /// Four decimals.
    pub raw_score_text: String,
    pub verdict: Verdict,
}

impl PredictionView {
    fn new(prediction: &Prediction, verdict: Verdict) -> Self {
        Self {
            class_name: prediction.class_name.clone(),
            confidence_text: format!("{:.1}%", prediction.confidence * 100.0),
            raw_score_text: format!("{:.4}", prediction.raw_score),
            verdict,
        }
    }

    /// Style hook for the class badge (`normal` / `abnormal`).
    pub fn css_class(&self) -> String {
        self.class_name.to_lowercase()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroundTruthView {
    pub class_name: String,
    pub label: f64,
}

impl GroundTruthView {
    /// Integral labels print without a fractional part.
    pub fn label_text(&self) -> String {
        if self.label.fract() == 0.0 && self.label.is_finite() {
            format!("{}", self.label as i64)
        } else {
            format!("{}", self.label)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampleView {
    /// Chart trace; x is the sample position.
    pub trace: Vec<f64>,
    /// `None` renders [`NO_PREDICTION_TEXT`] and hides the ground truth.
    pub prediction: Option<PredictionView>,
    pub actual: GroundTruthView,
    pub stats: Option<SignalStats>,
    /// 1-based dataset row.
    pub row_number: u64,
    pub navigation: NavigationView,
}

impl SampleView {
    pub fn from_record(record: SampleRecord, cursor: usize, total: usize) -> Self {
        let verdict = record.is_correct().map(Verdict::from_correct);
        let prediction = record
            .prediction
            .as_ref()
            .zip(verdict)
            .map(|(p, v)| PredictionView::new(p, v));
        let stats = SignalStats::from_signal(&record.signal_data);

        Self {
            prediction,
            actual: GroundTruthView {
                class_name: record.actual_class,
                label: record.actual_label,
            },
            stats,
            row_number: record.row_index + 1,
            navigation: NavigationView::at(Some(cursor), total),
            trace: record.signal_data,
        }
    }
}

pub fn filter_error_message(err: &ViewerError) -> String {
    match err {
        ViewerError::EmptyResult(_) => err.to_string(),
        other => format!("Failed to load filtered data: {other}"),
    }
}

pub fn sample_error_message(err: &ViewerError) -> String {
    format!("Failed to load data: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: f64, prediction: Option<Prediction>) -> SampleRecord {
        SampleRecord {
            signal_data: vec![1.0, 2.0, 3.0, 4.0],
            prediction,
            actual_label: label,
            actual_class: if label > 0.0 { "Abnormal" } else { "Normal" }.to_string(),
            row_index: 41,
            total_filtered: 10,
            ..Default::default()
        }
    }

    fn normal_prediction() -> Prediction {
        Prediction {
            class_name: "Normal".to_string(),
            confidence: 0.93419,
            raw_score: 0.065812,
            prediction: 0,
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let first = NavigationView::at(Some(0), 3);
        assert_eq!(first.position, 1);
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);

        let last = NavigationView::at(Some(2), 3);
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);

        let only = NavigationView::at(Some(0), 1);
        assert!(!only.previous_enabled && !only.next_enabled);

        let none = NavigationView::at(None, 0);
        assert_eq!(none.position, 0);
        assert!(!none.previous_enabled && !none.next_enabled);
    }

    #[test]
    fn test_sample_view_formats_prediction() {
        let view = SampleView::from_record(sample(0.0, Some(normal_prediction())), 4, 10);
        let pred = view.prediction.as_ref().unwrap();
        assert_eq!(pred.class_name, "Normal");
        assert_eq!(pred.css_class(), "normal");
        assert_eq!(pred.confidence_text, "93.4%");
        assert_eq!(pred.raw_score_text, "0.0658");
        assert_eq!(pred.verdict, Verdict::Correct);
        assert_eq!(view.row_number, 42);
        assert_eq!(view.navigation.position, 5);
        assert_eq!(view.trace.len(), 4);

        let stats = view.stats.unwrap();
        assert_eq!(stats.mean_text(), "2.500");
    }

    #[test]
    fn test_sample_view_incorrect_prediction() {
        let view = SampleView::from_record(sample(5.0, Some(normal_prediction())), 0, 1);
        assert_eq!(view.prediction.unwrap().verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_sample_view_without_prediction() {
        let view = SampleView::from_record(sample(1.0, None), 0, 1);
        assert!(view.prediction.is_none());
        assert_eq!(view.actual.class_name, "Abnormal");
    }

    #[test]
    fn test_label_text() {
        let gt = |label| GroundTruthView {
            class_name: String::new(),
            label,
        };
        assert_eq!(gt(0.0).label_text(), "0");
        assert_eq!(gt(4.0).label_text(), "4");
        assert_eq!(gt(-1.0).label_text(), "-1");
        assert_eq!(gt(0.5).label_text(), "0.5");
    }

    #[test]
    fn test_error_messages() {
        let empty = ViewerError::EmptyResult(FilterCategory::Normal);
        assert_eq!(
            filter_error_message(&empty),
            "No samples found for the selected filter"
        );

        let app = ViewerError::Application("model unavailable".to_string());
        assert_eq!(
            filter_error_message(&app),
            "Failed to load filtered data: model unavailable"
        );
        assert_eq!(sample_error_message(&app), "Failed to load data: model unavailable");
    }
}
