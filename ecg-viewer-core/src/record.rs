//! Wire records returned by the sample API.
//!
//! Every response may carry an `error` field next to an otherwise valid
//! payload; [`check`] turns that into a [`ViewerError::Application`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Responses that can report an application-level failure in-band.
pub trait ApiResponse {
    fn error_message(&self) -> Option<&str>;
}

/// Reject a response that carries an `error` field.
pub fn check<T: ApiResponse>(response: T) -> Result<T> {
    match response.error_message() {
        Some(msg) => Err(ViewerError::Application(msg.to_string())),
        None => Ok(response),
    }
}

/// Parse a response body and apply [`check`].
pub fn decode<T>(body: &str) -> Result<T>
where
    T: ApiResponse + for<'de> Deserialize<'de>,
{
    // An error body rarely matches the success schema, so look for the
    // field on its own before attempting the typed parse.
    if let Ok(ErrorOnly { error: Some(msg) }) = serde_json::from_str::<ErrorOnly>(body) {
        return Err(ViewerError::Application(msg));
    }
    let parsed: T = serde_json::from_str(body)?;
    check(parsed)
}

#[derive(Deserialize)]
struct ErrorOnly {
    #[serde(default)]
    error: Option<String>,
}

/// `GET /api/filter/{category}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse {
    #[serde(default)]
    pub indices: Vec<u64>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub total_rows: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse for FilterResponse {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class_name: String,
    pub confidence: f64,
    pub raw_score: f64,
    /// Binary class, 0 = normal, 1 = abnormal.
    pub prediction: u8,
}

/// `GET /api/data/filtered/{category}/{cursor}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(default)]
    pub signal_data: Vec<f64>,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub actual_label: f64,
    #[serde(default)]
    pub actual_class: String,
    #[serde(default)]
    pub row_index: u64,
    #[serde(default)]
    pub total_filtered: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse for SampleRecord {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl SampleRecord {
    /// Ground truth collapsed to the binary class: any label above zero is
    /// the positive (abnormal) class.
    pub fn actual_binary(&self) -> u8 {
        if self.actual_label > 0.0 {
            1
        } else {
            0
        }
    }

    /// `None` when the record carries no prediction.
    pub fn is_correct(&self) -> Option<bool> {
        self.prediction
            .as_ref()
            .map(|p| p.prediction == self.actual_binary())
    }
}

/// `GET /api/info`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    #[serde(default)]
    pub total_rows: usize,
    #[serde(default)]
    pub signal_length: usize,
    #[serde(default)]
    pub class_distribution: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse for DatasetInfo {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: f64, predicted: u8) -> SampleRecord {
        SampleRecord {
            signal_data: vec![0.0],
            prediction: Some(Prediction {
                class_name: if predicted == 1 { "Abnormal" } else { "Normal" }.to_string(),
                confidence: 0.9,
                raw_score: 0.1,
                prediction: predicted,
            }),
            actual_label: label,
            ..Default::default()
        }
    }

    #[test]
    fn test_binarization() {
        assert_eq!(record(0.0, 0).is_correct(), Some(true));
        assert_eq!(record(5.0, 0).is_correct(), Some(false));
        assert_eq!(record(-1.0, 0).is_correct(), Some(true));
        assert_eq!(record(1.0, 1).is_correct(), Some(true));
        assert_eq!(record(0.5, 1).is_correct(), Some(true));
    }

    #[test]
    fn test_missing_prediction_has_no_verdict() {
        let rec = SampleRecord {
            prediction: None,
            ..Default::default()
        };
        assert_eq!(rec.is_correct(), None);
    }

    #[test]
    fn test_decode_filter_response() {
        let body = r#"{"filter_type":"normal","indices":[3,1,7],"count":3,"total_rows":100}"#;
        let resp: FilterResponse = decode(body).unwrap();
        assert_eq!(resp.indices, vec![3, 1, 7]);
        assert_eq!(resp.count, 3);
        assert_eq!(resp.total_rows, 100);
    }

    #[test]
    fn test_decode_error_field_with_success_status() {
        let err = decode::<SampleRecord>(r#"{"error":"model unavailable"}"#).unwrap_err();
        assert_eq!(err, ViewerError::Application("model unavailable".to_string()));
    }

    #[test]
    fn test_decode_null_prediction() {
        let body = r#"{
            "row_index": 12,
            "signal_data": [0.1, 0.2],
            "actual_label": 2.0,
            "actual_class": "Abnormal",
            "prediction": null,
            "total_filtered": 40
        }"#;
        let rec: SampleRecord = decode(body).unwrap();
        assert!(rec.prediction.is_none());
        assert_eq!(rec.row_index, 12);
        assert_eq!(rec.actual_binary(), 1);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode::<FilterResponse>("<html>").unwrap_err();
        assert!(matches!(err, ViewerError::Decode(_)));
    }

    #[test]
    fn test_decode_dataset_info() {
        let body = r#"{"total_rows":100,"signal_length":187,"class_distribution":{"0.0":50,"1.0":50}}"#;
        let info: DatasetInfo = decode(body).unwrap();
        assert_eq!(info.signal_length, 187);
        assert_eq!(info.class_distribution.get("1.0"), Some(&50));
    }
}
