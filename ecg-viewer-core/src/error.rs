use crate::filter::FilterCategory;

/// Failures surfaced by the Data Source or the controller.
///
/// None of these is fatal: the controller reports the message and stays
/// interactive, so a later filter or navigation action can recover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewerError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Network { status: u16, url: String },
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Success status, but the body carried an `error` field.
    #[error("{0}")]
    Application(String),
    /// The filter produced no indices.
    #[error("No samples found for the selected filter")]
    EmptyResult(FilterCategory),
}

impl From<serde_json::Error> for ViewerError {
    fn from(e: serde_json::Error) -> Self {
        ViewerError::Decode(e.to_string())
    }
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ViewerError::Network {
            status: 500,
            url: "/api/filter/all".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP error! status: 500 (/api/filter/all)");

        let e = ViewerError::Application("model unavailable".to_string());
        assert_eq!(e.to_string(), "model unavailable");

        let e = ViewerError::EmptyResult(FilterCategory::Normal);
        assert_eq!(e.to_string(), "No samples found for the selected filter");
    }

    #[test]
    fn test_json_errors_become_decode() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ViewerError::from(err), ViewerError::Decode(_)));
    }
}
