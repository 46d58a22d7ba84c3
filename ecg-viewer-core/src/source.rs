use crate::error::Result;
use crate::filter::FilterCategory;
use crate::record::{DatasetInfo, FilterResponse, SampleRecord};

pub const INFO_PATH: &str = "/api/info";

pub fn filter_path(category: FilterCategory) -> String {
    format!("/api/filter/{category}")
}

/// `cursor` is the position in the filtered list, not the dataset row.
pub fn sample_path(category: FilterCategory, cursor: usize) -> String {
    format!("/api/data/filtered/{category}/{cursor}")
}

/// Backend that owns the dataset, the filtered index sets and the model.
///
/// Implementations must map a non-success status or an in-band `error`
/// field to an `Err` (see [`crate::record::decode`]).
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_filter(&self, category: FilterCategory) -> Result<FilterResponse>;

    async fn fetch_sample(&self, category: FilterCategory, cursor: usize) -> Result<SampleRecord>;

    async fn fetch_info(&self) -> Result<DatasetInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(filter_path(FilterCategory::All), "/api/filter/all");
        assert_eq!(filter_path(FilterCategory::Abnormal), "/api/filter/abnormal");
        assert_eq!(
            sample_path(FilterCategory::Normal, 17),
            "/api/data/filtered/normal/17"
        );
    }
}
