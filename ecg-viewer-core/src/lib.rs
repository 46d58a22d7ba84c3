//! Target-independent core of the ECG sample viewer: filter categories,
//! wire records, the render model and the pagination controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod input;
pub mod record;
pub mod sink;
pub mod source;
pub mod stats;
pub mod view;

pub use config::ViewerConfig;
pub use controller::Controller;
pub use error::ViewerError;
pub use filter::FilterCategory;
pub use input::Command;
pub use record::{DatasetInfo, FilterResponse, Prediction, SampleRecord};
pub use sink::PresentationSink;
pub use source::DataSource;
pub use stats::SignalStats;
pub use view::{FilterSummary, NavigationView, Phase, SampleView, Verdict};
