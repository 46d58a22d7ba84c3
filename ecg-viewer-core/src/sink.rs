use crate::filter::FilterCategory;
use crate::record::DatasetInfo;
use crate::view::{FilterSummary, NavigationView, Phase, SampleView};

/// Receives the render model. Chart, text fields and buttons live behind it.
pub trait PresentationSink {
    /// Called once before the first request.
    fn prepare_surface(&self) {}

    fn show_phase(&self, phase: Phase);

    fn show_dataset_info(&self, _info: &DatasetInfo) {}

    /// The filter control should highlight `category`.
    fn show_active_filter(&self, category: FilterCategory);

    fn show_filter(&self, summary: &FilterSummary);

    fn show_sample(&self, view: &SampleView);

    fn show_navigation(&self, nav: &NavigationView);

    /// Empty the chart, prediction and signal info areas.
    fn clear_sample(&self);

    /// Replaces the prediction display with `message`.
    fn show_error(&self, message: &str);
}
