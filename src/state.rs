use std::rc::Rc;

use ecg_viewer_core::view::{NavigationView, Phase, SampleView};
use ecg_viewer_core::{
    Command, Controller, DatasetInfo, FilterCategory, FilterSummary, PresentationSink,
};
use leptos::prelude::*;

use crate::api::HttpDataSource;

pub type ViewerController = Controller<HttpDataSource, AppState>;

/// Reactive mirror of what the controller last rendered. Components read
/// these signals; only the controller writes them, through
/// [`PresentationSink`].
#[derive(Clone, Copy)]
pub struct AppState {
    pub phase: RwSignal<Phase>,
    pub active_filter: RwSignal<FilterCategory>,
    pub filter_summary: RwSignal<Option<FilterSummary>>,
    pub dataset_info: RwSignal<Option<DatasetInfo>>,
    pub sample: RwSignal<Option<SampleView>>,
    pub navigation: RwSignal<NavigationView>,
    pub error: RwSignal<Option<String>>,
    pub surface_ready: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(Phase::Empty),
            active_filter: RwSignal::new(FilterCategory::All),
            filter_summary: RwSignal::new(None),
            dataset_info: RwSignal::new(None),
            sample: RwSignal::new(None),
            navigation: RwSignal::new(NavigationView::default()),
            error: RwSignal::new(None),
            surface_ready: RwSignal::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.get() == Phase::Loading
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink for AppState {
    fn prepare_surface(&self) {
        self.surface_ready.set(true);
    }

    fn show_phase(&self, phase: Phase) {
        self.phase.set(phase);
    }

    fn show_dataset_info(&self, info: &DatasetInfo) {
        self.dataset_info.set(Some(info.clone()));
    }

    fn show_active_filter(&self, category: FilterCategory) {
        self.active_filter.set(category);
        self.filter_summary.set(None);
        self.error.set(None);
    }

    fn show_filter(&self, summary: &FilterSummary) {
        self.filter_summary.set(Some(*summary));
    }

    fn show_sample(&self, view: &SampleView) {
        self.error.set(None);
        self.navigation.set(view.navigation);
        self.sample.set(Some(view.clone()));
    }

    fn show_navigation(&self, nav: &NavigationView) {
        self.navigation.set(*nav);
    }

    fn clear_sample(&self) {
        self.sample.set(None);
    }

    fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }
}

/// Copyable handle to the controller. The controller is not `Send`, so it
/// lives in local arena storage and components only hold the key.
#[derive(Clone, Copy)]
pub struct ControllerHandle(StoredValue<Rc<ViewerController>, LocalStorage>);

impl ControllerHandle {
    pub fn new(controller: ViewerController) -> Self {
        Self(StoredValue::new_local(Rc::new(controller)))
    }

    fn controller(self) -> Option<Rc<ViewerController>> {
        let ctrl = self.0.try_get_value();
        if ctrl.is_none() {
            log::warn!("Controller already disposed");
        }
        ctrl
    }

    pub fn dispatch(self, command: Command) {
        let Some(ctrl) = self.controller() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            ctrl.dispatch(command).await;
        });
    }

    pub fn initialize(self) {
        let Some(ctrl) = self.controller() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            ctrl.initialize().await;
        });
    }
}

/// Text for the filter status line under the buttons.
pub fn filter_status_text(summary: Option<FilterSummary>) -> String {
    match summary {
        Some(s) => format!(
            "{}: {} of {} samples",
            s.category.label(),
            s.matching,
            s.total_rows
        ),
        None => String::new(),
    }
}
