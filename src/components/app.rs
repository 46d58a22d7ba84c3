use ecg_viewer_core::{Command, Controller, ViewerConfig};
use leptos::prelude::*;

use crate::api::HttpDataSource;
use crate::components::filter_bar::FilterBar;
use crate::components::nav_controls::NavControls;
use crate::components::prediction_panel::PredictionPanel;
use crate::components::signal_chart::SignalChart;
use crate::components::signal_info::SignalInfo;
use crate::components::toolbar::Toolbar;
use crate::state::{AppState, ControllerHandle};

#[component]
pub fn App(config: ViewerConfig) -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    let controller = ControllerHandle::new(Controller::new(HttpDataSource::new(config), state));
    provide_context(controller);

    // Arrows page through the filter, 1/2/3 pick a filter.
    let _keys = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(command) = Command::from_key(&ev.key()) {
            ev.prevent_default();
            controller.dispatch(command);
        }
    });

    controller.initialize();

    view! {
        <div class="app">
            <Toolbar />
            <div class="main">
                <FilterBar />
                <div class="viewer-body">
                    <section class="chart-panel">
                        <SignalChart />
                        <SignalInfo />
                    </section>
                    <PredictionPanel />
                </div>
                <NavControls />
            </div>
        </div>
    }
}
