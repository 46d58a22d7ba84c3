use ecg_viewer_core::{Command, FilterCategory};
use leptos::prelude::*;

use crate::state::{filter_status_text, AppState, ControllerHandle};

fn filter_btn_class(active: bool) -> &'static str {
    if active { "filter-btn active" } else { "filter-btn" }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let controller = expect_context::<ControllerHandle>();

    view! {
        <div class="filter-bar">
            <div class="filter-buttons">
                {FilterCategory::ALL
                    .into_iter()
                    .map(move |category| view! {
                        <button
                            class=move || filter_btn_class(state.active_filter.get() == category)
                            on:click=move |_| controller.dispatch(Command::Select(category))
                            title=format!("Show {} samples ({})", category.as_str(), category.shortcut())
                        >{category.label()}</button>
                    })
                    .collect_view()}
            </div>
            <span class="filter-status">
                {move || filter_status_text(state.filter_summary.get())}
            </span>
        </div>
    }
}
