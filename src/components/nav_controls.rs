use ecg_viewer_core::{Command, NavigationView};
use leptos::prelude::*;

use crate::state::{AppState, ControllerHandle};

/// `3 / 120`, or a dash while nothing is selected.
pub fn position_text(nav: &NavigationView) -> String {
    if nav.position == 0 {
        "\u{2013}".to_string()
    } else {
        format!("{} / {}", nav.position, nav.total)
    }
}

#[component]
pub fn NavControls() -> impl IntoView {
    let state = expect_context::<AppState>();
    let controller = expect_context::<ControllerHandle>();

    view! {
        <div class="nav-controls">
            <button
                class="nav-btn"
                disabled=move || !state.navigation.get().previous_enabled
                on:click=move |_| controller.dispatch(Command::Previous)
                title="Previous sample (\u{2190})"
            >"\u{2190} Previous"</button>
            <span class="nav-position">
                {move || position_text(&state.navigation.get())}
            </span>
            <button
                class="nav-btn"
                disabled=move || !state.navigation.get().next_enabled
                on:click=move |_| controller.dispatch(Command::Next)
                title="Next sample (\u{2192})"
            >"Next \u{2192}"</button>
            {move || state.is_loading().then(|| view! {
                <span class="loading-indicator">"Loading\u{2026}"</span>
            })}
        </div>
    }
}
