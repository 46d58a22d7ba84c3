use leptos::prelude::*;

use crate::state::AppState;

const DASH: &str = "\u{2013}";

#[component]
pub fn SignalInfo() -> impl IntoView {
    let state = expect_context::<AppState>();

    // (min, max, mean, row) as display strings
    let fields = move || {
        state.sample.with(|s| match s {
            Some(view) => {
                let (min, max, mean) = match &view.stats {
                    Some(st) => (st.min_text(), st.max_text(), st.mean_text()),
                    None => (DASH.to_string(), DASH.to_string(), DASH.to_string()),
                };
                (min, max, mean, view.row_number.to_string())
            }
            None => (DASH.to_string(), DASH.to_string(), DASH.to_string(), DASH.to_string()),
        })
    };

    view! {
        <div class="signal-info">
            <div class="info-item">
                <span class="info-label">"Min"</span>
                <span class="info-value">{move || fields().0}</span>
            </div>
            <div class="info-item">
                <span class="info-label">"Max"</span>
                <span class="info-value">{move || fields().1}</span>
            </div>
            <div class="info-item">
                <span class="info-label">"Mean"</span>
                <span class="info-value">{move || fields().2}</span>
            </div>
            <div class="info-item">
                <span class="info-label">"Row"</span>
                <span class="info-value">{move || fields().3}</span>
            </div>
        </div>
    }
}
