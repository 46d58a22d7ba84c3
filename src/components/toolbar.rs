use ecg_viewer_core::{DatasetInfo, FilterCategory};
use leptos::prelude::*;

use crate::state::AppState;

/// One-line dataset description for the toolbar.
pub fn dataset_summary(info: &DatasetInfo) -> String {
    format!(
        "{} records \u{00b7} {} samples each",
        info.total_rows, info.signal_length
    )
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let show_help = RwSignal::new(false);

    view! {
        <div class="toolbar">
            <span
                class="toolbar-brand"
                style="cursor: pointer"
                on:click=move |_| show_help.set(true)
                title="Keyboard shortcuts"
            ><b>"ECG"</b>" Viewer"</span>

            <span class="toolbar-dataset">
                {move || state.dataset_info.with(|i| i.as_ref().map(dataset_summary))}
            </span>

            // Spacer
            <div style="flex: 1;"></div>

            <button
                class="toolbar-help-btn"
                on:click=move |_| show_help.set(true)
                title="Keyboard shortcuts"
            >"?"</button>

            {move || show_help.get().then(|| view! {
                <div class="about-overlay" on:click=move |_| show_help.set(false)>
                    <div class="about-dialog" on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()>
                        <div class="about-header">
                            <span class="about-title"><b>"ECG"</b>" Viewer"</span>
                            <span class="about-version">{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
                        </div>
                        <p class="about-desc">"Browse classified ECG samples and compare the model's prediction with the recorded label."</p>
                        <table class="shortcut-table">
                            <tr><td><kbd>"\u{2190}"</kbd></td><td>"Previous sample"</td></tr>
                            <tr><td><kbd>"\u{2192}"</kbd></td><td>"Next sample"</td></tr>
                            {FilterCategory::ALL
                                .into_iter()
                                .map(|category| view! {
                                    <tr>
                                        <td><kbd>{category.shortcut().to_string()}</kbd></td>
                                        <td>{format!("Filter: {}", category.label())}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </table>
                        {move || state.dataset_info.with(|info| info.as_ref().map(|info| {
                            let rows = info
                                .class_distribution
                                .iter()
                                .map(|(class, count)| view! {
                                    <div>{format!("{}: {}", class, count)}</div>
                                })
                                .collect_view();
                            view! { <div class="class-distribution">{rows}</div> }
                        }))}
                        <button class="about-close" on:click=move |_| show_help.set(false)>"Close"</button>
                    </div>
                </div>
            })}
        </div>
    }
}
