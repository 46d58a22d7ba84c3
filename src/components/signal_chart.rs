use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::{get_canvas_ctx, trace_renderer};
use crate::state::AppState;

#[component]
pub fn SignalChart() -> impl IntoView {
    let state = expect_context::<AppState>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Bumped on window resize so the canvas re-syncs its resolution
    let resize_tick = RwSignal::new(0u32);
    let _resize = window_event_listener(leptos::ev::resize, move |_| {
        resize_tick.update(|n| *n = n.wrapping_add(1));
    });

    Effect::new(move || {
        let _ = resize_tick.get();
        if !state.surface_ready.get() {
            return;
        }

        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();

        // Sync canvas internal resolution with display size
        let rect = canvas.get_bounding_client_rect();
        let display_w = rect.width() as u32;
        let display_h = rect.height() as u32;
        if display_w == 0 || display_h == 0 {
            return;
        }
        if canvas.width() != display_w || canvas.height() != display_h {
            canvas.set_width(display_w);
            canvas.set_height(display_h);
        }

        let Some(ctx) = get_canvas_ctx(canvas) else {
            log::error!("Signal chart: no 2d context");
            return;
        };

        state.sample.with(|sample| {
            let trace = sample.as_ref().map(|s| s.trace.as_slice()).unwrap_or(&[]);
            trace_renderer::draw_trace(&ctx, trace, display_w as f64, display_h as f64);
        });
    });

    view! {
        <div class="chart-container">
            <canvas node_ref=canvas_ref class="signal-canvas" />
            {move || (state.is_loading() && state.sample.with(|s| s.is_none())).then(|| view! {
                <div class="chart-overlay">"Loading\u{2026}"</div>
            })}
        </div>
    }
}
