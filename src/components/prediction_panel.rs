use ecg_viewer_core::view::{GroundTruthView, PredictionView, NO_PREDICTION_TEXT};
use ecg_viewer_core::Verdict;
use leptos::prelude::*;

use crate::state::AppState;

fn verdict_class(verdict: Verdict) -> &'static str {
    if verdict.is_correct() { "verdict correct" } else { "verdict incorrect" }
}

fn prediction_class(prediction: &PredictionView) -> String {
    format!("prediction-class {}", prediction.css_class())
}

#[component]
pub fn PredictionPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Only the text parts of the sample; the trace stays in the signal.
    let current = move || {
        state
            .sample
            .with(|s| s.as_ref().map(|v| (v.prediction.clone(), v.actual.clone())))
    };

    view! {
        <aside class="prediction-panel">
            <h3>"Model Prediction"</h3>
            {move || {
                // An error replaces the prediction display
                if let Some(message) = state.error.get() {
                    return view! { <div class="error">{message}</div> }.into_any();
                }
                match current() {
                    None => view! {
                        <div class="prediction-placeholder">
                            {if state.is_loading() { "Loading\u{2026}" } else { "No sample loaded" }}
                        </div>
                    }.into_any(),
                    // Ground truth is hidden along with the prediction
                    Some((None, _)) => view! {
                        <div class="error">{NO_PREDICTION_TEXT}</div>
                    }.into_any(),
                    Some((Some(prediction), actual)) => view! {
                        <PredictionResult prediction=prediction.clone() />
                        <ActualLabel actual=actual verdict=prediction.verdict />
                    }.into_any(),
                }
            }}
        </aside>
    }
}

#[component]
fn PredictionResult(prediction: PredictionView) -> impl IntoView {
    let class = prediction_class(&prediction);
    view! {
        <div class=class>
            {prediction.class_name}
        </div>
        <div class="confidence">
            "Confidence: "{prediction.confidence_text}
        </div>
        <div class="raw-score">
            "Raw Score: "{prediction.raw_score_text}
        </div>
    }
}

#[component]
fn ActualLabel(actual: GroundTruthView, verdict: Verdict) -> impl IntoView {
    let label = actual.label_text();
    view! {
        <div class="actual-label">
            <strong>"Actual: "</strong>
            {format!("{} ({})", actual.class_name, label)}
            <div class=verdict_class(verdict)>{verdict.text()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(class_name: &str, verdict: Verdict) -> PredictionView {
        PredictionView {
            class_name: class_name.to_string(),
            confidence_text: "93.4%".to_string(),
            raw_score_text: "0.9342".to_string(),
            verdict,
        }
    }

    #[test]
    fn test_prediction_class() {
        assert_eq!(
            prediction_class(&prediction("Abnormal", Verdict::Correct)),
            "prediction-class abnormal"
        );
        assert_eq!(
            prediction_class(&prediction("Normal", Verdict::Incorrect)),
            "prediction-class normal"
        );
    }

    #[test]
    fn test_verdict_class() {
        assert_eq!(verdict_class(Verdict::Correct), "verdict correct");
        assert_eq!(verdict_class(Verdict::Incorrect), "verdict incorrect");
    }
}
