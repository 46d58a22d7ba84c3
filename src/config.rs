use ecg_viewer_core::config::PAGE_KEYS;
use ecg_viewer_core::ViewerConfig;
use web_sys::UrlSearchParams;

/// Read settings from the host page. Query parameters are applied after the
/// `<meta>` tags, so `?api_base=...` overrides what the page declares.
///
/// Logging is not up yet when this runs, so warnings are returned to the
/// caller instead of logged.
pub fn load() -> (ViewerConfig, Vec<String>) {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            for (key, meta_name) in PAGE_KEYS {
                let selector = format!("meta[name=\"{}\"]", meta_name);
                if let Ok(Some(el)) = doc.query_selector(&selector) {
                    if let Some(content) = el.get_attribute("content") {
                        pairs.push((key, content));
                    }
                }
            }
        }

        let params = window
            .location()
            .search()
            .and_then(|search| UrlSearchParams::new_with_str(&search));
        if let Ok(params) = params {
            for (key, _) in PAGE_KEYS {
                if let Some(value) = params.get(key) {
                    pairs.push((key, value));
                }
            }
        }
    }

    ViewerConfig::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
}
