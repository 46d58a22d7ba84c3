use ecg_viewer_core::error::Result;
use ecg_viewer_core::record;
use ecg_viewer_core::source::{self, DataSource};
use ecg_viewer_core::{DatasetInfo, FilterCategory, FilterResponse, SampleRecord, ViewerConfig, ViewerError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Talks to the inference server with `window.fetch`.
pub struct HttpDataSource {
    config: ViewerConfig,
}

impl HttpDataSource {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);

        let window = web_sys::window()
            .ok_or_else(|| ViewerError::Transport("no window".to_string()))?;

        let response_js = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(transport)?;
        let response: Response = response_js
            .dyn_into()
            .map_err(|_| ViewerError::Transport("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(ViewerError::Network {
                status: response.status(),
                url,
            });
        }

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        body.as_string()
            .ok_or_else(|| ViewerError::Decode("response body is not text".to_string()))
    }
}

fn transport(e: JsValue) -> ViewerError {
    ViewerError::Transport(format!("{:?}", e))
}

impl DataSource for HttpDataSource {
    async fn fetch_filter(&self, category: FilterCategory) -> Result<FilterResponse> {
        let body = self.get_text(&source::filter_path(category)).await?;
        record::decode(&body)
    }

    async fn fetch_sample(&self, category: FilterCategory, cursor: usize) -> Result<SampleRecord> {
        let body = self.get_text(&source::sample_path(category, cursor)).await?;
        record::decode(&body)
    }

    async fn fetch_info(&self) -> Result<DatasetInfo> {
        let body = self.get_text(source::INFO_PATH).await?;
        record::decode(&body)
    }
}
