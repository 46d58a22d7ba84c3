//! Filtered pagination controller.
//!
//! Holds the active filter category, its ordered index list and a cursor
//! into that list. Every request is tagged with a ticket; only the response
//! to the most recently issued ticket may touch state or the sink, so the
//! last user action wins no matter which response arrives last.
//!
//! Operations take `&self` and never hold a `RefCell` borrow across an
//! await, so overlapping calls from event handlers are fine.

use std::cell::{Cell, RefCell};

use crate::error::ViewerError;
use crate::filter::FilterCategory;
use crate::input::Command;
use crate::sink::PresentationSink;
use crate::source::DataSource;
use crate::view::{
    filter_error_message, sample_error_message, FilterSummary, NavigationView, Phase, SampleView,
};

#[derive(Debug, Default)]
struct NavState {
    category: FilterCategory,
    indices: Vec<u64>,
    /// `None` iff `indices` is empty.
    cursor: Option<usize>,
    phase: Phase,
}

pub struct Controller<D, S> {
    source: D,
    sink: S,
    state: RefCell<NavState>,
    latest_ticket: Cell<u64>,
}

impl<D: DataSource, S: PresentationSink> Controller<D, S> {
    pub fn new(source: D, sink: S) -> Self {
        Self {
            source,
            sink,
            state: RefCell::new(NavState::default()),
            latest_ticket: Cell::new(0),
        }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn category(&self) -> FilterCategory {
        self.state.borrow().category
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.borrow().cursor
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn filtered_indices(&self) -> Vec<u64> {
        self.state.borrow().indices.clone()
    }

    pub fn total(&self) -> usize {
        self.state.borrow().indices.len()
    }

    /// Row identifier under the cursor.
    pub fn current_row(&self) -> Option<u64> {
        let st = self.state.borrow();
        st.cursor.and_then(|c| st.indices.get(c).copied())
    }

    fn issue_ticket(&self) -> u64 {
        let ticket = self.latest_ticket.get() + 1;
        self.latest_ticket.set(ticket);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest_ticket.get() == ticket
    }

    fn set_phase(&self, phase: Phase) {
        self.state.borrow_mut().phase = phase;
        self.sink.show_phase(phase);
    }

    /// Prepare the chart, show dataset info and select `all`.
    pub async fn initialize(&self) {
        self.sink.prepare_surface();

        match self.source.fetch_info().await {
            Ok(info) => {
                log::info!(
                    "Dataset: {} rows, {} samples per signal",
                    info.total_rows,
                    info.signal_length
                );
                self.sink.show_dataset_info(&info);
            }
            Err(e) => log::warn!("Dataset info unavailable: {e}"),
        }

        self.select_filter(FilterCategory::All).await;
    }

    pub async fn dispatch(&self, command: Command) {
        match command {
            Command::Previous => self.previous().await,
            Command::Next => self.next().await,
            Command::Select(category) => self.select_filter(category).await,
        }
    }

    /// Switch category. The previous list is dropped immediately; on success
    /// the cursor resets to 0 and the first record is loaded.
    pub async fn select_filter(&self, category: FilterCategory) {
        let ticket = self.issue_ticket();
        {
            let mut st = self.state.borrow_mut();
            st.category = category;
            st.indices.clear();
            st.cursor = None;
        }
        log::info!("Selecting filter '{category}'");
        self.sink.show_active_filter(category);
        self.sink.show_navigation(&NavigationView::at(None, 0));
        self.set_phase(Phase::Loading);

        let result = self.source.fetch_filter(category).await;
        if !self.is_current(ticket) {
            log::debug!("Dropping stale filter response for '{category}' (ticket {ticket})");
            return;
        }

        let response = match result {
            Ok(r) => r,
            Err(e) => return self.fail_filter(&e),
        };

        if response.count != response.indices.len() {
            log::warn!(
                "Filter '{category}' reported count {} but returned {} indices",
                response.count,
                response.indices.len()
            );
        }
        self.sink.show_filter(&FilterSummary {
            category,
            matching: response.indices.len(),
            total_rows: response.total_rows,
        });

        if response.indices.is_empty() {
            return self.fail_filter(&ViewerError::EmptyResult(category));
        }

        {
            let mut st = self.state.borrow_mut();
            st.indices = response.indices;
            st.cursor = Some(0);
        }
        self.load_at(0).await;
    }

    fn fail_filter(&self, err: &ViewerError) {
        log::error!("Error loading filtered indices: {err}");
        self.sink.clear_sample();
        self.sink.show_navigation(&NavigationView::at(None, 0));
        self.sink.show_error(&filter_error_message(err));
        self.set_phase(Phase::Error);
    }

    /// Fetch and render the record at `cursor`. Out-of-range values are
    /// ignored without a request.
    pub async fn load_at(&self, cursor: usize) {
        let (category, total) = {
            let st = self.state.borrow();
            (st.category, st.indices.len())
        };
        if cursor >= total {
            log::warn!("Ignoring load of position {cursor}: '{category}' has {total} samples");
            return;
        }

        let ticket = self.issue_ticket();
        self.set_phase(Phase::Loading);
        log::debug!("Loading '{category}' position {cursor} (ticket {ticket})");

        let result = self.source.fetch_sample(category, cursor).await;
        if !self.is_current(ticket) {
            log::debug!("Dropping stale sample for '{category}' position {cursor} (ticket {ticket})");
            return;
        }

        match result {
            Ok(record) => {
                if record.total_filtered != total {
                    log::warn!(
                        "Sample reports {} filtered rows, index list has {total}",
                        record.total_filtered
                    );
                }
                self.state.borrow_mut().cursor = Some(cursor);
                let view = SampleView::from_record(record, cursor, total);
                self.sink.show_sample(&view);
                self.sink.show_navigation(&view.navigation);
                self.set_phase(Phase::Loaded);
            }
            Err(e) => {
                log::error!("Error loading filtered data: {e}");
                let nav = NavigationView::at(self.cursor(), total);
                self.sink.show_navigation(&nav);
                self.sink.show_error(&sample_error_message(&e));
                self.set_phase(Phase::Error);
            }
        }
    }

    pub async fn previous(&self) {
        let target = {
            let mut st = self.state.borrow_mut();
            let cursor = st.cursor;
            match cursor {
                Some(c) if c > 0 => {
                    st.cursor = Some(c - 1);
                    c - 1
                }
                _ => return,
            }
        };
        self.load_at(target).await;
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) {
        let target = {
            let mut st = self.state.borrow_mut();
            let len = st.indices.len();
            let cursor = st.cursor;
            match cursor {
                Some(c) if c + 1 < len => {
                    st.cursor = Some(c + 1);
                    c + 1
                }
                _ => return,
            }
        };
        self.load_at(target).await;
    }
}
