pub mod app;
pub mod filter_bar;
pub mod nav_controls;
pub mod prediction_panel;
pub mod signal_chart;
pub mod signal_info;
pub mod toolbar;
