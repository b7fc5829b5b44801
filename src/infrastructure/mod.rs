// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod dataset_sources;
pub mod map_canvas;
pub mod plot_store;
pub mod status_board;
