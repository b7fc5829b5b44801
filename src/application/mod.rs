// Application layer - Use cases and the seams to the drawing libraries
pub mod chart_renderer;
pub mod dashboard_service;
pub mod data_loader;
pub mod dataset_source;
pub mod map_renderer;
