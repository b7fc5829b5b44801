// Domain layer - Readings, classifications and the figures drawn from them
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod location;
pub mod map;
pub mod quality;
pub mod telemetry;
