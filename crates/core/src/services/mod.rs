pub mod chart_service;
pub mod metrics_service;
pub mod projection_service;
pub mod series_service;
pub mod window_service;
