pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod prediction_service;
pub use prediction_service::PredictionService;
