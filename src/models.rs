pub mod dashboard;
pub mod filters;
pub mod prediction;

pub use dashboard::{KpiSnapshot, SalesPoint, TopProductEntry, TopProductsOutcome};
pub use filters::FilterState;
pub use prediction::{PredictionOutcome, PredictionRequest};
