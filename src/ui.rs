pub mod charts;
pub mod dashboard;
pub mod prediction;
pub mod render;
pub mod screen;

pub use dashboard::Dashboard;
pub use prediction::PredictionForm;
pub use screen::{Screen, Slot, TerminalScreen};
