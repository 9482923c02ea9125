pub mod config_bridge;
pub mod evolution_runner;
pub mod exporter;

pub use config_bridge::ConfigBridge;
pub use evolution_runner::{EvolutionRunner, ProgressUpdate, outcome_to_display};
pub use exporter::{ExportFormat, Exporter};
