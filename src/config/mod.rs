pub mod traits;
pub mod evolution;
pub mod composition;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::EvolutionConfig;
pub use composition::CompositionConfig;
