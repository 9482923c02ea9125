pub mod generation;
pub mod export;
