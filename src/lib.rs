pub mod config;
pub mod engines;
pub mod error;
pub mod music;
pub mod types;
pub mod ui;
