mod app;
mod panels;
mod state;
mod widgets;
pub mod services;

pub use app::MelodyForgeApp;
pub use state::{AppState, CompositionDisplay};
