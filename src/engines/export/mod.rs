pub mod midi;
pub mod audio;

pub use midi::{render_events, write_midi, RenderSettings, TICKS_PER_QUARTER};
pub use audio::{synthesize, write_wav, SAMPLE_RATE};
