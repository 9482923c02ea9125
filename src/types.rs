use serde::{Deserialize, Serialize};

/// Semitone value in MIDI note-number convention (60 = middle C).
///
/// Signed so chord offsets and contour differences never wrap; only the MIDI
/// exporter insists on the 0-127 range.
pub type Pitch = i32;

/// One candidate melody. Its length is fixed for the lifetime of a run.
pub type Individual = Vec<Pitch>;

pub type Population = Vec<Individual>;

/// Unbounded musicality score. Never stored on an individual.
pub type Fitness = i64;

/// Root, major third and fifth above a scale-degree root.
pub type Chord = [Pitch; 3];

/// Result of a complete evolutionary run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionOutcome {
    pub best: Individual,
    /// Best fitness recorded at the top of each generation, in order
    pub fitness_history: Vec<Fitness>,
}

/// A single sounding note ready for MIDI or audio rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    pub pitch: Pitch,
    pub velocity: u8,
    pub start_tick: u32,
    pub duration_ticks: u32,
}

impl NoteEvent {
    pub fn end_tick(&self) -> u32 {
        self.start_tick + self.duration_ticks
    }
}
