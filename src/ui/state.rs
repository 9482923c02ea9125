use crate::config::{CompositionConfig, EvolutionConfig};
use crate::engines::generation::FitnessBreakdown;
use crate::music::{Key, Progression, ScaleMode};
use crate::types::{Fitness, NoteEvent, Pitch};

/// Central application state for the UI
pub struct AppState {
    // Composition Configuration
    pub instrument_program: u8,
    pub scale_mode: ScaleMode,
    pub key: Key,
    pub progression: Option<Progression>,
    pub tempo_bpm: u32,

    // Evolution Configuration
    pub num_generations: usize,
    pub population_size: usize,
    pub sequence_length: usize,
    pub mutation_rate: f64,
    pub use_chords: bool,

    // Execution State
    pub is_running: bool,
    pub run_requested: bool,
    pub stop_requested: bool,
    pub current_generation: usize,
    pub progress_percentage: f32,
    pub status_message: String,

    // Results
    pub live_fitness: Vec<Fitness>,
    pub composition: Option<CompositionDisplay>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_sections(&EvolutionConfig::default(), &CompositionConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(evolution: &EvolutionConfig, composition: &CompositionConfig) -> Self {
        Self {
            instrument_program: composition.instrument_program,
            scale_mode: composition.scale_mode,
            key: composition.key,
            progression: composition.progression,
            tempo_bpm: composition.tempo_bpm,

            num_generations: evolution.num_generations,
            population_size: evolution.population_size,
            sequence_length: evolution.sequence_length,
            mutation_rate: evolution.mutation_rate,
            use_chords: evolution.use_chords,

            is_running: false,
            run_requested: false,
            stop_requested: false,
            current_generation: 0,
            progress_percentage: 0.0,
            status_message: "Ready".to_string(),

            live_fitness: Vec::new(),
            composition: None,
        }
    }
}

/// Display model for a finished run
#[derive(Clone, Debug)]
pub struct CompositionDisplay {
    pub best_sequence: Vec<Pitch>,
    pub note_names: Vec<String>,
    pub fitness_history: Vec<Fitness>,
    pub breakdown: FitnessBreakdown,
    /// Rhythm and dynamics chosen once so MIDI and WAV exports agree
    pub events: Vec<NoteEvent>,
}
