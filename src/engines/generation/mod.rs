pub mod pitch_pool;
pub mod fitness;
pub mod population;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use pitch_pool::{build_pool, chord_triad, generate_chords};
pub use fitness::{fitness, FitnessBreakdown, FitnessEvaluator};
pub use population::{initialize, next_generation, rank_and_split, RankedPopulation};
pub use operators::{crossover, mutate, random_individual};
pub use evolution_engine::{evolve, EvolutionConfig, EvolutionEngine, ProgressCallback};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
