use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::MelodyforgeError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const GENERATIONS_RANGE: RangeInclusive<usize> = 10..=500;
pub const POPULATION_RANGE: RangeInclusive<usize> = 10..=50;
pub const SEQUENCE_LENGTH_RANGE: RangeInclusive<usize> = 8..=64;
pub const MUTATION_RATE_RANGE: RangeInclusive<f64> = 0.01..=1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub num_generations: usize,
    pub population_size: usize,
    pub sequence_length: usize,
    pub mutation_rate: f64,
    pub use_chords: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 20,
            sequence_length: 32,
            mutation_rate: 0.1,
            use_chords: false,
        }
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    label: &str,
    value: T,
    range: &RangeInclusive<T>,
) -> Result<(), MelodyforgeError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(MelodyforgeError::Configuration(format!(
            "{} must be between {} and {}, got {}",
            label,
            range.start(),
            range.end(),
            value
        )))
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), MelodyforgeError> {
        check_range("Generations", self.num_generations, &GENERATIONS_RANGE)?;
        check_range("Population size", self.population_size, &POPULATION_RANGE)?;
        check_range("Sequence length", self.sequence_length, &SEQUENCE_LENGTH_RANGE)?;
        check_range("Mutation rate", self.mutation_rate, &MUTATION_RATE_RANGE)?;
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::integer(
                    "num_generations",
                    "🧬 Generations",
                    defaults.num_generations as u64,
                    *GENERATIONS_RANGE.start() as u64,
                    *GENERATIONS_RANGE.end() as u64,
                    "Number of generations to evolve",
                ),
                FieldManifest::integer(
                    "population_size",
                    "👨‍👩‍👧‍👦 Population Size",
                    defaults.population_size as u64,
                    *POPULATION_RANGE.start() as u64,
                    *POPULATION_RANGE.end() as u64,
                    "Melodies per generation; odd sizes lose one member after the first generation",
                ),
                FieldManifest::integer(
                    "sequence_length",
                    "📏 Sequence Length",
                    defaults.sequence_length as u64,
                    *SEQUENCE_LENGTH_RANGE.start() as u64,
                    *SEQUENCE_LENGTH_RANGE.end() as u64,
                    "Notes per melody",
                ),
                FieldManifest::float(
                    "mutation_rate",
                    "🔄 Mutation Rate",
                    defaults.mutation_rate,
                    *MUTATION_RATE_RANGE.start(),
                    *MUTATION_RATE_RANGE.end(),
                    "Chance that an offspring has one note replaced",
                ),
                FieldManifest::boolean(
                    "use_chords",
                    "🎼 Include Chords",
                    defaults.use_chords,
                    "Seed melodies from progression triads and reward chord tones",
                ),
            ],
        }
    }
}
