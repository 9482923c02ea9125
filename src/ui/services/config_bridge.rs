use crate::config::{AppConfig, CompositionConfig, EvolutionConfig};
use crate::engines::generation::EvolutionConfig as EngineEvolutionConfig;
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert AppState to EvolutionConfig
    pub fn to_evolution_config(state: &AppState) -> EvolutionConfig {
        EvolutionConfig {
            num_generations: state.num_generations,
            population_size: state.population_size,
            sequence_length: state.sequence_length,
            mutation_rate: state.mutation_rate,
            use_chords: state.use_chords,
        }
    }

    /// Convert AppState to CompositionConfig
    pub fn to_composition_config(state: &AppState) -> CompositionConfig {
        CompositionConfig {
            scale_mode: state.scale_mode,
            key: state.key,
            progression: state.progression,
            instrument_program: state.instrument_program,
            tempo_bpm: state.tempo_bpm,
        }
    }

    pub fn to_app_config(state: &AppState) -> AppConfig {
        AppConfig {
            evolution: Self::to_evolution_config(state),
            composition: Self::to_composition_config(state),
        }
    }

    /// Engine settings for one run. Production runs are never seeded.
    pub fn to_engine_config(
        evolution: &EvolutionConfig,
        composition: &CompositionConfig,
    ) -> EngineEvolutionConfig {
        EngineEvolutionConfig {
            population_size: evolution.population_size,
            generations: evolution.num_generations,
            sequence_length: evolution.sequence_length,
            mutation_rate: evolution.mutation_rate,
            use_chords: evolution.use_chords,
            progression: composition.progression_degrees(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Progression;

    #[test]
    fn test_state_round_trips_through_sections() {
        let mut state = AppState::new();
        state.population_size = 31;
        state.progression = Some(Progression::TwoFiveOne);
        state.use_chords = true;

        let config = ConfigBridge::to_app_config(&state);
        let rebuilt = AppState::from_sections(&config.evolution, &config.composition);
        assert_eq!(rebuilt.population_size, 31);
        assert_eq!(rebuilt.progression, Some(Progression::TwoFiveOne));
        assert!(rebuilt.use_chords);
    }

    #[test]
    fn test_engine_config_carries_progression_degrees() {
        let composition = CompositionConfig {
            progression: Some(Progression::OneSixTwoFive),
            ..Default::default()
        };
        let engine = ConfigBridge::to_engine_config(&EvolutionConfig::default(), &composition);
        assert_eq!(engine.progression, Some(vec![0, 5, 2, 4]));
        assert_eq!(engine.generations, 100);
        assert!(engine.seed.is_none());
    }
}
