use crate::engines::generation::{
    fitness::FitnessEvaluator,
    operators::{crossover, mutate},
    pitch_pool::build_pool,
    population::{initialize, next_generation, rank_and_split},
    progress::SilentProgressCallback,
};
use crate::error::{MelodyforgeError, Result};
use crate::types::{EvolutionOutcome, Fitness, Individual, Pitch, Population};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub sequence_length: usize,
    pub mutation_rate: f64,

    // Chord-constrained seeding and scoring
    pub use_chords: bool,
    pub progression: Option<Vec<usize>>, // 0-based scale degrees

    pub seed: Option<u64>,
}

impl EvolutionConfig {
    /// Reject settings the loop cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(MelodyforgeError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.sequence_length < 2 {
            return Err(MelodyforgeError::Configuration(format!(
                "Sequence length must be at least 2, got {}",
                self.sequence_length
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MelodyforgeError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: Fitness, population_size: usize);
}

pub struct EvolutionEngine<R = StdRng> {
    config: EvolutionConfig,
    scale_notes: Vec<Pitch>,
    seed_pool: Vec<Pitch>,
    evaluator: FitnessEvaluator,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    /// Engine with its own generator, seeded from `config.seed` or from entropy.
    pub fn new(config: EvolutionConfig, scale_notes: Vec<Pitch>) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, scale_notes, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Validate the configuration and build the seeding pool once.
    pub fn with_rng(config: EvolutionConfig, scale_notes: Vec<Pitch>, rng: R) -> Result<Self> {
        config.validate()?;
        if scale_notes.is_empty() {
            return Err(MelodyforgeError::Configuration("Scale has no notes".to_string()));
        }

        let seed_pool = build_pool(&scale_notes, config.use_chords, config.progression.as_deref())?;
        if seed_pool.is_empty() {
            return Err(MelodyforgeError::Configuration(
                "Pitch pool is empty; the progression has no degrees".to_string(),
            ));
        }

        let evaluator = FitnessEvaluator::new(config.use_chords, config.progression.clone());

        Ok(Self {
            config,
            scale_notes,
            seed_pool,
            evaluator,
            rng,
        })
    }

    /// Pitches individuals are seeded from
    pub fn seed_pool(&self) -> &[Pitch] {
        &self.seed_pool
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Run every generation and return the best melody with its fitness trace.
    pub fn run<C: ProgressCallback + ?Sized>(&mut self, callback: &mut C) -> Result<EvolutionOutcome> {
        log::info!(
            "Evolving {} melodies of {} notes for {} generations (pool of {} pitches, chords: {})",
            self.config.population_size,
            self.config.sequence_length,
            self.config.generations,
            self.seed_pool.len(),
            self.config.use_chords
        );

        let mut population =
            initialize(&self.seed_pool, self.config.population_size, self.config.sequence_length, &mut self.rng);
        let mut fitness_history = Vec::with_capacity(self.config.generations);
        let half = self.config.population_size / 2;

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            let (ranked, parents) =
                rank_and_split(population, self.config.population_size, &self.evaluator, &mut self.rng);

            // Re-scored rather than reusing the ranking key, so the trace carries
            // its own rhythmic sample.
            let (top, ranking_score) = ranked
                .first()
                .ok_or_else(|| MelodyforgeError::Generation("Population is empty".to_string()))?;
            let best_fitness = self.evaluator.evaluate(top, &mut self.rng);
            fitness_history.push(best_fitness);
            log::debug!(
                "Generation {}: best fitness {} (ranked at {}), {} parents",
                generation + 1,
                best_fitness,
                ranking_score,
                parents.len()
            );

            let offspring = self.breed(&parents, half)?;
            let next = next_generation(parents, offspring);

            callback.on_generation_complete(generation, best_fitness, next.len());
            population = next;
        }

        // The head of the last assembled population is the best of the last
        // ranking; the final batch of offspring is never scored.
        let best = population
            .into_iter()
            .next()
            .ok_or_else(|| MelodyforgeError::Generation("Population is empty".to_string()))?;

        Ok(EvolutionOutcome {
            best,
            fitness_history,
        })
    }

    fn breed(&mut self, parents: &[Individual], count: usize) -> Result<Population> {
        let mut offspring = Vec::with_capacity(count);
        for _ in 0..count {
            let parent1 = parents
                .choose(&mut self.rng)
                .ok_or_else(|| MelodyforgeError::Generation("No parents to breed from".to_string()))?;
            let parent2 = parents
                .choose(&mut self.rng)
                .ok_or_else(|| MelodyforgeError::Generation("No parents to breed from".to_string()))?;
            offspring.push(crossover(parent1, parent2, &mut self.rng)?);
        }

        for child in offspring.iter_mut() {
            mutate(child, self.config.mutation_rate, &self.scale_notes, &mut self.rng);
        }

        Ok(offspring)
    }
}

/// Evolve a melody with a caller-supplied random source.
///
/// `scale_notes` seeds the population (or, with chords and a progression, the
/// triads built on it do) and is always the source of mutated pitches.
#[allow(clippy::too_many_arguments)]
pub fn evolve<R: Rng>(
    generations: usize,
    population_size: usize,
    sequence_length: usize,
    scale_notes: &[Pitch],
    use_chords: bool,
    progression: Option<&[usize]>,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<(Individual, Vec<Fitness>)> {
    let config = EvolutionConfig {
        population_size,
        generations,
        sequence_length,
        mutation_rate,
        use_chords,
        progression: progression.map(<[usize]>::to_vec),
        seed: None,
    };

    let mut engine = EvolutionEngine::with_rng(config, scale_notes.to_vec(), rng)?;
    let outcome = engine.run(&mut SilentProgressCallback)?;
    Ok((outcome.best, outcome.fitness_history))
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_MAJOR: [Pitch; 8] = [60, 62, 64, 65, 67, 69, 71, 72];

    fn engine_with_rate(mutation_rate: f64) -> EvolutionEngine {
        let config = EvolutionConfig {
            population_size: 10,
            generations: 1,
            sequence_length: 8,
            mutation_rate,
            use_chords: false,
            progression: None,
            seed: Some(21),
        };
        EvolutionEngine::new(config, C_MAJOR.to_vec()).unwrap()
    }

    // Parents built from pitches outside the scale, so any mutated position stands out.
    fn off_scale_parents() -> Population {
        vec![vec![0; 8], vec![1; 8], vec![2; 8]]
    }

    #[test]
    fn test_breed_without_mutation_keeps_crossover_result() {
        let mut engine = engine_with_rate(0.0);
        let mut parents = off_scale_parents();

        for _ in 0..20 {
            let offspring = engine.breed(&parents, 5).unwrap();
            assert_eq!(offspring.len(), 5);
            for child in &offspring {
                assert_eq!(child.len(), 8);
                assert!(child.iter().all(|p| (0..=2).contains(p)), "mutated child {:?}", child);
            }
            parents = offspring;
        }
    }

    #[test]
    fn test_breed_with_full_rate_mutates_exactly_one_position() {
        let mut engine = engine_with_rate(1.0);

        for _ in 0..20 {
            let offspring = engine.breed(&off_scale_parents(), 5).unwrap();
            for child in &offspring {
                assert_eq!(child.len(), 8);
                let mutated = child.iter().filter(|p| C_MAJOR.contains(p)).count();
                assert_eq!(mutated, 1, "child {:?}", child);
            }
        }
    }

    #[test]
    fn test_mutation_draws_from_scale_not_chord_pool() {
        let config = EvolutionConfig {
            population_size: 10,
            generations: 1,
            sequence_length: 8,
            mutation_rate: 1.0,
            use_chords: true,
            progression: Some(vec![0, 3, 4]),
            seed: Some(4),
        };
        let mut engine = EvolutionEngine::new(config, C_MAJOR.to_vec()).unwrap();

        for child in engine.breed(&off_scale_parents(), 50).unwrap() {
            let mutated: Vec<&Pitch> = child.iter().filter(|p| **p > 2).collect();
            assert_eq!(mutated.len(), 1);
            assert!(C_MAJOR.contains(mutated[0]));
        }
    }
}
