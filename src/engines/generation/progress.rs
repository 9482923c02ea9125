use super::evolution_engine::ProgressCallback;
use crate::types::Fitness;

/// Logs one line per finished generation through the `log` facade.
pub struct ConsoleProgressCallback {
    total_generations: usize,
}

impl ConsoleProgressCallback {
    pub fn new(total_generations: usize) -> Self {
        Self { total_generations }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {}/{} starting", generation + 1, self.total_generations);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: Fitness, population_size: usize) {
        log::info!(
            "Generation {}/{} complete. Best fitness: {}, next population: {}",
            generation + 1,
            self.total_generations,
            best_fitness,
            population_size
        );
    }
}

/// Ignores all progress; used by the plain `evolve` entry point.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: Fitness, _population_size: usize) {}
}
