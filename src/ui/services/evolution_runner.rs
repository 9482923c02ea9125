use crate::config::{CompositionConfig, EvolutionConfig};
use crate::engines::export::render_events;
use crate::engines::generation::{
    ConsoleProgressCallback, EvolutionEngine, FitnessEvaluator, ProgressCallback,
};
use crate::music::note_name;
use crate::types::{EvolutionOutcome, Fitness};
use crate::ui::services::ConfigBridge;
use crate::ui::state::CompositionDisplay;
use anyhow::Context;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Progress update from evolution thread
#[derive(Clone, Debug)]
pub struct ProgressUpdate {
    pub generation: usize,
    pub total_generations: usize,
    pub best_fitness: Option<Fitness>,
    pub population_size: usize,
    pub status: String,
}

/// Result from evolution run
pub type EvolutionResult = Result<CompositionDisplay, String>;

/// Progress callback that logs and sends updates through channel
struct EvolutionProgressCallback {
    console: ConsoleProgressCallback,
    progress_tx: Sender<ProgressUpdate>,
    cancel_flag: Arc<AtomicBool>,
    total_generations: usize,
}

impl EvolutionProgressCallback {
    fn send(&self, update: ProgressUpdate) {
        // Nobody listens once the run was stopped
        if !self.cancel_flag.load(Ordering::Relaxed) {
            let _ = self.progress_tx.send(update);
        }
    }
}

impl ProgressCallback for EvolutionProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        self.console.on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: Fitness, population_size: usize) {
        self.console.on_generation_complete(generation, best_fitness, population_size);
        self.send(ProgressUpdate {
            generation: generation + 1,
            total_generations: self.total_generations,
            best_fitness: Some(best_fitness),
            population_size,
            status: format!(
                "Generation {}/{} - Best: {}",
                generation + 1,
                self.total_generations,
                best_fitness
            ),
        });
    }
}

pub struct EvolutionRunner {
    handle: Option<JoinHandle<EvolutionResult>>,
    progress_rx: Option<Receiver<ProgressUpdate>>,
    cancel_flag: Arc<AtomicBool>,
}

impl EvolutionRunner {
    /// Start evolution in background thread
    pub fn start(
        evolution_config: EvolutionConfig,
        composition_config: CompositionConfig,
    ) -> anyhow::Result<Self> {
        let (progress_tx, progress_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let cancel_flag_clone = Arc::clone(&cancel_flag);

        let handle = thread::Builder::new()
            .name("evolution".to_string())
            .spawn(move || {
                Self::run_evolution(evolution_config, composition_config, progress_tx, cancel_flag_clone)
            })
            .context("Failed to spawn evolution thread")?;

        Ok(Self {
            handle: Some(handle),
            progress_rx: Some(progress_rx),
            cancel_flag,
        })
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&mut self) -> Option<ProgressUpdate> {
        self.progress_rx.as_ref().and_then(|rx| rx.try_recv().ok())
    }

    /// Check if evolution is complete and get results
    pub fn try_get_results(&mut self) -> Option<EvolutionResult> {
        let handle = self.handle.take()?;
        if handle.is_finished() {
            match handle.join() {
                Ok(result) => Some(result),
                Err(_) => Some(Err("Evolution thread panicked".to_string())),
            }
        } else {
            // Not finished yet, put handle back
            self.handle = Some(handle);
            None
        }
    }

    /// Stop reporting; the engine itself runs to completion and its result is dropped.
    pub fn cancel(&mut self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
        self.progress_rx = None;
    }

    /// Run the evolution (called in background thread)
    fn run_evolution(
        evolution_config: EvolutionConfig,
        composition_config: CompositionConfig,
        progress_tx: Sender<ProgressUpdate>,
        cancel_flag: Arc<AtomicBool>,
    ) -> EvolutionResult {
        log::info!(
            "Evolution thread started: {} {} scale, progression {:?}",
            composition_config.key.name(),
            composition_config.scale_mode.name(),
            composition_config.progression.map(|p| p.name())
        );

        let engine_config = ConfigBridge::to_engine_config(&evolution_config, &composition_config);
        let total_generations = engine_config.generations;

        let mut engine = EvolutionEngine::new(engine_config, composition_config.scale_notes())
            .map_err(|e| format!("Invalid configuration: {}", e))?;

        let mut callback = EvolutionProgressCallback {
            console: ConsoleProgressCallback::new(total_generations),
            progress_tx,
            cancel_flag,
            total_generations,
        };

        match engine.run(&mut callback) {
            Ok(outcome) => {
                let display = outcome_to_display(outcome, engine.evaluator());
                callback.send(ProgressUpdate {
                    generation: total_generations,
                    total_generations,
                    best_fitness: display.fitness_history.last().copied(),
                    population_size: evolution_config.population_size,
                    status: format!("Complete! Composed {} notes", display.best_sequence.len()),
                });
                Ok(display)
            }
            Err(e) => {
                log::warn!("Evolution failed: {}", e);
                Err(format!("Evolution failed: {}", e))
            }
        }
    }
}

impl Drop for EvolutionRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Helper function to convert an EvolutionOutcome to a CompositionDisplay.
///
/// The breakdown is a new evaluation of the best melody, not the value recorded
/// in the fitness trace.
pub fn outcome_to_display(outcome: EvolutionOutcome, evaluator: &FitnessEvaluator) -> CompositionDisplay {
    let mut rng = rand::thread_rng();
    let breakdown = evaluator.breakdown(&outcome.best, &mut rng);
    let events = render_events(&outcome.best, &mut rng);

    CompositionDisplay {
        note_names: outcome.best.iter().map(|&p| note_name(p)).collect(),
        best_sequence: outcome.best,
        fitness_history: outcome.fitness_history,
        breakdown,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::fitness::{contour_penalty, uniqueness};

    #[test]
    fn test_display_rescores_best_melody() {
        let best = vec![60, 64, 67, 72, 67, 64];
        let outcome = EvolutionOutcome {
            best: best.clone(),
            fitness_history: vec![-30, -25, -20],
        };
        let evaluator = FitnessEvaluator::new(true, Some(vec![0, 4]));

        let display = outcome_to_display(outcome, &evaluator);

        assert_eq!(display.best_sequence, best);
        assert_eq!(display.note_names, vec!["C4", "E4", "G4", "C5", "G4", "E4"]);
        assert_eq!(display.fitness_history, vec![-30, -25, -20]);
        assert_eq!(display.events.len(), best.len());

        let breakdown = &display.breakdown;
        assert_eq!(breakdown.uniqueness, uniqueness(&best));
        assert_eq!(breakdown.contour_penalty, contour_penalty(&best));
        assert_eq!(breakdown.chord_bonus, 4); // 60, 64, 72, 64
        assert!((1..=4).contains(&breakdown.rhythmic_variance));
        assert_eq!(
            breakdown.total(),
            breakdown.uniqueness + breakdown.rhythmic_variance - breakdown.contour_penalty + breakdown.chord_bonus
        );
    }
}
