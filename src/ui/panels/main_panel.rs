use crate::ui::state::AppState;
use crate::ui::widgets::{FitnessChart, SequenceView};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Composition");

        ui.separator();

        // Progress Section
        ui.horizontal(|ui| {
            ui.label("Status:");
            ui.label(&state.status_message);
        });

        if state.is_running {
            ui.add(
                egui::ProgressBar::new(state.progress_percentage)
                    .text(format!(
                        "Generation {} / {}",
                        state.current_generation, state.num_generations
                    ))
                    .animate(true),
            );
        }

        ui.separator();

        // Fitness trace, live while running and final afterwards
        ui.label("Best fitness per generation");
        let history = match &state.composition {
            Some(composition) if !state.is_running => composition.fitness_history.as_slice(),
            _ => state.live_fitness.as_slice(),
        };
        FitnessChart::show(ui, history);

        ui.separator();

        match &state.composition {
            Some(composition) => {
                ui.label(format!("Best melody ({} notes)", composition.best_sequence.len()));
                egui::ScrollArea::vertical()
                    .id_salt("sequence_scroll")
                    .show(ui, |ui| {
                        SequenceView::show(ui, &composition.best_sequence, &composition.note_names);
                    });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("No melody yet. Configure and press Compose.");
                });
            }
        }
    }
}
