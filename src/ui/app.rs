use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::services::{ConfigBridge, EvolutionRunner};
use super::state::AppState;
use crate::config::ConfigManager;
use std::path::PathBuf;
use std::time::Duration;

pub struct MelodyForgeApp {
    state: AppState,
    config: ConfigManager,
    config_path: PathBuf,
    runner: Option<EvolutionRunner>,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
}

impl MelodyForgeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ConfigManager, config_path: PathBuf) -> Self {
        let loaded = config.get();
        Self {
            state: AppState::from_sections(&loaded.evolution, &loaded.composition),
            config,
            config_path,
            runner: None,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
        }
    }

    fn start_run(&mut self) {
        self.state.run_requested = false;

        let evolution = ConfigBridge::to_evolution_config(&self.state);
        let composition = ConfigBridge::to_composition_config(&self.state);

        match EvolutionRunner::start(evolution, composition) {
            Ok(runner) => {
                self.runner = Some(runner);
                self.state.is_running = true;
                self.state.current_generation = 0;
                self.state.progress_percentage = 0.0;
                self.state.live_fitness.clear();
                self.state.composition = None;
            }
            Err(e) => {
                log::error!("Could not start evolution: {:#}", e);
                self.state.status_message = format!("Error: {:#}", e);
            }
        }
    }

    fn stop_run(&mut self) {
        self.state.stop_requested = false;
        if let Some(mut runner) = self.runner.take() {
            runner.cancel();
            log::info!("Evolution stopped by user");
        }
        self.state.is_running = false;
        self.state.status_message = "Stopped".to_string();
    }

    fn poll_runner(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };

        while let Some(update) = runner.poll_progress() {
            self.state.current_generation = update.generation;
            self.state.progress_percentage = if update.total_generations == 0 {
                1.0
            } else {
                update.generation as f32 / update.total_generations as f32
            };
            if let Some(best) = update.best_fitness {
                if self.state.live_fitness.len() < update.generation {
                    self.state.live_fitness.push(best);
                }
            }
            self.state.status_message = update.status;
        }

        if let Some(result) = runner.try_get_results() {
            self.runner = None;
            self.state.is_running = false;
            match result {
                Ok(composition) => {
                    self.state.progress_percentage = 1.0;
                    self.state.status_message =
                        format!("Complete! Composed {} notes", composition.best_sequence.len());
                    self.state.composition = Some(composition);
                }
                Err(e) => {
                    self.state.status_message = format!("Error: {}", e);
                }
            }
        }
    }

    fn save_settings(&mut self) {
        let candidate = ConfigBridge::to_app_config(&self.state);
        let result = self
            .config
            .update(|config| *config = candidate)
            .and_then(|_| self.config.save_to_file(&self.config_path));

        self.state.status_message = match result {
            Ok(()) => format!("Settings saved to {}", self.config_path.display()),
            Err(e) => {
                log::warn!("Failed to save settings: {}", e);
                format!("Error: {}", e)
            }
        };
    }
}

impl eframe::App for MelodyForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.stop_requested {
            self.stop_run();
        }
        if self.state.run_requested && self.runner.is_none() {
            self.start_run();
        }
        self.poll_runner();

        if self.state.is_running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Top menu bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🎵 Genetic Algorithm Music Composer");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!self.state.is_running, egui::Button::new("Save Settings"))
                        .clicked()
                    {
                        self.save_settings();
                    }
                });
            });
        });

        // Left Panel - Configuration
        egui::SidePanel::left("left_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Right Panel - Melody Details
        egui::SidePanel::right("right_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.right_panel.show(ui, &self.state);
                });
            });

        // Central Panel - Melody and fitness trace
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &mut self.state);
        });
    }
}
