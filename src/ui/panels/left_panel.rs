use crate::config::traits::ConfigSection;
use crate::config::{CompositionConfig, EvolutionConfig};
use crate::music::{instrument_name, Key, Progression, ScaleMode, INSTRUMENTS};
use crate::ui::services::ConfigBridge;
use crate::ui::state::AppState;
use crate::ui::widgets::ManifestSlider;

pub struct LeftPanel {
    evolution_manifest: crate::config::traits::ConfigManifest,
    composition_manifest: crate::config::traits::ConfigManifest,
}

impl LeftPanel {
    pub fn new() -> Self {
        Self {
            evolution_manifest: EvolutionConfig::default().to_manifest(),
            composition_manifest: CompositionConfig::default().to_manifest(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Configuration");
        ui.separator();

        // 1. Sound
        ui.collapsing("Instrument & Scale", |ui| {
            Self::show_sound_config(ui, state);
        });

        ui.separator();

        // 2. Evolution parameters
        ui.collapsing("Evolution", |ui| {
            self.show_evolution_config(ui, state);
        });

        ui.separator();

        // 3. Chords & playback
        ui.collapsing("Chords & Playback", |ui| {
            self.show_chords_and_playback(ui, state);
        });

        ui.separator();

        // 4. Control Buttons
        Self::show_control_buttons(ui, state);
    }

    fn show_sound_config(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("🎻 Select Instrument");
        egui::ComboBox::from_id_salt("instrument")
            .selected_text(instrument_name(state.instrument_program))
            .show_ui(ui, |ui| {
                for instrument in INSTRUMENTS {
                    ui.selectable_value(&mut state.instrument_program, instrument.program, instrument.name);
                }
            });

        ui.label("🎹 Select Scale");
        egui::ComboBox::from_id_salt("scale_mode")
            .selected_text(state.scale_mode.name())
            .show_ui(ui, |ui| {
                for mode in ScaleMode::ALL {
                    ui.selectable_value(&mut state.scale_mode, mode, mode.name());
                }
            });

        ui.label("🎸 Select Key");
        egui::ComboBox::from_id_salt("key")
            .selected_text(state.key.name())
            .show_ui(ui, |ui| {
                for key in Key::ALL {
                    ui.selectable_value(&mut state.key, key, key.name());
                }
            });
    }

    fn show_evolution_config(&self, ui: &mut egui::Ui, state: &mut AppState) {
        let manifest = &self.evolution_manifest;
        ManifestSlider::show(ui, manifest, "num_generations", &mut state.num_generations);
        ManifestSlider::show(ui, manifest, "population_size", &mut state.population_size);
        ManifestSlider::show(ui, manifest, "sequence_length", &mut state.sequence_length);
        ManifestSlider::show(ui, manifest, "mutation_rate", &mut state.mutation_rate);
    }

    fn show_chords_and_playback(&self, ui: &mut egui::Ui, state: &mut AppState) {
        let use_chords_label = self
            .evolution_manifest
            .field("use_chords")
            .map(|f| f.label.clone())
            .unwrap_or_else(|| "Include Chords".to_string());
        ui.checkbox(&mut state.use_chords, use_chords_label);

        ui.label("🎶 Select Chord Progression (optional)");
        egui::ComboBox::from_id_salt("progression")
            .selected_text(state.progression.map(|p| p.name()).unwrap_or("None"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.progression, None, "None");
                for progression in Progression::ALL {
                    ui.selectable_value(&mut state.progression, Some(progression), progression.name());
                }
            });

        if state.use_chords && state.progression.is_none() {
            ui.small("Without a progression the scale is used as is.");
        }

        ManifestSlider::show(ui, &self.composition_manifest, "tempo_bpm", &mut state.tempo_bpm);
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered(|ui| {
            // Validate before allowing run
            let validation_error = ConfigBridge::to_app_config(state).validate().err();
            let can_run = validation_error.is_none() && !state.is_running;

            let run_button = ui.add_enabled(can_run, egui::Button::new("📝 Compose Music"));
            if run_button.clicked() {
                state.status_message = "Starting evolution...".to_string();
                state.run_requested = true;
            }

            if let Some(error) = validation_error {
                ui.colored_label(egui::Color32::RED, error.to_string());
            }

            let stop_button = ui.add_enabled(state.is_running, egui::Button::new("⏹ Stop"));
            if stop_button.clicked() {
                state.status_message = "Stopping...".to_string();
                state.stop_requested = true;
            }
        });
    }
}
