use crate::music::instrument_name;
use crate::ui::services::{ConfigBridge, ExportFormat, Exporter};
use crate::ui::state::AppState;

pub struct RightPanel {
    last_export: Option<String>,
}

impl RightPanel {
    pub fn new() -> Self {
        Self { last_export: None }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Melody Details");

        ui.separator();

        let Some(composition) = &state.composition else {
            ui.centered_and_justified(|ui| {
                ui.label("Compose a melody to view details");
            });
            return;
        };

        // Fitness Card
        let breakdown = &composition.breakdown;
        ui.group(|ui| {
            ui.heading("Fitness");
            egui::Grid::new("fitness_breakdown").num_columns(2).show(ui, |ui| {
                ui.label("Unique pitches:");
                ui.label(format!("+{}", breakdown.uniqueness));
                ui.end_row();

                ui.label("Rhythmic variance:");
                ui.label(format!("+{}", breakdown.rhythmic_variance));
                ui.end_row();

                ui.label("Contour penalty:");
                ui.label(format!("-{}", breakdown.contour_penalty));
                ui.end_row();

                ui.label("Chord bonus:");
                ui.label(format!("+{}", breakdown.chord_bonus));
                ui.end_row();

                ui.strong("Re-scored total:");
                ui.strong(breakdown.total().to_string());
                ui.end_row();
            });
            ui.small(
                "Rhythmic variance is resampled on every evaluation, so this total \
                 can differ from the last point of the fitness chart.",
            );
        });

        ui.separator();

        let composition_config = ConfigBridge::to_composition_config(state);
        let settings = composition_config.render_settings();

        // Export Card
        ui.group(|ui| {
            ui.heading("Export");
            ui.label(format!(
                "{} at {} BPM",
                instrument_name(settings.program),
                settings.tempo_bpm
            ));

            ui.horizontal(|ui| {
                for format in [ExportFormat::Midi, ExportFormat::Wav] {
                    let label = match format {
                        ExportFormat::Midi => "💾 Download MIDI",
                        ExportFormat::Wav => "🔊 Save Audio",
                    };
                    if ui.add_enabled(!state.is_running, egui::Button::new(label)).clicked() {
                        self.last_export = match Exporter::export_with_dialog(composition, &settings, format) {
                            Ok(Some(path)) => {
                                log::info!("Exported {} to {}", format.filter_name(), path.display());
                                Some(format!("Saved {}", path.display()))
                            }
                            Ok(None) => None,
                            Err(e) => {
                                log::error!("Export failed: {:#}", e);
                                Some(format!("Export failed: {:#}", e))
                            }
                        };
                    }
                }
            });

            if let Some(message) = &self.last_export {
                ui.small(message);
            }
        });
    }
}
