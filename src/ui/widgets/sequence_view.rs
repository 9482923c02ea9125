use crate::types::Pitch;

/// Best melody as a wrapped grid of note names with MIDI numbers on hover.
pub struct SequenceView;

impl SequenceView {
    const NOTES_PER_ROW: usize = 8;

    pub fn show(ui: &mut egui::Ui, sequence: &[Pitch], note_names: &[String]) {
        egui::Grid::new("sequence_view")
            .striped(true)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for (i, (pitch, name)) in sequence.iter().zip(note_names).enumerate() {
                    ui.monospace(name).on_hover_text(format!("MIDI {}", pitch));
                    if (i + 1) % Self::NOTES_PER_ROW == 0 {
                        ui.end_row();
                    }
                }
            });

        ui.collapsing("MIDI numbers", |ui| {
            let numbers: Vec<String> = sequence.iter().map(|p| p.to_string()).collect();
            ui.label(format!("[{}]", numbers.join(", ")));
        });
    }
}
