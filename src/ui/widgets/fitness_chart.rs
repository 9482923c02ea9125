use crate::types::Fitness;

/// Line chart of best fitness per generation, drawn with the egui painter.
pub struct FitnessChart;

impl FitnessChart {
    pub fn show(ui: &mut egui::Ui, history: &[Fitness]) {
        if history.is_empty() {
            ui.label("No fitness data yet");
            return;
        }

        let desired = egui::vec2(ui.available_width(), 180.0);
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        let rect = response.rect.shrink(8.0);

        painter.rect_stroke(
            response.rect,
            2.0,
            ui.visuals().widgets.noninteractive.bg_stroke,
            egui::StrokeKind::Inside,
        );

        let min = history.iter().copied().min().unwrap_or(0);
        let max = history.iter().copied().max().unwrap_or(0);
        let span = (max - min).max(1) as f32;
        let steps = (history.len() - 1).max(1) as f32;

        let points: Vec<egui::Pos2> = history
            .iter()
            .enumerate()
            .map(|(i, &fitness)| {
                let x = rect.left() + rect.width() * i as f32 / steps;
                let y = rect.bottom() - rect.height() * (fitness - min) as f32 / span;
                egui::pos2(x, y)
            })
            .collect();

        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.5, egui::Color32::from_rgb(90, 170, 255)),
        ));

        let text_color = ui.visuals().text_color();
        let font = egui::FontId::monospace(11.0);
        painter.text(rect.left_top(), egui::Align2::LEFT_TOP, max.to_string(), font.clone(), text_color);
        painter.text(rect.left_bottom(), egui::Align2::LEFT_BOTTOM, min.to_string(), font, text_color);

        if let Some(pos) = response.hover_pos() {
            let i = (((pos.x - rect.left()) / rect.width()) * steps).round().clamp(0.0, steps) as usize;
            if let Some(fitness) = history.get(i) {
                response.on_hover_text(format!("Generation {}: {}", i + 1, fitness));
            }
        }
    }
}
