use crate::config::traits::ConfigManifest;

/// Sliders whose label, range and tooltip come from a section manifest.
pub struct ManifestSlider;

impl ManifestSlider {
    pub fn show<N: egui::emath::Numeric>(
        ui: &mut egui::Ui,
        manifest: &ConfigManifest,
        field_name: &str,
        value: &mut N,
    ) -> egui::Response {
        let Some(field) = manifest.field(field_name) else {
            return ui.label(format!("Unknown setting: {}", field_name));
        };

        let min = N::from_f64(field.min.unwrap_or(0.0));
        let max = N::from_f64(field.max.unwrap_or(100.0));

        ui.label(&field.label);
        ui.add(egui::Slider::new(value, min..=max))
            .on_hover_text(&field.description)
    }
}
