use crate::engines::export::{synthesize, write_midi, write_wav, RenderSettings, SAMPLE_RATE};
use crate::ui::state::CompositionDisplay;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Midi,
    Wav,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Midi => "mid",
            ExportFormat::Wav => "wav",
        }
    }

    pub fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Midi => "MIDI File",
            ExportFormat::Wav => "WAV Audio",
        }
    }
}

pub struct Exporter;

impl Exporter {
    /// e.g. `genetic_music_20260101_120000.mid`
    pub fn default_file_name(format: ExportFormat) -> String {
        format!(
            "genetic_music_{}.{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }

    /// Ask for a destination and write the composition there.
    ///
    /// Returns `Ok(None)` when the dialog is dismissed.
    pub fn export_with_dialog(
        composition: &CompositionDisplay,
        settings: &RenderSettings,
        format: ExportFormat,
    ) -> anyhow::Result<Option<PathBuf>> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(format.filter_name(), &[format.extension()])
            .set_file_name(Self::default_file_name(format))
            .save_file()
        else {
            return Ok(None);
        };

        Self::export_to(composition, settings, format, &path)?;
        Ok(Some(path))
    }

    pub fn export_to(
        composition: &CompositionDisplay,
        settings: &RenderSettings,
        format: ExportFormat,
        path: &Path,
    ) -> anyhow::Result<()> {
        match format {
            ExportFormat::Midi => write_midi(&composition.events, settings, path)
                .with_context(|| format!("Failed to write MIDI to {}", path.display())),
            ExportFormat::Wav => {
                let samples = synthesize(&composition.events, settings.tempo_bpm, SAMPLE_RATE)
                    .context("Failed to render audio")?;
                write_wav(&samples, SAMPLE_RATE, path)
                    .with_context(|| format!("Failed to write audio to {}", path.display()))
            }
        }
    }
}
