use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::engines::export::RenderSettings;
use crate::error::MelodyforgeError;
use crate::music::{scale_notes, Key, Progression, ScaleMode};
use crate::types::Pitch;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const TEMPO_RANGE: RangeInclusive<u32> = 40..=200;

/// What the melody is built from and how it is played back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    pub scale_mode: ScaleMode,
    pub key: Key,
    pub progression: Option<Progression>,
    pub instrument_program: u8,
    pub tempo_bpm: u32,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::Major,
            key: Key::C,
            progression: None,
            instrument_program: 0,
            tempo_bpm: 120,
        }
    }
}

impl CompositionConfig {
    pub fn scale_notes(&self) -> Vec<Pitch> {
        scale_notes(self.scale_mode, self.key).to_vec()
    }

    pub fn progression_degrees(&self) -> Option<Vec<usize>> {
        self.progression.map(|p| p.degrees().to_vec())
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            tempo_bpm: self.tempo_bpm,
            program: self.instrument_program,
        }
    }
}

impl ConfigSection for CompositionConfig {
    fn section_name() -> &'static str {
        "composition"
    }

    fn validate(&self) -> Result<(), MelodyforgeError> {
        if !TEMPO_RANGE.contains(&self.tempo_bpm) {
            return Err(MelodyforgeError::Configuration(format!(
                "Tempo must be between {} and {} BPM, got {}",
                TEMPO_RANGE.start(),
                TEMPO_RANGE.end(),
                self.tempo_bpm
            )));
        }
        if self.instrument_program > 127 {
            return Err(MelodyforgeError::Configuration(format!(
                "Instrument program must be 0-127, got {}",
                self.instrument_program
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Composition".to_string(),
            fields: vec![FieldManifest::integer(
                "tempo_bpm",
                "🎵 Tempo (BPM)",
                Self::default().tempo_bpm as u64,
                *TEMPO_RANGE.start() as u64,
                *TEMPO_RANGE.end() as u64,
                "Playback speed of exported files",
            )],
        }
    }
}
