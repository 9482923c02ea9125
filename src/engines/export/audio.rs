use super::midi::TICKS_PER_QUARTER;
use crate::error::{MelodyforgeError, Result};
use crate::types::{NoteEvent, Pitch};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::TAU;
use std::path::Path;

pub const SAMPLE_RATE: u32 = 44_100;

const ATTACK_SECONDS: f64 = 0.005;
const RELEASE_SECONDS: f64 = 0.03;
const PEAK_AMPLITUDE: f64 = 0.5;

/// Equal-tempered frequency with A4 (69) at 440 Hz.
pub fn midi_to_frequency(pitch: Pitch) -> f64 {
    440.0 * 2f64.powf((pitch as f64 - 69.0) / 12.0)
}

pub fn ticks_to_seconds(ticks: u32, tempo_bpm: u32) -> f64 {
    ticks as f64 * 60.0 / (tempo_bpm as f64 * TICKS_PER_QUARTER as f64)
}

/// Linear fade in and out so note boundaries do not click.
fn envelope(t: f64, length: f64) -> f64 {
    let attack = (t / ATTACK_SECONDS).min(1.0);
    let release = ((length - t) / RELEASE_SECONDS).clamp(0.0, 1.0);
    attack.min(release)
}

/// Render note events as a mono sine-tone signal in `[-1, 1]`.
pub fn synthesize(events: &[NoteEvent], tempo_bpm: u32, sample_rate: u32) -> Result<Vec<f32>> {
    if tempo_bpm == 0 {
        return Err(MelodyforgeError::Export("Tempo must be positive".to_string()));
    }
    if sample_rate == 0 {
        return Err(MelodyforgeError::Export("Sample rate must be positive".to_string()));
    }

    let end_tick = events.iter().map(NoteEvent::end_tick).max().unwrap_or(0);
    let total_samples = (ticks_to_seconds(end_tick, tempo_bpm) * sample_rate as f64).ceil() as usize;
    let mut samples = vec![0.0f32; total_samples];

    for event in events {
        let start = (ticks_to_seconds(event.start_tick, tempo_bpm) * sample_rate as f64) as usize;
        let length = ticks_to_seconds(event.duration_ticks, tempo_bpm);
        let count = (length * sample_rate as f64) as usize;
        let frequency = midi_to_frequency(event.pitch);
        let amplitude = PEAK_AMPLITUDE * event.velocity as f64 / 127.0;

        for (i, sample) in samples.iter_mut().skip(start).take(count).enumerate() {
            let t = i as f64 / sample_rate as f64;
            *sample += (amplitude * envelope(t, length) * (TAU * frequency * t).sin()) as f32;
        }
    }

    Ok(samples)
}

/// Write samples as 16-bit mono PCM.
pub fn write_wav(samples: &[f32], sample_rate: u32, path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;

    log::info!(
        "Wrote {:.1}s of audio to {}",
        samples.len() as f64 / sample_rate as f64,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pitch: Pitch, start_tick: u32, duration_ticks: u32) -> NoteEvent {
        NoteEvent {
            pitch,
            velocity: 100,
            start_tick,
            duration_ticks,
        }
    }

    #[test]
    fn test_frequencies() {
        assert!((midi_to_frequency(69) - 440.0).abs() < 1e-9);
        assert!((midi_to_frequency(81) - 880.0).abs() < 1e-9);
        assert!((midi_to_frequency(60) - 261.6256).abs() < 1e-3);
    }

    #[test]
    fn test_length_follows_tempo() {
        // Two quarter notes at 120 BPM last one second
        let events = vec![note(60, 0, 480), note(62, 480, 480)];
        let samples = synthesize(&events, 120, SAMPLE_RATE).unwrap();
        assert_eq!(samples.len(), SAMPLE_RATE as usize);

        let slower = synthesize(&events, 60, SAMPLE_RATE).unwrap();
        assert_eq!(slower.len(), 2 * SAMPLE_RATE as usize);
    }

    #[test]
    fn test_samples_stay_in_range_and_are_not_silent() {
        let events = vec![note(60, 0, 720), note(72, 720, 240)];
        let samples = synthesize(&events, 90, SAMPLE_RATE).unwrap();
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(samples.iter().any(|s| s.abs() > 0.1));
        assert!(samples[0].abs() < 1e-6);
    }

    #[test]
    fn test_empty_events() {
        assert!(synthesize(&[], 120, SAMPLE_RATE).unwrap().is_empty());
    }

    #[test]
    fn test_zero_tempo_or_rate_is_an_export_error() {
        let events = vec![note(60, 0, 480)];
        assert!(matches!(synthesize(&events, 0, SAMPLE_RATE), Err(MelodyforgeError::Export(_))));
        assert!(matches!(synthesize(&events, 120, 0), Err(MelodyforgeError::Export(_))));
    }

    #[test]
    fn test_write_wav() {
        let path = std::env::temp_dir().join("melodyforge_audio_unit.wav");
        let samples = synthesize(&[note(64, 0, 480)], 120, SAMPLE_RATE).unwrap();
        write_wav(&samples, SAMPLE_RATE, &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        assert_eq!(reader.len() as usize, samples.len());
        let _ = std::fs::remove_file(&path);
    }
}
