// Standard MIDI File output for evolved melodies.
//
// A melody is only a list of pitches, so rhythm and dynamics are invented at
// render time: every note gets a random velocity and one of three durations.
// `render_events` does that once, and both the MIDI writer and the audio
// renderer consume the same events so the two exports sound alike.
//
// Output is SMF Format 0 (single track) written with the `midly` crate.

use crate::error::{MelodyforgeError, Result};
use crate::types::{NoteEvent, Pitch};
use midly::{
    num::{u15, u24, u28, u4, u7},
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Ticks per quarter note in MIDI output.
pub const TICKS_PER_QUARTER: u16 = 480;

/// Possible note lengths in ticks: eighth, quarter, dotted quarter.
pub const NOTE_DURATIONS: [u32; 3] = [240, 480, 720];

pub const MIN_VELOCITY: u8 = 60;
pub const MAX_VELOCITY: u8 = 100;

const CHANNEL: u8 = 0;

/// Playback parameters that do not affect evolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub tempo_bpm: u32,
    /// General MIDI program, 0-based
    pub program: u8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            tempo_bpm: 120,
            program: 0,
        }
    }
}

/// Lay the melody out as back-to-back notes with random velocity and length.
pub fn render_events<R: Rng>(sequence: &[Pitch], rng: &mut R) -> Vec<NoteEvent> {
    let mut tick = 0;
    sequence
        .iter()
        .map(|&pitch| {
            let velocity = rng.gen_range(MIN_VELOCITY..=MAX_VELOCITY);
            let duration_ticks = *NOTE_DURATIONS.choose(rng).unwrap_or(&NOTE_DURATIONS[1]);
            let event = NoteEvent {
                pitch,
                velocity,
                start_tick: tick,
                duration_ticks,
            };
            tick += duration_ticks;
            event
        })
        .collect()
}

/// Microseconds per quarter note for the MIDI set-tempo event.
pub fn tempo_microseconds(tempo_bpm: u32) -> u32 {
    60_000_000 / tempo_bpm
}

fn midi_key(pitch: Pitch) -> Result<u7> {
    u8::try_from(pitch)
        .ok()
        .filter(|&key| key <= 127)
        .map(u7::new)
        .ok_or(MelodyforgeError::PitchOutOfRange { pitch })
}

/// Build an in-memory single-track SMF from note events.
pub fn events_to_smf(events: &[NoteEvent], settings: &RenderSettings) -> Result<Smf<'static>> {
    if settings.tempo_bpm == 0 {
        return Err(MelodyforgeError::Export("Tempo must be positive".to_string()));
    }
    if settings.program > 127 {
        return Err(MelodyforgeError::Export(format!(
            "Program {} is not a General MIDI program",
            settings.program
        )));
    }

    let channel = u4::new(CHANNEL);
    let mut track: Track<'static> = Vec::with_capacity(events.len() * 2 + 3);

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Midi {
            channel,
            message: MidiMessage::ProgramChange {
                program: u7::new(settings.program),
            },
        },
    });
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_microseconds(settings.tempo_bpm)))),
    });

    let mut last_event_tick = 0;
    for event in events {
        let key = midi_key(event.pitch)?;
        let vel = u7::new(event.velocity.min(127));

        track.push(TrackEvent {
            delta: u28::new(event.start_tick.saturating_sub(last_event_tick)),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOn { key, vel },
            },
        });
        track.push(TrackEvent {
            delta: u28::new(event.duration_ticks),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOff { key, vel },
            },
        });
        last_event_tick = event.end_tick();
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));
    smf.tracks.push(track);
    Ok(smf)
}

/// Encode note events as SMF bytes.
pub fn smf_bytes(events: &[NoteEvent], settings: &RenderSettings) -> Result<Vec<u8>> {
    let smf = events_to_smf(events, settings)?;
    let mut buf = Vec::new();
    smf.write(&mut buf)
        .map_err(|e| MelodyforgeError::Export(format!("Failed to encode MIDI: {:?}", e)))?;
    Ok(buf)
}

/// Write note events to a `.mid` file.
pub fn write_midi(events: &[NoteEvent], settings: &RenderSettings, path: &Path) -> Result<()> {
    let buf = smf_bytes(events, settings)?;
    std::fs::write(path, &buf)?;
    log::info!("Wrote {} notes to {}", events.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_events_are_sequential() {
        let mut rng = StdRng::seed_from_u64(1);
        let events = render_events(&[60, 62, 64, 65, 67], &mut rng);

        assert_eq!(events.len(), 5);
        assert_eq!(events[0].start_tick, 0);
        for pair in events.windows(2) {
            assert_eq!(pair[1].start_tick, pair[0].end_tick());
        }
        for event in &events {
            assert!(NOTE_DURATIONS.contains(&event.duration_ticks));
            assert!((MIN_VELOCITY..=MAX_VELOCITY).contains(&event.velocity));
        }
    }

    #[test]
    fn test_smf_layout() {
        let mut rng = StdRng::seed_from_u64(2);
        let events = render_events(&[60, 64, 67], &mut rng);
        let settings = RenderSettings {
            tempo_bpm: 100,
            program: 40,
        };
        let smf = events_to_smf(&events, &settings).unwrap();

        assert_eq!(smf.tracks.len(), 1);
        let track = &smf.tracks[0];
        // program change + tempo + on/off per note + end of track
        assert_eq!(track.len(), 2 + 3 * 2 + 1);
        assert!(matches!(
            track[0].kind,
            TrackEventKind::Midi { message: MidiMessage::ProgramChange { program }, .. } if program.as_int() == 40
        ));
        assert!(matches!(
            track[1].kind,
            TrackEventKind::Meta(MetaMessage::Tempo(t)) if t.as_int() == 600_000
        ));
        assert!(matches!(track[8].kind, TrackEventKind::Meta(MetaMessage::EndOfTrack)));
    }

    #[test]
    fn test_smf_bytes_parse_back() {
        let mut rng = StdRng::seed_from_u64(3);
        let events = render_events(&[60, 62, 64, 65], &mut rng);
        let bytes = smf_bytes(&events, &RenderSettings::default()).unwrap();

        let parsed = Smf::parse(&bytes).unwrap();
        assert_eq!(parsed.tracks.len(), 1);
        let note_ons = parsed.tracks[0]
            .iter()
            .filter(|e| matches!(e.kind, TrackEventKind::Midi { message: MidiMessage::NoteOn { .. }, .. }))
            .count();
        assert_eq!(note_ons, 4);
    }

    #[test]
    fn test_out_of_range_pitch_rejected() {
        let events = vec![NoteEvent {
            pitch: 130,
            velocity: 80,
            start_tick: 0,
            duration_ticks: 480,
        }];
        let result = events_to_smf(&events, &RenderSettings::default());
        assert!(matches!(result, Err(MelodyforgeError::PitchOutOfRange { pitch: 130 })));
    }

    #[test]
    fn test_tempo_microseconds() {
        assert_eq!(tempo_microseconds(120), 500_000);
        assert_eq!(tempo_microseconds(40), 1_500_000);
    }
}
