use crate::types::Pitch;
use serde::{Deserialize, Serialize};

/// Scale modes offered for composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleMode {
    Major,
    Minor,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 2] = [ScaleMode::Major, ScaleMode::Minor];

    /// Semitone offsets of the eight scale notes from the tonic, octave included.
    pub fn intervals(self) -> [Pitch; 8] {
        match self {
            ScaleMode::Major => [0, 2, 4, 5, 7, 9, 11, 12],
            ScaleMode::Minor => [0, 2, 3, 5, 7, 8, 10, 12],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Major => "Major",
            ScaleMode::Minor => "Minor",
        }
    }
}

/// Natural keys, tonic placed in the octave starting at middle C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Key {
    pub const ALL: [Key; 7] = [Key::C, Key::D, Key::E, Key::F, Key::G, Key::A, Key::B];

    pub fn tonic(self) -> Pitch {
        match self {
            Key::C => 60,
            Key::D => 62,
            Key::E => 64,
            Key::F => 65,
            Key::G => 67,
            Key::A => 69,
            Key::B => 71,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::A => "A",
            Key::B => "B",
        }
    }
}

/// The eight notes of `mode` rooted on `key`, ascending.
pub fn scale_notes(mode: ScaleMode, key: Key) -> [Pitch; 8] {
    let tonic = key.tonic();
    mode.intervals().map(|interval| tonic + interval)
}

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scientific pitch name, e.g. 60 -> "C4", 61 -> "C#4".
pub fn note_name(pitch: Pitch) -> String {
    let class = pitch.rem_euclid(12) as usize;
    let octave = pitch.div_euclid(12) - 1;
    format!("{}{}", NOTE_NAMES[class], octave)
}
