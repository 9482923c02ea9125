/// General MIDI instrument: display name and 0-based program number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub name: &'static str,
    pub program: u8,
}

// GM1 program numbers, piano through bass families.
pub const INSTRUMENTS: &[Instrument] = &[
    Instrument { name: "Acoustic Grand Piano", program: 0 },
    Instrument { name: "Bright Acoustic Piano", program: 1 },
    Instrument { name: "Electric Grand Piano", program: 2 },
    Instrument { name: "Honky-tonk Piano", program: 3 },
    Instrument { name: "Electric Piano 1", program: 4 },
    Instrument { name: "Electric Piano 2", program: 5 },
    Instrument { name: "Harpsichord", program: 6 },
    Instrument { name: "Clavinet", program: 7 },
    Instrument { name: "Celesta", program: 8 },
    Instrument { name: "Glockenspiel", program: 9 },
    Instrument { name: "Music Box", program: 10 },
    Instrument { name: "Vibraphone", program: 11 },
    Instrument { name: "Marimba", program: 12 },
    Instrument { name: "Xylophone", program: 13 },
    Instrument { name: "Tubular Bells", program: 14 },
    Instrument { name: "Dulcimer", program: 15 },
    Instrument { name: "Drawbar Organ", program: 16 },
    Instrument { name: "Percussive Organ", program: 17 },
    Instrument { name: "Rock Organ", program: 18 },
    Instrument { name: "Church Organ", program: 19 },
    Instrument { name: "Reed Organ", program: 20 },
    Instrument { name: "Accordion", program: 21 },
    Instrument { name: "Harmonica", program: 22 },
    Instrument { name: "Tango Accordion", program: 23 },
    Instrument { name: "Acoustic Guitar (nylon)", program: 24 },
    Instrument { name: "Acoustic Guitar (steel)", program: 25 },
    Instrument { name: "Electric Guitar (jazz)", program: 26 },
    Instrument { name: "Electric Guitar (clean)", program: 27 },
    Instrument { name: "Electric Guitar (muted)", program: 28 },
    Instrument { name: "Overdriven Guitar", program: 29 },
    Instrument { name: "Distortion Guitar", program: 30 },
    Instrument { name: "Guitar Harmonics", program: 31 },
    Instrument { name: "Acoustic Bass", program: 32 },
    Instrument { name: "Electric Bass (finger)", program: 33 },
    Instrument { name: "Electric Bass (pick)", program: 34 },
    Instrument { name: "Fretless Bass", program: 35 },
    Instrument { name: "Violin", program: 40 },
    Instrument { name: "Viola", program: 41 },
    Instrument { name: "Cello", program: 42 },
    Instrument { name: "String Ensemble 1", program: 48 },
    Instrument { name: "Choir Aahs", program: 52 },
    Instrument { name: "Trumpet", program: 56 },
    Instrument { name: "Soprano Sax", program: 64 },
    Instrument { name: "Clarinet", program: 71 },
    Instrument { name: "Flute", program: 73 },
];

/// Name for a program number, falling back to "Program N" for unlisted ones.
pub fn instrument_name(program: u8) -> String {
    INSTRUMENTS
        .iter()
        .find(|i| i.program == program)
        .map(|i| i.name.to_string())
        .unwrap_or_else(|| format!("Program {}", program))
}
