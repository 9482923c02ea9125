use crate::error::{MelodyforgeError, Result};
use crate::types::{Chord, Pitch};

/// Triad on `root`. Major-shaped whatever the scale mode, so the third and
/// fifth may fall outside the scale.
pub fn chord_triad(root: Pitch) -> Chord {
    [root, root + 4, root + 7]
}

/// One triad per progression degree, rooted on the matching scale note.
pub fn generate_chords(scale_notes: &[Pitch], progression: &[usize]) -> Result<Vec<Chord>> {
    progression
        .iter()
        .map(|&degree| {
            scale_notes
                .get(degree)
                .map(|&root| chord_triad(root))
                .ok_or_else(|| {
                    MelodyforgeError::Configuration(format!(
                        "Progression degree {} is outside a scale of {} notes",
                        degree,
                        scale_notes.len()
                    ))
                })
        })
        .collect()
}

/// Build the pitch set individuals are seeded from.
///
/// Without chords (or without a progression) this is the scale itself.
/// With chords it is every progression triad flattened in order, duplicates
/// kept, so pitches shared between chords are drawn more often.
pub fn build_pool(
    scale_notes: &[Pitch],
    use_chords: bool,
    progression: Option<&[usize]>,
) -> Result<Vec<Pitch>> {
    match progression {
        Some(degrees) if use_chords => {
            let chords = generate_chords(scale_notes, degrees)?;
            Ok(chords.into_iter().flatten().collect())
        }
        _ => Ok(scale_notes.to_vec()),
    }
}
