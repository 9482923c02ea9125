use crate::types::{Fitness, Pitch};
use rand::Rng;
use std::collections::HashSet;

/// Note durations (in beats) sampled for the rhythmic-variance term.
pub const RHYTHM_DURATIONS: [f64; 4] = [0.25, 0.5, 1.0, 1.5];

/// Number of distinct pitches in the sequence.
pub fn uniqueness(sequence: &[Pitch]) -> Fitness {
    sequence.iter().collect::<HashSet<_>>().len() as Fitness
}

/// Sum of absolute intervals between neighbouring notes.
pub fn contour_penalty(sequence: &[Pitch]) -> Fitness {
    sequence
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs() as Fitness)
        .sum()
}

/// Draws one duration per note and counts how many distinct durations came up.
///
/// Melodies carry no rhythm of their own, so this is fresh noise on every call.
pub fn rhythmic_variance<R: Rng>(note_count: usize, rng: &mut R) -> Fitness {
    let mut seen = [false; RHYTHM_DURATIONS.len()];
    for _ in 0..note_count {
        seen[rng.gen_range(0..RHYTHM_DURATIONS.len())] = true;
    }
    seen.iter().filter(|&&s| s).count() as Fitness
}

/// Notes whose pitch class equals one of the raw progression values.
///
/// Progression entries are scale degrees, compared here as pitch classes.
pub fn chord_bonus(sequence: &[Pitch], progression: &[usize]) -> Fitness {
    sequence
        .iter()
        .filter(|&&pitch| progression.contains(&(pitch.rem_euclid(12) as usize)))
        .count() as Fitness
}

/// Individual terms of one fitness evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitnessBreakdown {
    pub uniqueness: Fitness,
    pub rhythmic_variance: Fitness,
    pub contour_penalty: Fitness,
    pub chord_bonus: Fitness,
}

impl FitnessBreakdown {
    pub fn total(&self) -> Fitness {
        self.uniqueness + self.rhythmic_variance - self.contour_penalty + self.chord_bonus
    }
}

/// Scores melodies under one chord setting
#[derive(Debug, Clone, Default)]
pub struct FitnessEvaluator {
    use_chords: bool,
    progression: Option<Vec<usize>>,
}

impl FitnessEvaluator {
    pub fn new(use_chords: bool, progression: Option<Vec<usize>>) -> Self {
        Self {
            use_chords,
            progression,
        }
    }

    pub fn breakdown<R: Rng>(&self, sequence: &[Pitch], rng: &mut R) -> FitnessBreakdown {
        let chord_bonus = match (&self.progression, self.use_chords) {
            (Some(progression), true) => chord_bonus(sequence, progression),
            _ => 0,
        };

        FitnessBreakdown {
            uniqueness: uniqueness(sequence),
            rhythmic_variance: rhythmic_variance(sequence.len(), rng),
            contour_penalty: contour_penalty(sequence),
            chord_bonus,
        }
    }

    pub fn evaluate<R: Rng>(&self, sequence: &[Pitch], rng: &mut R) -> Fitness {
        self.breakdown(sequence, rng).total()
    }
}

/// Score a single melody. Repeated calls may differ through the rhythmic term.
pub fn fitness<R: Rng>(
    sequence: &[Pitch],
    use_chords: bool,
    progression: Option<&[usize]>,
    rng: &mut R,
) -> Fitness {
    FitnessEvaluator::new(use_chords, progression.map(<[usize]>::to_vec)).evaluate(sequence, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniqueness_counts_distinct() {
        assert_eq!(uniqueness(&[60, 60, 62, 64, 62]), 3);
        assert_eq!(uniqueness(&[]), 0);
    }

    #[test]
    fn test_contour_penalty_sums_absolute_steps() {
        assert_eq!(contour_penalty(&[60, 64, 62, 72]), 4 + 2 + 10);
        assert_eq!(contour_penalty(&[60]), 0);
    }

    #[test]
    fn test_rhythmic_variance_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [1usize, 2, 8, 64] {
            let v = rhythmic_variance(len, &mut rng);
            assert!(v >= 1 && v <= len.min(4) as Fitness, "len {} gave {}", len, v);
        }
        assert_eq!(rhythmic_variance(0, &mut rng), 0);
    }

    #[test]
    fn test_repeated_evaluation_resamples_rhythm() {
        let sequence = vec![60, 62, 64, 65];
        let evaluator = FitnessEvaluator::new(false, None);
        let mut rng = StdRng::seed_from_u64(1);

        let totals: HashSet<Fitness> = (0..100).map(|_| evaluator.evaluate(&sequence, &mut rng)).collect();
        assert!(totals.len() > 1, "one sequence scored {:?} on every call", totals);
    }

    #[test]
    fn test_chord_bonus_uses_pitch_classes() {
        // 60 % 12 = 0, 64 % 12 = 4, 63 % 12 = 3
        assert_eq!(chord_bonus(&[60, 64, 63, 61], &[0, 3, 4]), 3);
        assert_eq!(chord_bonus(&[-12], &[0]), 1);
    }

    #[test]
    fn test_fitness_without_chords_has_no_bonus() {
        let sequence = vec![60, 62, 64, 60, 67, 72, 71, 60];
        let evaluator = FitnessEvaluator::new(false, Some(vec![0, 3, 4]));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let b = evaluator.breakdown(&sequence, &mut rng);
            assert_eq!(b.chord_bonus, 0);
            assert_eq!(b.total(), uniqueness(&sequence) + b.rhythmic_variance - contour_penalty(&sequence));
        }
    }

    #[test]
    fn test_fitness_with_chords_adds_bonus() {
        let sequence = vec![60, 60, 60];
        let mut rng = StdRng::seed_from_u64(3);
        let b = FitnessEvaluator::new(true, Some(vec![0])).breakdown(&sequence, &mut rng);
        assert_eq!(b.chord_bonus, 3);
        assert_eq!(b.total(), 1 + b.rhythmic_variance + 3);
    }

    #[test]
    fn test_fitness_matches_evaluator_with_same_seed() {
        let sequence = vec![60, 65, 67, 72, 64];
        let direct = fitness(&sequence, true, Some(&[0, 5]), &mut StdRng::seed_from_u64(99));
        let via = FitnessEvaluator::new(true, Some(vec![0, 5]))
            .evaluate(&sequence, &mut StdRng::seed_from_u64(99));
        assert_eq!(direct, via);
    }

    #[test]
    fn test_fitness_can_be_negative() {
        let sequence = vec![40, 90, 40, 90];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(fitness(&sequence, false, None, &mut rng) < 0);
    }
}
