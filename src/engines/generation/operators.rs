use crate::error::{MelodyforgeError, Result};
use crate::types::{Individual, Pitch};
use rand::seq::SliceRandom;
use rand::Rng;

/// Single-point crossover producing one child.
///
/// The cut lies in `1..len`, so the child always starts with at least one note
/// of `parent1` and ends with at least one note of `parent2`.
pub fn crossover<R: Rng>(
    parent1: &[Pitch],
    parent2: &[Pitch],
    rng: &mut R,
) -> Result<Individual> {
    if parent1.len() != parent2.len() {
        return Err(MelodyforgeError::Generation(format!(
            "Crossover parents differ in length: {} vs {}",
            parent1.len(),
            parent2.len()
        )));
    }
    if parent1.len() < 2 {
        return Err(MelodyforgeError::Generation(format!(
            "Crossover needs at least 2 notes, got {}",
            parent1.len()
        )));
    }

    let point = rng.gen_range(1..parent1.len());

    let mut child = parent1.to_vec();
    child[point..].copy_from_slice(&parent2[point..]);
    Ok(child)
}

/// Point mutation: with probability `mutation_rate`, overwrite one random
/// position with a random pitch from `pool`.
///
/// Returns the position that was rewritten, if any.
pub fn mutate<R: Rng>(
    individual: &mut Individual,
    mutation_rate: f64,
    pool: &[Pitch],
    rng: &mut R,
) -> Option<usize> {
    if individual.is_empty() || rng.gen::<f64>() >= mutation_rate {
        return None;
    }

    let position = rng.gen_range(0..individual.len());
    let &pitch = pool.choose(rng)?;
    individual[position] = pitch;
    Some(position)
}

/// Random melody drawn uniformly, with replacement, from `pool`
pub fn random_individual<R: Rng>(pool: &[Pitch], length: usize, rng: &mut R) -> Individual {
    (0..length)
        .filter_map(|_| pool.choose(rng).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const POOL: [Pitch; 8] = [60, 62, 64, 65, 67, 69, 71, 72];

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        let parent = vec![60, 62, 64, 65, 67];
        for _ in 0..50 {
            assert_eq!(crossover(&parent, &parent, &mut rng).unwrap(), parent);
        }
    }

    #[test]
    fn test_crossover_takes_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(2);
        let p1 = vec![1; 10];
        let p2 = vec![2; 10];
        for _ in 0..50 {
            let child = crossover(&p1, &p2, &mut rng).unwrap();
            assert_eq!(child.len(), 10);
            assert_eq!(child[0], 1);
            assert_eq!(child[9], 2);
            let cut = child.iter().position(|&p| p == 2).unwrap();
            assert!(child[..cut].iter().all(|&p| p == 1));
            assert!(child[cut..].iter().all(|&p| p == 2));
        }
    }

    #[test]
    fn test_crossover_two_notes() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(crossover(&[1, 1], &[2, 2], &mut rng).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_crossover_rejects_short_or_mismatched() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(crossover(&[1], &[2], &mut rng).is_err());
        assert!(crossover(&[1, 2, 3], &[1, 2], &mut rng).is_err());
    }

    #[test]
    fn test_mutate_rate_zero_never_changes() {
        let mut rng = StdRng::seed_from_u64(5);
        let original = vec![60, 62, 64, 65];
        for _ in 0..200 {
            let mut individual = original.clone();
            assert_eq!(mutate(&mut individual, 0.0, &POOL, &mut rng), None);
            assert_eq!(individual, original);
        }
    }

    #[test]
    fn test_mutate_rate_one_touches_exactly_one_position() {
        let mut rng = StdRng::seed_from_u64(6);
        // Pool disjoint from the melody so every mutation is visible
        let pool = [100, 101];
        let original = vec![60; 16];
        for _ in 0..200 {
            let mut individual = original.clone();
            let position = mutate(&mut individual, 1.0, &pool, &mut rng).unwrap();
            assert_eq!(individual.len(), original.len());
            let changed: Vec<usize> = (0..individual.len())
                .filter(|&i| individual[i] != original[i])
                .collect();
            assert_eq!(changed, vec![position]);
            assert!(pool.contains(&individual[position]));
        }
    }

    #[test]
    fn test_random_individual_draws_from_pool() {
        let mut rng = StdRng::seed_from_u64(8);
        let individual = random_individual(&POOL, 32, &mut rng);
        assert_eq!(individual.len(), 32);
        assert!(individual.iter().all(|p| POOL.contains(p)));
    }
}
