use crate::engines::generation::fitness::FitnessEvaluator;
use crate::engines::generation::operators::random_individual;
use crate::types::{Fitness, Individual, Pitch, Population};
use rand::Rng;

/// Seed `population_size` melodies of `sequence_length` notes from `pool`.
pub fn initialize<R: Rng>(
    pool: &[Pitch],
    population_size: usize,
    sequence_length: usize,
    rng: &mut R,
) -> Population {
    (0..population_size)
        .map(|_| random_individual(pool, sequence_length, rng))
        .collect()
}

/// Population ordered best-first, each member paired with the score it was ranked by
pub type RankedPopulation = Vec<(Individual, Fitness)>;

/// Score every individual once, sort best-first and take the top half as parents.
///
/// The sort is stable: equal scores keep their previous relative order.
/// `population_size` is the configured size, so an odd size drops one
/// individual from the parent pool.
pub fn rank_and_split<R: Rng>(
    population: Population,
    population_size: usize,
    evaluator: &FitnessEvaluator,
    rng: &mut R,
) -> (RankedPopulation, Population) {
    let mut ranked: RankedPopulation = population
        .into_iter()
        .map(|individual| {
            let score = evaluator.evaluate(&individual, rng);
            (individual, score)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let parents = ranked
        .iter()
        .take(population_size / 2)
        .map(|(individual, _)| individual.clone())
        .collect();

    (ranked, parents)
}

/// Parents first, then offspring. No re-ranking happens here.
pub fn next_generation(parents: Population, offspring: Population) -> Population {
    let mut next = parents;
    next.extend(offspring);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initialize_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = [60, 64, 67];
        let population = initialize(&pool, 20, 12, &mut rng);
        assert_eq!(population.len(), 20);
        for individual in &population {
            assert_eq!(individual.len(), 12);
            assert!(individual.iter().all(|p| pool.contains(p)));
        }
    }

    #[test]
    fn test_rank_orders_descending() {
        let mut rng = StdRng::seed_from_u64(2);
        // Contour penalties of 0, 12 and 48 dominate the small noisy terms
        let smooth = vec![60, 60, 60, 60];
        let medium = vec![60, 72, 72, 72];
        let jumpy = vec![48, 72, 48, 48];
        let population = vec![jumpy.clone(), smooth.clone(), medium.clone()];

        let (ranked, parents) =
            rank_and_split(population, 3, &FitnessEvaluator::default(), &mut rng);

        let order: Vec<&Individual> = ranked.iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![&smooth, &medium, &jumpy]);
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(parents, vec![smooth]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let mut rng = StdRng::seed_from_u64(3);
        // Single-note melodies: uniqueness 1, rhythm 1, contour 0 -> always 2
        let population: Population = (0..6).map(|p| vec![60 + p]).collect();
        let (ranked, parents) =
            rank_and_split(population.clone(), 6, &FitnessEvaluator::default(), &mut rng);
        let order: Population = ranked.into_iter().map(|(i, _)| i).collect();
        assert_eq!(order, population);
        assert_eq!(parents, population[..3].to_vec());
    }

    #[test]
    fn test_odd_population_drops_one_parent() {
        let mut rng = StdRng::seed_from_u64(4);
        let population = initialize(&[60, 62, 64], 11, 8, &mut rng);
        let (ranked, parents) =
            rank_and_split(population, 11, &FitnessEvaluator::default(), &mut rng);
        assert_eq!(ranked.len(), 11);
        assert_eq!(parents.len(), 5);
    }

    #[test]
    fn test_next_generation_concatenates() {
        let parents = vec![vec![1, 1], vec![2, 2]];
        let offspring = vec![vec![3, 3]];
        let next = next_generation(parents.clone(), offspring.clone());
        assert_eq!(next.len(), parents.len() + offspring.len());
        assert_eq!(next, vec![vec![1, 1], vec![2, 2], vec![3, 3]]);
    }
}
