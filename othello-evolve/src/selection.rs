//! Selection by group round robin
//!
//! The population is cut into fixed groups; each group plays a full round
//! robin and its best performers survive into the breeding pool.

use othello_core::Individual;
use othello_tournament::{play_round_robin, MatchConfig};
use rand::seq::SliceRandom;
use rand::Rng;

/// Individuals per round-robin group
pub const GROUP_SIZE: usize = 6;

/// Survivors kept from each group
pub const SURVIVORS_PER_GROUP: usize = 3;

/// Keep the top [`SURVIVORS_PER_GROUP`] of every group of [`GROUP_SIZE`].
///
/// Ties in win count keep group order. Survivors from all groups are
/// shuffled together to form the breeding pool.
///
/// # Panics
/// Panics if the population size is not a multiple of [`GROUP_SIZE`].
pub fn selection<R: Rng + ?Sized>(
    population: &[Individual],
    config: &MatchConfig,
    rng: &mut R,
) -> Vec<Individual> {
    assert!(
        population.len() % GROUP_SIZE == 0,
        "Population size {} must be a multiple of {}",
        population.len(),
        GROUP_SIZE
    );

    let mut selected = Vec::with_capacity(population.len() / GROUP_SIZE * SURVIVORS_PER_GROUP);

    for (group_index, chunk) in population.chunks(GROUP_SIZE).enumerate() {
        let mut group = chunk.to_vec();
        let standings = play_round_robin(&mut group, config, rng);

        for standing in standings.iter().take(SURVIVORS_PER_GROUP) {
            let survivor = &group[standing.index];
            tracing::debug!(
                "Group {}: keeping {:?} with {} wins ({:.0}%)",
                group_index,
                survivor.genes,
                standing.wins,
                standing.win_rate() * 100.0
            );
            selected.push(survivor.clone());
        }
    }

    selected.shuffle(rng);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_tournament::AiConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn quick_config() -> MatchConfig {
        MatchConfig::new(AiConfig::alpha_beta(1)).with_board(6, 6)
    }

    fn population(n: usize, seed: u64) -> Vec<Individual> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n).map(|_| Individual::random(&mut rng)).collect()
    }

    #[test]
    fn test_selection_keeps_three_per_group() {
        let pop = population(12, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let selected = selection(&pop, &quick_config(), &mut rng);

        assert_eq!(selected.len(), (12 / GROUP_SIZE) * SURVIVORS_PER_GROUP);
        for survivor in &selected {
            assert!(pop.iter().any(|ind| ind.genes == survivor.genes));
        }
    }

    #[test]
    fn test_survivors_come_from_each_group() {
        let pop = population(12, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let selected = selection(&pop, &quick_config(), &mut rng);

        let from_first = selected
            .iter()
            .filter(|s| pop[..6].iter().any(|ind| ind.genes == s.genes))
            .count();
        assert_eq!(from_first, SURVIVORS_PER_GROUP);
    }

    #[test]
    fn test_survivors_have_most_wins() {
        let pop = population(6, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let selected = selection(&pop, &quick_config(), &mut rng);

        let total: u32 = selected.iter().map(|s| s.wins).sum();
        // Three survivors out of fifteen games: at least the average share
        assert!(total >= 8, "survivors only won {} games", total);
    }

    #[test]
    #[should_panic(expected = "multiple of 6")]
    fn test_selection_rejects_bad_size() {
        let pop = population(7, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        selection(&pop, &quick_config(), &mut rng);
    }
}
