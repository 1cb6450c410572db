//! Othello Evolution - Genetic algorithm for positional weights
//!
//! This crate provides evolutionary algorithms:
//! - Population initialization
//! - Selection (group round robin)
//! - Crossover (gene averaging)
//! - Mutation (additive noise, rank reversal)

pub mod crossover;
pub mod mutation;
pub mod selection;

pub use crossover::{average_genes, crossover, crossover_pair};
pub use mutation::{add_noise, mutate_individual, mutation, reverse_ranks, MutationKind};
pub use selection::{selection, GROUP_SIZE, SURVIVORS_PER_GROUP};

use othello_core::{Genes, Individual};
use othello_tournament::MatchConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Evolution configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Individuals per generation (multiple of [`GROUP_SIZE`])
    pub population_size: usize,
    /// Generations to run
    pub epochs: usize,
    /// Chance that crossover fires in a generation
    pub crossover_rate: f64,
    /// Chance that mutation fires in a generation
    pub mutation_rate: f64,
    /// Individuals mutated when mutation fires
    pub mutation_count: usize,
    /// Games played during selection
    pub matches: MatchConfig,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            epochs: 15,
            crossover_rate: 1.0,
            mutation_rate: 0.5,
            mutation_count: 20,
            matches: MatchConfig::default(),
        }
    }
}

/// What happened in one generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub epoch: usize,
    /// Survivor with the most round-robin wins
    pub best_genes: Genes,
    pub best_wins: u32,
    /// Mean of [`Individual::distance_from_classic`] over the new population
    pub mean_distance: f64,
    pub crossed_over: bool,
    pub mutated: bool,
}

/// Result of evolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Final population
    pub population: Vec<Individual>,
    /// One entry per generation
    pub history: Vec<GenerationSummary>,
}

impl EvolutionResult {
    /// Best survivor of the last generation
    pub fn champion(&self) -> Option<&GenerationSummary> {
        self.history.last()
    }
}

/// Random population with distinct genes per individual
pub fn initialize_population<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Individual> {
    (0..size).map(|_| Individual::random(rng)).collect()
}

/// Evolve a random population for `config.epochs` generations
///
/// # Panics
/// Panics if `population_size` is not a multiple of [`GROUP_SIZE`].
pub fn run<R: Rng + ?Sized>(config: &EvolutionConfig, rng: &mut R) -> EvolutionResult {
    run_with_callback(config, |_| {}, rng)
}

/// Evolve with a progress callback invoked after every generation
pub fn run_with_callback<R, C>(config: &EvolutionConfig, mut callback: C, rng: &mut R) -> EvolutionResult
where
    R: Rng + ?Sized,
    C: FnMut(&GenerationSummary),
{
    let mut population = initialize_population(config.population_size, rng);
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        tracing::info!("Epoch {}: {} individuals", epoch, population.len());
        let (next, summary) = evolve_generation(&population, epoch, config, rng);
        callback(&summary);
        history.push(summary);
        population = next;
    }

    EvolutionResult { population, history }
}

/// Selection, then gated crossover, then gated mutation
fn evolve_generation<R: Rng + ?Sized>(
    population: &[Individual],
    epoch: usize,
    config: &EvolutionConfig,
    rng: &mut R,
) -> (Vec<Individual>, GenerationSummary) {
    let mut pool = selection(population, &config.matches, rng);
    let (best_genes, best_wins) = best_survivor(&pool);

    let offspring = population.len().saturating_sub(pool.len());
    let crossed_over = rng.gen::<f64>() <= config.crossover_rate;
    if crossed_over {
        crossover(&mut pool, offspring, rng);
    } else {
        refill_with_survivors(&mut pool, population.len());
    }

    let mutated = rng.gen::<f64>() < config.mutation_rate;
    if mutated {
        tracing::info!("Mutating {} individuals", config.mutation_count.min(pool.len()));
        mutation(&mut pool, config.mutation_count, rng);
    }

    let summary = GenerationSummary {
        epoch,
        best_genes,
        best_wins,
        mean_distance: mean_distance(&pool),
        crossed_over,
        mutated,
    };
    log_generation(&pool, &summary);

    (pool, summary)
}

/// Survivor with the most wins (first one on ties)
fn best_survivor(pool: &[Individual]) -> (Genes, u32) {
    pool.iter()
        .fold(None, |best: Option<&Individual>, ind| match best {
            Some(b) if b.wins >= ind.wins => Some(b),
            _ => Some(ind),
        })
        .map(|ind| (ind.genes, ind.wins))
        .unwrap_or_default()
}

/// Duplicate survivors in order until the pool is `target` long
fn refill_with_survivors(pool: &mut Vec<Individual>, target: usize) {
    let survivors = pool.len();
    if survivors == 0 {
        return;
    }
    let mut i = 0;
    while pool.len() < target {
        let copy = pool[i % survivors].clone();
        pool.push(copy);
        i += 1;
    }
}

fn mean_distance(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let total: i64 = population
        .iter()
        .map(|ind| i64::from(ind.distance_from_classic()))
        .sum();
    total as f64 / population.len() as f64
}

fn log_generation(population: &[Individual], summary: &GenerationSummary) {
    for ind in population {
        tracing::debug!(
            "{:?} distance={} margin={}",
            ind.genes,
            ind.distance_from_classic(),
            ind.margin()
        );
    }
    tracing::info!(
        "Epoch {} done: best={:?} ({} wins), mean distance={:.1}, crossover={}, mutation={}",
        summary.epoch,
        summary.best_genes,
        summary.best_wins,
        summary.mean_distance,
        summary.crossed_over,
        summary.mutated
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_tournament::AiConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn quick_config(population_size: usize, epochs: usize) -> EvolutionConfig {
        EvolutionConfig {
            population_size,
            epochs,
            matches: MatchConfig::new(AiConfig::alpha_beta(1)).with_board(6, 6),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 60);
        assert_eq!(config.epochs, 15);
        assert_eq!(config.crossover_rate, 1.0);
        assert_eq!(config.mutation_rate, 0.5);
    }

    #[test]
    fn test_initialize_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population = initialize_population(12, &mut rng);
        assert_eq!(population.len(), 12);
        assert!(population.iter().all(|ind| ind.wins == 0));
    }

    #[test]
    fn test_population_size_is_stable() {
        let config = quick_config(6, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut epochs_seen = Vec::new();

        let result = run_with_callback(&config, |s| epochs_seen.push(s.epoch), &mut rng);

        assert_eq!(result.population.len(), 6);
        assert_eq!(result.history.len(), 2);
        assert_eq!(epochs_seen, vec![0, 1]);
        assert!(result.history.iter().all(|s| s.crossed_over));
    }

    #[test]
    fn test_disabled_crossover_refills_with_survivors() {
        let mut config = quick_config(6, 1);
        config.crossover_rate = -1.0;
        config.mutation_rate = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let result = run(&config, &mut rng);

        assert_eq!(result.population.len(), 6);
        assert!(!result.history[0].crossed_over);
        assert!(!result.history[0].mutated);
        for i in 0..3 {
            assert_eq!(result.population[i], result.population[i + 3]);
        }
    }

    #[test]
    fn test_refill_with_survivors() {
        let mut pool = vec![Individual::new([1; 8]), Individual::new([2; 8])];
        refill_with_survivors(&mut pool, 5);
        let genes: Vec<i32> = pool.iter().map(|ind| ind.genes[0]).collect();
        assert_eq!(genes, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_best_survivor_prefers_first_on_ties() {
        let mut a = Individual::new([1; 8]);
        a.wins = 3;
        let mut b = Individual::new([2; 8]);
        b.wins = 4;
        let mut c = Individual::new([3; 8]);
        c.wins = 4;
        assert_eq!(best_survivor(&[a, b, c]), ([2; 8], 4));
        assert_eq!(best_survivor(&[]), ([0; 8], 0));
    }
}
