//! Crossover by gene averaging
//!
//! Two distinct parents are drawn from the breeding pool and their gene
//! vectors are averaged element-wise. Parents stay in the pool and may be
//! drawn again.

use othello_core::{Genes, Individual};
use rand::seq::index;
use rand::Rng;

/// Element-wise mean of two gene vectors (integer, truncated toward zero)
pub fn average_genes(a: &Genes, b: &Genes) -> Genes {
    let mut child = [0; othello_core::GENE_COUNT];
    for (gene, (x, y)) in child.iter_mut().zip(a.iter().zip(b)) {
        *gene = (x + y) / 2;
    }
    child
}

/// Child of two parents; score fields carry the parents' sums
pub fn crossover_pair(a: &Individual, b: &Individual) -> Individual {
    let mut child = Individual::new(average_genes(&a.genes, &b.genes));
    child.black_score = a.black_score + b.black_score;
    child.white_score = a.white_score + b.white_score;
    child
}

/// Append `offspring_count` children bred from the current pool
///
/// Parents are drawn only from the individuals present when the call
/// starts; new children are not bred again within the same call.
///
/// # Panics
/// Panics if the pool has fewer than two individuals.
pub fn crossover<R: Rng + ?Sized>(pool: &mut Vec<Individual>, offspring_count: usize, rng: &mut R) {
    let parents = pool.len();
    assert!(parents >= 2, "Crossover needs at least 2 parents, got {}", parents);

    pool.reserve(offspring_count);
    for _ in 0..offspring_count {
        let picks = index::sample(rng, parents, 2);
        let child = crossover_pair(&pool[picks.index(0)], &pool[picks.index(1)]);
        pool.push(child);
    }
}
