//! Mutation operators for gene vectors
//!
//! Provides two mutation operations:
//! - Additive noise on every gene
//! - Rank reversal (genes re-ordered ascending)

use othello_core::{clamp_weight, Genes, Individual};
use rand::Rng;

// ============================================================================
// Constants
// ============================================================================

/// Smallest noise added to a gene
pub const NOISE_MIN: i32 = -15;

/// Largest noise added to a gene
pub const NOISE_MAX: i32 = 30;

// ============================================================================
// Mutation Types
// ============================================================================

/// Which operator was applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Noise,
    RankReversal,
}

/// Add U[NOISE_MIN, NOISE_MAX] to every gene, clamped to the weight range
pub fn add_noise<R: Rng + ?Sized>(genes: &mut Genes, rng: &mut R) {
    for gene in genes.iter_mut() {
        *gene = clamp_weight(*gene + rng.gen_range(NOISE_MIN..=NOISE_MAX));
    }
}

/// Sort descending then reverse, leaving the genes in ascending order
pub fn reverse_ranks(genes: &mut Genes) {
    genes.sort_unstable_by(|a, b| b.cmp(a));
    genes.reverse();
}

/// Mutate one individual with an evenly chosen operator
pub fn mutate_individual<R: Rng + ?Sized>(individual: &mut Individual, rng: &mut R) -> MutationKind {
    if rng.gen_bool(0.5) {
        add_noise(&mut individual.genes, rng);
        MutationKind::Noise
    } else {
        reverse_ranks(&mut individual.genes);
        MutationKind::RankReversal
    }
}

/// Mutate the first `count` individuals in place
pub fn mutation<R: Rng + ?Sized>(individuals: &mut [Individual], count: usize, rng: &mut R) {
    for individual in individuals.iter_mut().take(count) {
        let kind = mutate_individual(individual, rng);
        tracing::trace!("{:?} mutation -> {:?}", kind, individual.genes);
    }
}
