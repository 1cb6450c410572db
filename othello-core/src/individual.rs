//! Individual - a gene vector and its tournament bookkeeping

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::weights::{Genes, WeightGrid, CLASSIC_GENES, GENE_COUNT, MAX_WEIGHT, MIN_WEIGHT};

/// One candidate weight vector for evolution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub genes: Genes,
    /// Black bead count of the last game involving this individual
    pub black_score: u32,
    /// White bead count of the last game involving this individual
    pub white_score: u32,
    /// Wins in the current round robin
    pub wins: u32,
}

impl Individual {
    pub fn new(genes: Genes) -> Self {
        Self {
            genes,
            black_score: 0,
            white_score: 0,
            wins: 0,
        }
    }

    /// Distinct genes drawn uniformly from [MIN_WEIGHT, MAX_WEIGHT)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let span = (MAX_WEIGHT - MIN_WEIGHT) as usize;
        let mut genes = [0; GENE_COUNT];
        for (gene, offset) in genes.iter_mut().zip(index::sample(rng, span, GENE_COUNT)) {
            *gene = MIN_WEIGHT + offset as i32;
        }
        Self::new(genes)
    }

    /// Weight table for a rows x cols board
    pub fn weights(&self, rows: usize, cols: usize) -> WeightGrid {
        WeightGrid::from_genes(rows, cols, &self.genes)
    }

    /// Margin of the last game (black minus white)
    pub fn margin(&self) -> i64 {
        i64::from(self.black_score) - i64::from(self.white_score)
    }

    /// Sum of (classic - gene), a rough progress indicator
    pub fn distance_from_classic(&self) -> i32 {
        CLASSIC_GENES
            .iter()
            .zip(&self.genes)
            .map(|(classic, gene)| classic - gene)
            .sum()
    }
}
