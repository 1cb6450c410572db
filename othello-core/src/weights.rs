//! Positional weight tables
//!
//! A [`WeightGrid`] assigns every square a signed value in
//! [`MIN_WEIGHT`, `MAX_WEIGHT`]. Grids are built from an 8-entry gene vector,
//! one gene per [`WeightClass`], laid out like the classic 8x8 table:
//!
//! ```text
//! 120 -20  20   5   5  20 -20 120
//! -20 -40  -5  -5  -5  -5 -40 -20
//!  20  -5  15   3   3  15  -5  20
//!   5  -5   3   3   3   3  -5   5
//! ```
//!
//! (bottom half mirrored). Larger boards reuse the outermost rings and fill
//! the interior with the inner class.

use serde::{Deserialize, Serialize};

/// Lowest allowed weight
pub const MIN_WEIGHT: i32 = -75;

/// Highest allowed weight
pub const MAX_WEIGHT: i32 = 75;

/// Number of distinct weight classes (gene length)
pub const GENE_COUNT: usize = 8;

/// Gene vector, one weight per class
pub type Genes = [i32; GENE_COUNT];

/// The hand-tuned classic values, indexed by [`WeightClass`]
pub const CLASSIC_GENES: Genes = [120, 20, 15, 5, 3, -5, -20, -40];

/// Positional classes of a square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    Corner = 0,
    NearCornerEdge = 1,
    InnerCorner = 2,
    Edge = 3,
    Inner = 4,
    DangerEdge = 5,
    DangerAdjacentCorner = 6,
    WorstAdjacentCorner = 7,
}

impl WeightClass {
    /// Classify (row, col) on a rows x cols board
    pub fn of(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let dr = row.min(rows - 1 - row).min(3);
        let dc = col.min(cols - 1 - col).min(3);
        match (dr.min(dc), dr.max(dc)) {
            (0, 0) => WeightClass::Corner,
            (0, 1) => WeightClass::DangerAdjacentCorner,
            (0, 2) => WeightClass::NearCornerEdge,
            (0, _) => WeightClass::Edge,
            (1, 1) => WeightClass::WorstAdjacentCorner,
            (1, _) => WeightClass::DangerEdge,
            (2, 2) => WeightClass::InnerCorner,
            _ => WeightClass::Inner,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Clamp a raw weight into the allowed range
pub fn clamp_weight(value: i32) -> i32 {
    value.clamp(MIN_WEIGHT, MAX_WEIGHT)
}

/// Immutable per-square weights for one side
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightGrid {
    rows: usize,
    cols: usize,
    values: Vec<i32>,
}

impl WeightGrid {
    /// Build a grid from a gene vector (values are clamped)
    pub fn from_genes(rows: usize, cols: usize, genes: &Genes) -> Self {
        let values = (0..rows * cols)
            .map(|i| {
                let class = WeightClass::of(i / cols, i % cols, rows, cols);
                clamp_weight(genes[class.index()])
            })
            .collect();
        Self { rows, cols, values }
    }

    /// The classic table (corners clamp to [`MAX_WEIGHT`])
    pub fn classic(rows: usize, cols: usize) -> Self {
        Self::from_genes(rows, cols, &CLASSIC_GENES)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weight at (row, col)
    ///
    /// # Panics
    /// Panics if (row, col) is off the grid.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) is off the weight grid");
        self.values[row * self.cols + col]
    }
}
