//! Round-robin group play
//!
//! Level 1 - Orchestration and Level 2 - Phases

use othello_core::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::fitness::{fitness, MatchWinner};

/// Standing of a participant after a round robin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Index of the individual within its group
    pub index: usize,
    /// Games won
    pub wins: u32,
    /// Games played
    pub games_played: u32,
}

impl Standing {
    /// Win rate
    pub fn win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f32 / self.games_played as f32
        }
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Every pair in `group` plays once; the lower index takes Black
///
/// Win tallies on the individuals are reset first and then accumulated.
/// Standings come back ordered by wins, ties kept in group order.
pub fn play_round_robin<R: Rng + ?Sized>(
    group: &mut [Individual],
    config: &MatchConfig,
    rng: &mut R,
) -> Vec<Standing> {
    for individual in group.iter_mut() {
        individual.wins = 0;
    }

    let pairings = generate_round_robin_pairings(group.len());
    for &(i, j) in &pairings {
        let (head, tail) = group.split_at_mut(j);
        let (first, second) = (&mut head[i], &mut tail[0]);
        match fitness(first, second, config, rng) {
            MatchWinner::First => first.wins += 1,
            MatchWinner::Second => second.wins += 1,
        }
    }

    let games_each = group.len().saturating_sub(1) as u32;
    let standings = compute_standings(group, games_each);

    tracing::debug!(
        "Round robin of {}: wins {:?}",
        group.len(),
        standings.iter().map(|s| (s.index, s.wins)).collect::<Vec<_>>()
    );

    standings
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Generate all pairings for round-robin
fn generate_round_robin_pairings(n: usize) -> Vec<(usize, usize)> {
    let mut pairings = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            pairings.push((i, j));
        }
    }
    pairings
}

/// Stable sort of the group by win tally (descending)
fn compute_standings(group: &[Individual], games_each: u32) -> Vec<Standing> {
    let mut standings: Vec<Standing> = group
        .iter()
        .enumerate()
        .map(|(index, individual)| Standing {
            index,
            wins: individual.wins,
            games_played: games_each,
        })
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}
