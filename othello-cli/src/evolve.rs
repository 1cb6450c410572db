//! Evolve command - run the genetic tuner on positional weights
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_evolution_config(), run_evolution(), report_results()
//! - Level 3: print_generation(), print_summary()
//! - Level 4: RNG and formatting utilities

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use othello_core::{Individual, CLASSIC_GENES};
use othello_evolve::{run_with_callback, EvolutionConfig, EvolutionResult, GenerationSummary, GROUP_SIZE};
use othello_tournament::{AiConfig, MatchConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct EvolveArgs {
    /// Population size (multiple of 6)
    #[arg(long, default_value = "60")]
    pub population: usize,

    /// Number of generations to run
    #[arg(long, default_value = "15")]
    pub epochs: usize,

    /// Probability that crossover fires in a generation
    #[arg(long, default_value = "1.0")]
    pub crossover_rate: f64,

    /// Probability that mutation fires in a generation
    #[arg(long, default_value = "0.5")]
    pub mutation_rate: f64,

    /// Individuals mutated when mutation fires
    #[arg(long, default_value = "20")]
    pub mutation_count: usize,

    /// AI search depth for selection games
    #[arg(long, default_value = "5")]
    pub depth: i32,

    /// Time budget per move in milliseconds
    #[arg(long, default_value = "4800")]
    pub time_ms: u64,

    /// Board rows for selection games
    #[arg(long, default_value = "8")]
    pub rows: usize,

    /// Board columns for selection games
    #[arg(long, default_value = "8")]
    pub cols: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run evolve command
///
/// 1. Validate arguments and build the configuration
/// 2. Run the evolution loop
/// 3. Report results
pub fn run(args: EvolveArgs, seed: Option<u64>) -> Result<()> {
    let config = build_evolution_config(&args, seed)?;
    let mut rng = create_rng(seed);

    tracing::info!(
        "Starting evolution: pop={}, epochs={}, depth={}, board={}x{}",
        config.population_size,
        config.epochs,
        args.depth,
        args.rows,
        args.cols
    );

    let result = run_evolution(&config, args.json, &mut rng);

    report_results(&result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build evolution configuration from command arguments
fn build_evolution_config(args: &EvolveArgs, seed: Option<u64>) -> Result<EvolutionConfig> {
    if args.population == 0 || args.population % GROUP_SIZE != 0 {
        bail!(
            "--population must be a positive multiple of {}, got {}",
            GROUP_SIZE,
            args.population
        );
    }
    for (name, rate) in [("crossover-rate", args.crossover_rate), ("mutation-rate", args.mutation_rate)] {
        if !(0.0..=1.0).contains(&rate) {
            bail!("--{} must be within [0, 1], got {}", name, rate);
        }
    }
    for (name, side) in [("rows", args.rows), ("cols", args.cols)] {
        if side < 4 || side % 2 != 0 {
            bail!("--{} must be even and at least 4, got {}", name, side);
        }
    }
    if args.depth < 1 {
        bail!("--depth must be at least 1, got {}", args.depth);
    }

    let mut ai = AiConfig::alpha_beta(args.depth).with_time_limit(Duration::from_millis(args.time_ms));
    if let Some(s) = seed {
        ai = ai.with_seed(s);
    }

    Ok(EvolutionConfig {
        population_size: args.population,
        epochs: args.epochs,
        crossover_rate: args.crossover_rate,
        mutation_rate: args.mutation_rate,
        mutation_count: args.mutation_count,
        matches: MatchConfig::new(ai).with_board(args.rows, args.cols),
    })
}

/// Run the evolution loop with progress output
fn run_evolution(config: &EvolutionConfig, quiet: bool, rng: &mut ChaCha8Rng) -> EvolutionResult {
    run_with_callback(
        config,
        |summary| {
            if !quiet {
                print_generation(summary);
            }
        },
        rng,
    )
}

/// Print the final population
fn report_results(result: &EvolutionResult, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(result).context("Failed to serialize results")?;
        println!("{}", text);
    } else {
        print_summary(result);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn print_generation(summary: &GenerationSummary) {
    println!(
        "Epoch {:>3}: best {} ({} wins)  mean distance {:.1}{}{}",
        summary.epoch,
        format_genes(&summary.best_genes),
        summary.best_wins,
        summary.mean_distance,
        if summary.crossed_over { "  [crossover]" } else { "" },
        if summary.mutated { "  [mutation]" } else { "" }
    );
}

fn print_summary(result: &EvolutionResult) {
    println!("\n=== Final Population ===");
    println!("classic  {}", format_genes(&CLASSIC_GENES));
    for (i, individual) in ranked(&result.population).iter().enumerate() {
        println!(
            "#{:<3}     {}  distance {:>5}  margin {:>5}",
            i + 1,
            format_genes(&individual.genes),
            individual.distance_from_classic(),
            individual.margin()
        );
    }

    if let Some(champion) = result.champion() {
        println!(
            "\nLast champion: {} ({} wins in epoch {})",
            format_genes(&champion.best_genes),
            champion.best_wins,
            champion.epoch
        );
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Population ordered closest-to-classic first
fn ranked(population: &[Individual]) -> Vec<&Individual> {
    let mut sorted: Vec<&Individual> = population.iter().collect();
    sorted.sort_by_key(|ind| ind.distance_from_classic().abs());
    sorted
}

fn format_genes(genes: &[i32]) -> String {
    let parts: Vec<String> = genes.iter().map(|g| format!("{:>4}", g)).collect();
    format!("[{}]", parts.join(","))
}
