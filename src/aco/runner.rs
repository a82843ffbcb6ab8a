//! Iteration loop driving an [`AntColony`].
//!
//! Each iteration:
//!
//! 1. construct `ant_count` tours against the current pheromone snapshot
//! 2. rank them by cost and update the global best on strict improvement
//! 3. apply the whole batch with [`AntColony::update_pheromones`]
//!
//! Ants are numbered from 1 in results; iterations are numbered from 0 in
//! [`BestTour`] and from 1 in [`IterationStats`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use super::colony::AntColony;
use super::config::AcoConfig;
use super::types::Tour;
use crate::distance::DistanceMatrix;
use crate::error::AcoResult;
use crate::random::rng_from;

/// How many of the best ants per iteration are reported.
pub const TOP_ANTS: usize = 4;

/// The best tour found so far and where it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestTour {
    pub tour: Tour,
    /// 1-based ant number within its iteration.
    pub ant: usize,
    /// 0-based iteration index.
    pub iteration: usize,
}

/// Per-iteration progress record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Cheapest tour constructed in this iteration.
    pub iteration_best_cost: f64,
    /// Cheapest tour seen up to and including this iteration.
    pub best_cost: f64,
    /// Ant numbers of the cheapest tours this iteration, best first.
    pub top_ants: Vec<usize>,
}

/// Result of an [`AcoRunner`] run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoOutcome {
    /// Best tour over the whole run. `None` only if cancelled before the
    /// first iteration.
    pub best: Option<BestTour>,

    /// Best tour of the first iteration.
    pub first_best: Option<Tour>,

    /// Number of iterations completed.
    pub iterations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// One entry per completed iteration.
    pub history: Vec<IterationStats>,
}

impl AcoOutcome {
    /// Cost of the best tour, or infinity when there is none.
    pub fn best_cost(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |b| b.tour.cost)
    }
}

/// Runs the iteration loop over an ant colony.
///
/// # Usage
///
/// ```
/// use ant_colony_tsp::aco::{AcoConfig, AcoRunner};
/// use ant_colony_tsp::distance::DistanceMatrix;
///
/// let distances = DistanceMatrix::from_fn(6, |i, j| ((j - i) * 3) as f64).unwrap();
/// let config = AcoConfig::default()
///     .with_ant_count(8)
///     .with_iterations(20)
///     .with_seed(42);
/// let outcome = AcoRunner::run(distances, &config).unwrap();
/// assert_eq!(outcome.iterations, 20);
/// assert!(outcome.best.unwrap().tour.is_valid(6));
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Builds a colony from `distances` and `config.colony`, then runs it.
    pub fn run(distances: DistanceMatrix, config: &AcoConfig) -> AcoResult<AcoOutcome> {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next iteration and returns what it has so far.
    pub fn run_with_cancel(
        distances: DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult<AcoOutcome> {
        config.validate()?;
        let mut colony = AntColony::new(distances, config.colony)?;
        Self::run_colony(&mut colony, config, cancel)
    }

    /// Runs an existing colony, continuing from its current pheromones.
    ///
    /// Only the loop settings of `config` are used (`ant_count`,
    /// `iterations`, `stagnation_limit`, `seed`, `parallel`); the colony
    /// keeps its own [`ColonyParams`](super::ColonyParams). Call
    /// [`AntColony::reset_pheromones`] first to restart from a cold state.
    pub fn run_colony(
        colony: &mut AntColony,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult<AcoOutcome> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let mut best: Option<BestTour> = None;
        let mut first_best = None;
        let mut history = Vec::with_capacity(config.iterations);
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        for iteration in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let batch = construct(colony, config, &mut rng);
            let ranking = rank_by_cost(&batch);
            let leader = ranking[0];
            let iteration_best = &batch[leader];

            if first_best.is_none() {
                first_best = Some(iteration_best.clone());
            }

            let improved = best
                .as_ref()
                .is_none_or(|b| iteration_best.cost < b.tour.cost);
            if improved {
                info!(
                    iteration,
                    ant = leader + 1,
                    cost = iteration_best.cost,
                    "new best tour"
                );
                best = Some(BestTour {
                    tour: iteration_best.clone(),
                    ant: leader + 1,
                    iteration,
                });
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            let best_cost = best.as_ref().map_or(f64::INFINITY, |b| b.tour.cost);
            let top_ants: Vec<usize> = ranking.iter().take(TOP_ANTS).map(|&i| i + 1).collect();
            debug!(
                iteration = iteration + 1,
                iteration_best = iteration_best.cost,
                best = best_cost,
                ?top_ants,
                "iteration complete"
            );
            history.push(IterationStats {
                iteration: iteration + 1,
                iteration_best_cost: iteration_best.cost,
                best_cost,
                top_ants,
            });

            colony.update_pheromones(&batch);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        let outcome = AcoOutcome {
            best,
            first_best,
            iterations: history.len(),
            stagnated,
            cancelled,
            history,
        };
        info!(
            iterations = outcome.iterations,
            best = outcome.best_cost(),
            stagnated,
            cancelled,
            "run finished"
        );
        Ok(outcome)
    }
}

#[cfg(feature = "parallel")]
fn construct<R: Rng>(colony: &AntColony, config: &AcoConfig, rng: &mut R) -> Vec<Tour> {
    if config.parallel {
        colony.par_construct_batch(config.ant_count, rng)
    } else {
        colony.construct_batch(config.ant_count, rng)
    }
}

#[cfg(not(feature = "parallel"))]
fn construct<R: Rng>(colony: &AntColony, config: &AcoConfig, rng: &mut R) -> Vec<Tour> {
    colony.construct_batch(config.ant_count, rng)
}

/// Indices of `batch` ordered by ascending cost; ties keep ant order.
fn rank_by_cost(batch: &[Tour]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..batch.len()).collect();
    order.sort_by(|&a, &b| {
        batch[a]
            .cost
            .partial_cmp(&batch[b].cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
