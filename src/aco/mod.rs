//! Ant Colony Optimization for the symmetric TSP.
//!
//! A colony of simulated ants builds closed tours over a
//! [`DistanceMatrix`](crate::distance::DistanceMatrix). Edges on short tours
//! are reinforced through a shared pheromone matrix, and all reinforcement
//! decays each iteration so the search does not lock in early.
//!
//! # Key Types
//!
//! - [`AntColony`]: pheromone state with tour construction, update and reset
//! - [`ColonyParams`]: α, β, ρ, Q
//! - [`AcoConfig`]: colony parameters plus ant count, iterations, seed
//! - [`AcoRunner`]: drives the construct-then-update loop and tracks the best tour
//!
//! # Selection rule
//!
//! From city `i`, each unvisited city `j` is weighted
//! `τ(i,j)^α · (1/d(i,j))^β` and drawn by roulette wheel
//! (see [`roulette_select`]).
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"

mod colony;
mod config;
mod pheromone;
mod runner;
mod selection;
mod types;

pub use colony::{AntColony, START_CITY};
pub use config::{AcoConfig, ColonyParams};
pub use pheromone::{PheromoneMatrix, PHEROMONE_INITIAL, PHEROMONE_MAX, PHEROMONE_MIN};
pub use runner::{AcoOutcome, AcoRunner, BestTour, IterationStats, TOP_ANTS};
pub use selection::{desirability, roulette_select};
pub use types::Tour;
