//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! Provides a steppable ant colony and the pieces around it:
//!
//! - **Distance model** ([`distance`]): validated symmetric distance
//!   matrices, built from explicit rows, city coordinates, or at random.
//! - **Colony** ([`aco::AntColony`]): pheromone matrix with the three
//!   core operations: construct a tour, update pheromones from a batch of
//!   tours, reset pheromones.
//! - **Runner** ([`aco::AcoRunner`]): an iteration loop over the colony
//!   that tracks the best tour and per-iteration statistics.
//!
//! # Architecture
//!
//! The colony owns no loop and no notion of time. A caller (the bundled
//! runner, an animation frontend, a test) asks for one tour per ant,
//! then hands the whole batch back for the pheromone update. All
//! randomness flows through a caller-supplied [`rand::Rng`], so runs are
//! reproducible from a seed.
//!
//! # Features
//!
//! - `parallel`: construct each iteration's tours on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for configs, tours and results

pub mod aco;
pub mod distance;
pub mod error;
pub mod random;

pub use error::{AcoError, AcoResult};
