//! The ant colony: pheromone state plus tour construction and update.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::config::ColonyParams;
use super::pheromone::PheromoneMatrix;
use super::selection::{desirability, roulette_select};
use super::types::Tour;
use crate::distance::DistanceMatrix;
use crate::error::AcoResult;
use crate::random::create_rng;

/// City every tour starts from and returns to.
pub const START_CITY: usize = 0;

/// Pheromone matrix, distance model and weighting parameters for one
/// problem instance.
///
/// The colony has no notion of iterations or ants. A caller drives it:
/// construct one tour per ant with [`construct_tour`](Self::construct_tour)
/// (read-only, so all tours of an iteration see the same pheromone
/// snapshot), then apply the whole batch with
/// [`update_pheromones`](Self::update_pheromones).
///
/// # Examples
///
/// ```
/// use ant_colony_tsp::aco::{AntColony, ColonyParams};
/// use ant_colony_tsp::distance::DistanceMatrix;
/// use ant_colony_tsp::random::create_rng;
///
/// let distances = DistanceMatrix::from_fn(5, |i, j| (i as f64 - j as f64).abs()).unwrap();
/// let mut colony = AntColony::new(distances, ColonyParams::default()).unwrap();
/// let mut rng = create_rng(42);
///
/// for _ in 0..10 {
///     let batch: Vec<_> = (0..8).map(|_| colony.construct_tour(&mut rng)).collect();
///     colony.update_pheromones(&batch);
/// }
/// let tour = colony.construct_tour(&mut rng);
/// assert!(tour.is_valid(5));
/// ```
#[derive(Debug, Clone)]
pub struct AntColony {
    distances: DistanceMatrix,
    pheromones: PheromoneMatrix,
    params: ColonyParams,
}

impl AntColony {
    /// Creates a colony with a uniform pheromone matrix.
    ///
    /// The distance matrix is already validated by construction; this
    /// validates `params` (ρ must lie in (0, 1), Q must be positive).
    pub fn new(distances: DistanceMatrix, params: ColonyParams) -> AcoResult<Self> {
        params.validate()?;
        let n = distances.len();
        debug!(
            cities = n,
            alpha = params.alpha,
            beta = params.beta,
            rho = params.rho,
            q = params.q,
            "ant colony created"
        );
        Ok(Self {
            distances,
            pheromones: PheromoneMatrix::new(n),
            params,
        })
    }

    pub fn city_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Current pheromone intensities.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    pub fn params(&self) -> &ColonyParams {
        &self.params
    }

    /// Builds one ant's closed tour from [`START_CITY`].
    ///
    /// At each step every unvisited city is scored `τ^α · η^β` (η is
    /// inverse distance, 0 for zero-length edges) and one is picked by
    /// roulette wheel in ascending index order. Does not touch the
    /// pheromone matrix.
    pub fn construct_tour<R: Rng>(&self, rng: &mut R) -> Tour {
        let n = self.city_count();
        let ColonyParams { alpha, beta, .. } = self.params;

        let mut visited = vec![false; n];
        visited[START_CITY] = true;
        let mut path = Vec::with_capacity(n + 1);
        path.push(START_CITY);
        let mut current = START_CITY;
        let mut cost = 0.0;
        let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(n);

        while path.len() < n {
            let pheromone = self.pheromones.row(current);
            let distance = self.distances.row(current);
            candidates.clear();
            candidates.extend(
                (0..n)
                    .filter(|&j| !visited[j])
                    .map(|j| (j, desirability(pheromone[j], distance[j], alpha, beta))),
            );

            // One city leaves the candidate set per step, so this only
            // ends the loop once every city is on the path.
            let Some(next) = roulette_select(&candidates, rng) else {
                break;
            };

            visited[next] = true;
            path.push(next);
            cost += distance[next];
            current = next;
        }

        cost += self.distances.get(current, START_CITY);
        path.push(START_CITY);
        Tour::new(path, cost)
    }

    /// Builds `ant_count` tours against the current pheromone snapshot.
    ///
    /// Each ant draws from its own RNG, seeded from `rng` in ant order, so
    /// the batch is identical to [`par_construct_batch`](Self::par_construct_batch)
    /// for the same caller RNG state.
    pub fn construct_batch<R: Rng>(&self, ant_count: usize, rng: &mut R) -> Vec<Tour> {
        ant_seeds(ant_count, rng)
            .into_iter()
            .map(|seed| self.construct_tour(&mut create_rng(seed)))
            .collect()
    }

    /// Parallel version of [`construct_batch`](Self::construct_batch).
    #[cfg(feature = "parallel")]
    pub fn par_construct_batch<R: Rng>(&self, ant_count: usize, rng: &mut R) -> Vec<Tour> {
        ant_seeds(ant_count, rng)
            .into_par_iter()
            .map(|seed| self.construct_tour(&mut create_rng(seed)))
            .collect()
    }

    /// Applies one iteration's worth of tours.
    ///
    /// First every entry (diagonal included) is multiplied by `1 - ρ` and
    /// clamped into `[0.1, 50]`. Then each tour adds `Q / cost` to both
    /// directions of each of its edges, without re-clamping. The order of
    /// `batch` does not matter. An empty batch only evaporates.
    ///
    /// A zero-cost tour deposits an infinite amount; real instances never
    /// produce one.
    pub fn update_pheromones(&mut self, batch: &[Tour]) {
        self.pheromones.evaporate(self.params.rho);
        for tour in batch {
            let deposit = self.params.q / tour.cost;
            self.pheromones.deposit(&tour.path, deposit);
        }
    }

    /// Resets every pheromone entry to 1.0, keeping distances and parameters.
    pub fn reset_pheromones(&mut self) {
        debug!(cities = self.city_count(), "pheromones reset");
        self.pheromones.reset();
    }

    /// Constructs a batch of `ant_count` tours, then applies it.
    ///
    /// Returns the tours in ant order.
    pub fn step<R: Rng>(&mut self, ant_count: usize, rng: &mut R) -> Vec<Tour> {
        let batch = self.construct_batch(ant_count, rng);
        self.update_pheromones(&batch);
        batch
    }
}

fn ant_seeds<R: Rng>(ant_count: usize, rng: &mut R) -> Vec<u64> {
    (0..ant_count).map(|_| rng.random()).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::aco::pheromone::{PHEROMONE_MAX, PHEROMONE_MIN};
    use proptest::prelude::*;
    use rand::seq::SliceRandom;

    /// Symmetric matrices with whole-number entries in `0..=100`, zeros included.
    fn distance_matrix() -> impl Strategy<Value = DistanceMatrix> {
        (2usize..10).prop_flat_map(|n| {
            prop::collection::vec(0u32..=100, n * (n - 1) / 2).prop_map(move |upper| {
                let mut values = upper.into_iter();
                DistanceMatrix::from_fn(n, |_, _| values.next().unwrap_or(1) as f64).unwrap()
            })
        })
    }

    fn params() -> impl Strategy<Value = ColonyParams> {
        (0.0f64..3.0, 0.0f64..5.0, 0.01f64..0.99, 1.0f64..500.0).prop_map(
            |(alpha, beta, rho, q)| ColonyParams {
                alpha,
                beta,
                rho,
                q,
            },
        )
    }

    proptest! {
        #[test]
        fn tours_are_valid_and_costed(m in distance_matrix(), p in params(), seed: u64) {
            let n = m.len();
            let colony = AntColony::new(m, p).unwrap();
            let mut rng = create_rng(seed);
            for _ in 0..5 {
                let tour = colony.construct_tour(&mut rng);
                prop_assert!(tour.is_valid(n));
                let expected = colony.distances().tour_cost(&tour.path);
                prop_assert!((tour.cost - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }

        #[test]
        fn evaporation_keeps_bounds(m in distance_matrix(), p in params(), seed: u64, rounds in 1usize..20) {
            // Skip instances whose tours can cost zero.
            let positive = (0..m.len()).all(|i| (0..m.len()).all(|j| i == j || m.get(i, j) > 0.0));
            prop_assume!(positive);

            let mut colony = AntColony::new(m, p).unwrap();
            let mut rng = create_rng(seed);
            for _ in 0..rounds {
                colony.step(4, &mut rng);
            }
            colony.update_pheromones(&[]);
            for &v in colony.pheromones().as_slice() {
                prop_assert!((PHEROMONE_MIN..=PHEROMONE_MAX).contains(&v));
            }
        }

        #[test]
        fn update_ignores_batch_order(m in distance_matrix(), p in params(), seed: u64) {
            let positive = (0..m.len()).all(|i| (0..m.len()).all(|j| i == j || m.get(i, j) > 0.0));
            prop_assume!(positive);

            let mut rng = create_rng(seed);
            let mut a = AntColony::new(m, p).unwrap();
            a.step(3, &mut rng);
            let mut b = a.clone();

            let mut batch = a.construct_batch(6, &mut rng);
            a.update_pheromones(&batch);
            batch.shuffle(&mut rng);
            b.update_pheromones(&batch);

            for (x, y) in a.pheromones().as_slice().iter().zip(b.pheromones().as_slice()) {
                prop_assert!((x - y).abs() <= 1e-9 * x.abs().max(1.0));
            }
        }

        #[test]
        fn reset_restores_uniform(m in distance_matrix(), p in params(), seed: u64) {
            let positive = (0..m.len()).all(|i| (0..m.len()).all(|j| i == j || m.get(i, j) > 0.0));
            prop_assume!(positive);

            let mut colony = AntColony::new(m, p).unwrap();
            colony.step(3, &mut create_rng(seed));
            colony.reset_pheromones();
            prop_assert!(colony.pheromones().as_slice().iter().all(|&v| v == 1.0));
            prop_assert_eq!(colony.params(), &p);
        }
    }
}
