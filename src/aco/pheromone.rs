//! Pheromone matrix storage.

/// Value every entry starts at, and returns to on reset.
pub const PHEROMONE_INITIAL: f64 = 1.0;

/// Lower clamp applied after evaporation.
pub const PHEROMONE_MIN: f64 = 0.1;

/// Upper clamp applied after evaporation.
pub const PHEROMONE_MAX: f64 = 50.0;

/// N×N pheromone intensities, row-major.
///
/// Symmetric as long as it is only mutated through [`deposit`](Self::deposit),
/// which always updates `(a, b)` and `(b, a)` together. The diagonal is
/// stored and evaporated like every other entry but never read during
/// tour construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Uniform matrix at [`PHEROMONE_INITIAL`].
    pub fn new(n: usize) -> Self {
        Self {
            n,
            data: vec![PHEROMONE_INITIAL; n * n],
        }
    }

    /// Number of cities (side length).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Intensities on edges leaving city `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// All entries, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Multiplies every entry by `1 - rho`, then clamps it into
    /// `[PHEROMONE_MIN, PHEROMONE_MAX]`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for value in &mut self.data {
            *value = (*value * keep).clamp(PHEROMONE_MIN, PHEROMONE_MAX);
        }
    }

    /// Adds `amount` to both directions of every consecutive edge in `path`.
    ///
    /// No clamp here: an entry may exceed [`PHEROMONE_MAX`] until the next
    /// evaporation pulls it back.
    pub fn deposit(&mut self, path: &[usize], amount: f64) {
        let n = self.n;
        for w in path.windows(2) {
            let (a, b) = (w[0], w[1]);
            self.data[a * n + b] += amount;
            self.data[b * n + a] += amount;
        }
    }

    /// Restores every entry to [`PHEROMONE_INITIAL`].
    pub fn reset(&mut self) {
        self.data.fill(PHEROMONE_INITIAL);
    }
}
