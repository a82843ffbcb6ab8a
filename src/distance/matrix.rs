//! Validated symmetric distance matrix.

use rand::Rng;

use super::city::City;
use crate::error::{AcoError, AcoResult};

/// Relative tolerance used when checking `d(i, j) == d(j, i)`.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Immutable N×N matrix of pairwise city distances.
///
/// Guaranteed on construction:
///
/// - at least 2 cities
/// - square, row-major storage
/// - every entry finite and non-negative
/// - zero diagonal
/// - symmetric (within a relative tolerance of `1e-9`)
///
/// Zero distances between distinct cities are allowed; the colony treats
/// such edges as having no heuristic attraction.
///
/// # Examples
///
/// ```
/// use ant_colony_tsp::distance::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.tour_cost(&[0, 1, 2, 0]), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, validating shape and contents.
    pub fn new(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::TooFewCities { count: n });
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(AcoError::InvalidDistance { i, j, value });
                }
            }
            if row[i] != 0.0 {
                return Err(AcoError::NonZeroDiagonal {
                    index: i,
                    value: row[i],
                });
            }
            data.extend(row);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let forward = data[i * n + j];
                let backward = data[j * n + i];
                let scale = forward.abs().max(backward.abs()).max(1.0);
                if (forward - backward).abs() > SYMMETRY_TOLERANCE * scale {
                    return Err(AcoError::Asymmetric {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Builds a symmetric matrix by evaluating `f(i, j)` for every `i < j`.
    ///
    /// The lower triangle mirrors the upper one and the diagonal is zero,
    /// so only the entry values themselves are validated.
    pub fn from_fn<F>(n: usize, mut f: F) -> AcoResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if n < 2 {
            return Err(AcoError::TooFewCities { count: n });
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let value = f(i, j);
                if !value.is_finite() || value < 0.0 {
                    return Err(AcoError::InvalidDistance { i, j, value });
                }
                data[i * n + j] = value;
                data[j * n + i] = value;
            }
        }
        Ok(Self { n, data })
    }

    /// Euclidean distances between cities, truncated to whole units.
    pub fn euclidean(cities: &[City]) -> AcoResult<Self> {
        Self::from_fn(cities.len(), |i, j| cities[i].distance_to(&cities[j]).trunc())
    }

    /// Random symmetric matrix of whole-number distances in `[min, max]`.
    pub fn random<R: Rng>(n: usize, min: u32, max: u32, rng: &mut R) -> AcoResult<Self> {
        if min > max {
            return Err(AcoError::parameter(
                "min",
                format!("must not exceed max ({min} > {max})"),
            ));
        }
        Self::from_fn(n, |_, _| rng.random_range(min..=max) as f64)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: a valid matrix has at least 2 cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "city index out of range");
        self.data[i * self.n + j]
    }

    /// Distances from city `i` to every city.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum of consecutive edge distances along `path`.
    ///
    /// The path is not closed implicitly; pass the return city explicitly.
    pub fn tour_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Copies the matrix back out as rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = AcoError;

    fn try_from(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.to_rows()
    }
}
