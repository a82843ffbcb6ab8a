//! Tour representation.

/// A closed tour produced by one ant.
///
/// `path` has `N + 1` entries: it starts at city 0, visits every other
/// city exactly once, and ends back at city 0. `cost` is the sum of all
/// edge distances, closing edge included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    pub path: Vec<usize>,
    pub cost: f64,
}

impl Tour {
    pub fn new(path: Vec<usize>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// Consecutive `(from, to)` pairs, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Checks the closed-tour shape for `n` cities.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 || self.path.len() != n + 1 {
            return false;
        }
        if self.path[0] != 0 || self.path[n] != 0 {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.path[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tour() {
        let t = Tour::new(vec![0, 2, 1, 3, 0], 10.0);
        assert!(t.is_valid(4));
        assert!(!t.is_valid(3));
    }

    #[test]
    fn test_invalid_tours() {
        // repeated city
        assert!(!Tour::new(vec![0, 1, 1, 0], 0.0).is_valid(3));
        // wrong start
        assert!(!Tour::new(vec![1, 0, 2, 1], 0.0).is_valid(3));
        // not closed
        assert!(!Tour::new(vec![0, 1, 2, 1], 0.0).is_valid(3));
        // out of range
        assert!(!Tour::new(vec![0, 1, 5, 0], 0.0).is_valid(3));
        assert!(!Tour::new(vec![], 0.0).is_valid(0));
    }

    #[test]
    fn test_edges() {
        let t = Tour::new(vec![0, 2, 1, 0], 0.0);
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges, vec![(0, 2), (2, 1), (1, 0)]);
    }
}
