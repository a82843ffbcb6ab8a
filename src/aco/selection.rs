//! Next-city selection rule.
//!
//! Candidates carry a desirability score `τ^α · η^β`. Selection is
//! fitness-proportionate (roulette wheel) over those scores, with two
//! defined fallbacks:
//!
//! - all scores zero (or a non-finite total): uniform choice
//! - rounding leaves the wheel short of the draw: last candidate

use rand::Rng;
use tracing::trace;

/// Desirability of moving along an edge with the given pheromone and
/// distance.
///
/// A zero distance has no heuristic attraction: its score is 0 no matter
/// what `beta` is.
#[inline]
pub fn desirability(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    let heuristic = if distance != 0.0 {
        (1.0 / distance).powf(beta)
    } else {
        0.0
    };
    pheromone.powf(alpha) * heuristic
}

/// Picks a city from `(city, score)` candidates by roulette wheel.
///
/// Draws `r` uniformly from `[0, total)` and walks the candidates in
/// order, returning the first whose running sum reaches `r`. Returns
/// `None` only when `candidates` is empty.
///
/// # Examples
///
/// ```
/// use ant_colony_tsp::aco::roulette_select;
/// use ant_colony_tsp::random::create_rng;
///
/// let mut rng = create_rng(1);
/// // Only city 4 has weight, so it is always picked.
/// let pick = roulette_select(&[(2, 0.0), (4, 3.0), (7, 0.0)], &mut rng);
/// assert_eq!(pick, Some(4));
/// ```
pub fn roulette_select<R: Rng>(candidates: &[(usize, f64)], rng: &mut R) -> Option<usize> {
    let (last, _) = *candidates.last()?;
    let total: f64 = candidates.iter().map(|&(_, score)| score).sum();

    if total == 0.0 || !total.is_finite() {
        trace!(total, candidates = candidates.len(), "uniform fallback");
        let idx = rng.random_range(0..candidates.len());
        return Some(candidates[idx].0);
    }

    let r = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for &(city, score) in candidates {
        cumulative += score;
        if cumulative >= r {
            return Some(city);
        }
    }

    trace!(r, cumulative, "roulette tail fallback");
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_desirability() {
        assert!((desirability(1.0, 2.0, 1.0, 2.0) - 0.25).abs() < 1e-12);
        assert!((desirability(4.0, 1.0, 0.5, 2.0) - 2.0).abs() < 1e-12);
        assert_eq!(desirability(5.0, 0.0, 1.0, 2.0), 0.0);
        assert_eq!(desirability(5.0, 0.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_empty() {
        let mut rng = create_rng(0);
        assert_eq!(roulette_select(&[], &mut rng), None);
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = create_rng(0);
        assert_eq!(roulette_select(&[(3, 0.7)], &mut rng), Some(3));
        assert_eq!(roulette_select(&[(3, 0.0)], &mut rng), Some(3));
    }

    #[test]
    fn test_zero_total_is_uniform() {
        let mut rng = create_rng(42);
        let candidates = [(1, 0.0), (2, 0.0), (3, 0.0)];
        let mut counts = [0usize; 4];
        for _ in 0..3000 {
            let c = roulette_select(&candidates, &mut rng).unwrap();
            counts[c] += 1;
        }
        assert_eq!(counts[0], 0);
        for &c in &counts[1..] {
            assert!(c > 800 && c < 1200, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_infinite_total_falls_back() {
        let mut rng = create_rng(5);
        let pick = roulette_select(&[(1, f64::INFINITY), (2, 1.0)], &mut rng);
        assert!(matches!(pick, Some(1) | Some(2)));
    }

    #[test]
    fn test_proportional() {
        let mut rng = create_rng(42);
        let candidates = [(0, 1.0), (1, 3.0)];
        let mut ones = 0;
        for _ in 0..4000 {
            if roulette_select(&candidates, &mut rng) == Some(1) {
                ones += 1;
            }
        }
        let ratio = ones as f64 / 4000.0;
        assert!((ratio - 0.75).abs() < 0.05, "got ratio {ratio}");
    }

    #[test]
    #[allow(deprecated)]
    fn test_zero_draw_picks_first_candidate() {
        // StepRng(0, 0) always yields zero bits, so r = 0.0.
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let pick = roulette_select(&[(5, 0.0), (6, 2.0), (7, 1.0)], &mut rng);
        // cumulative 0.0 >= 0.0 already holds at the first candidate
        assert_eq!(pick, Some(5));
    }
}
