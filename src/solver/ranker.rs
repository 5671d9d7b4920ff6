//! Best and worst guess selection
//!
//! Uses partial selection, so only the `k` chosen indices are ever sorted.
//! Ties go to the guess that came first in the input.

use std::cmp::Ordering;

/// Indices of the `k` best (smallest score) and worst (largest score) guesses
///
/// Both lists are ordered from most to least extreme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    pub best: Vec<usize>,
    pub worst: Vec<usize>,
}

/// Select the best and worst `k` guesses
///
/// # Examples
/// ```
/// use wordle_ranker::solver::rank;
///
/// let ranking = rank(&[3.0, 1.0, 2.0, 1.0], 2);
/// assert_eq!(ranking.best, vec![1, 3]);
/// assert_eq!(ranking.worst, vec![0, 2]);
/// ```
#[must_use]
pub fn rank(scores: &[f64], k: usize) -> Ranking {
    Ranking {
        best: smallest_k(scores, k),
        worst: largest_k(scores, k),
    }
}

/// Indices of the `k` smallest scores, ascending, ties by index
#[must_use]
pub fn smallest_k(scores: &[f64], k: usize) -> Vec<usize> {
    select_k(scores, k, |a, b| scores[a].total_cmp(&scores[b]).then(a.cmp(&b)))
}

/// Indices of the `k` largest scores, descending, ties by index
#[must_use]
pub fn largest_k(scores: &[f64], k: usize) -> Vec<usize> {
    select_k(scores, k, |a, b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)))
}

fn select_k<F>(scores: &[f64], k: usize, mut order: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let k = k.min(scores.len());
    if k == 0 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..scores.len()).collect();
    if k < indices.len() {
        indices.select_nth_unstable_by(k - 1, |&a, &b| order(a, b));
        indices.truncate(k);
    }
    indices.sort_unstable_by(|&a, &b| order(a, b));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn picks_extremes() {
        let scores = [4.0, 1.5, 9.0, 2.0, 7.5];
        assert_eq!(smallest_k(&scores, 2), [1, 3]);
        assert_eq!(largest_k(&scores, 2), [2, 4]);
    }

    #[test]
    fn ties_go_to_earlier_index() {
        let scores = [1.0, 1.0, 1.0, 0.5, 1.0];
        assert_eq!(smallest_k(&scores, 3), [3, 0, 1]);
        assert_eq!(largest_k(&scores, 2), [0, 1]);
    }

    #[test]
    fn k_larger_than_len_returns_everything_sorted() {
        let scores = [2.0, 1.0, 3.0];
        assert_eq!(smallest_k(&scores, 10), [1, 0, 2]);
        assert_eq!(largest_k(&scores, 10), [2, 0, 1]);
    }

    #[test]
    fn zero_k_and_empty_scores() {
        assert!(rank(&[1.0, 2.0], 0).best.is_empty());
        assert_eq!(rank(&[], 3), Ranking::default());
    }

    #[test]
    fn infinite_scores_sort_last_for_best() {
        let scores = [f64::INFINITY, 2.0, 1.0];
        assert_eq!(smallest_k(&scores, 2), [2, 1]);
        assert_eq!(largest_k(&scores, 1), [0]);
    }

    #[test]
    fn selection_separates_chosen_from_rest() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.random_range(1..60);
            // Few distinct values so ties are common
            let scores: Vec<f64> = (0..len)
                .map(|_| f64::from(rng.random_range(0..8u8)) / 2.0)
                .collect();
            let k = rng.random_range(0..=len);
            let ranking = rank(&scores, k);

            assert_eq!(ranking.best.len(), k);
            assert_eq!(ranking.worst.len(), k);

            for rest in (0..len).filter(|i| !ranking.best.contains(i)) {
                for &chosen in &ranking.best {
                    assert!(scores[chosen] <= scores[rest]);
                }
            }
            for rest in (0..len).filter(|i| !ranking.worst.contains(i)) {
                for &chosen in &ranking.worst {
                    assert!(scores[chosen] >= scores[rest]);
                }
            }
        }
    }

    #[test]
    fn matches_full_stable_sort() {
        let mut rng = StdRng::seed_from_u64(42);
        let scores: Vec<f64> = (0..200)
            .map(|_| f64::from(rng.random_range(0..20u8)))
            .collect();

        let mut sorted: Vec<usize> = (0..scores.len()).collect();
        sorted.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        assert_eq!(smallest_k(&scores, 15), sorted[..15]);
    }
}
