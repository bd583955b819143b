//! Summary statistics over the outcomes of a series
//!
//! Everything here is derived from the outcome set; nothing is stored on the
//! tree itself. The closed forms let callers check an enumeration against
//! `2·C(L−1, n−1)` outcomes of length `L` for an `n`-win series.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::node::{Outcome, Team};

/// Counts derived from a set of outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesStats {
    pub wins_needed: u32,
    pub total: usize,
    /// `total / 2`, exact by symmetry
    pub per_winner: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub count_by_length: BTreeMap<u32, usize>,
}

/// Tally outcomes by winner and by length
pub fn stats<'a, I>(wins_needed: u32, outcomes: I) -> SeriesStats
where
    I: IntoIterator<Item = &'a Outcome>,
{
    let mut total = 0;
    let mut wins_a = 0;
    let mut wins_b = 0;
    let mut count_by_length = BTreeMap::new();

    for outcome in outcomes {
        total += 1;
        match outcome.winner {
            Team::A => wins_a += 1,
            Team::B => wins_b += 1,
        }
        *count_by_length.entry(outcome.length).or_insert(0) += 1;
    }

    SeriesStats {
        wins_needed,
        total,
        per_winner: total / 2,
        wins_a,
        wins_b,
        count_by_length,
    }
}

impl SeriesStats {
    pub fn count_by_length(&self, length: u32) -> usize {
        self.count_by_length.get(&length).copied().unwrap_or(0)
    }

    /// Percentage of outcomes lasting exactly `length` games
    pub fn share(&self, length: u32) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count_by_length(length) as f64 * 100.0 / self.total as f64
    }

    pub fn shortest(&self) -> Option<u32> {
        self.count_by_length.keys().next().copied()
    }

    pub fn longest(&self) -> Option<u32> {
        self.count_by_length.keys().next_back().copied()
    }

    pub fn wins(&self, team: Team) -> usize {
        match team {
            Team::A => self.wins_a,
            Team::B => self.wins_b,
        }
    }

    /// Check every length from `n` to `2n − 1` against the closed form
    pub fn verify(&self) -> Result<()> {
        let n = self.wins_needed;
        for length in n..2 * n {
            let expected = expected_count(n, length);
            let actual = self.count_by_length(length) as u64;
            if expected != actual {
                return Err(Error::CountMismatch {
                    length,
                    expected,
                    actual,
                });
            }
        }
        if let Some((&length, &count)) = self
            .count_by_length
            .iter()
            .find(|(length, _)| **length < n || **length >= 2 * n)
        {
            return Err(Error::CountMismatch {
                length,
                expected: 0,
                actual: count as u64,
            });
        }
        Ok(())
    }
}

/// `C(n, k)`, computed incrementally so intermediate values stay exact
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Outcomes of exactly `length` games: `2·C(L−1, n−1)`
///
/// The final game is won by the champion; the other `n − 1` wins are spread
/// over the first `L − 1` games.
pub fn expected_count(wins_needed: u32, length: u32) -> u64 {
    if wins_needed == 0 || length < wins_needed || length >= 2 * wins_needed {
        return 0;
    }
    2 * binomial(u64::from(length) - 1, u64::from(wins_needed) - 1)
}

/// Total outcomes for an `n`-win series: `2·C(2n−1, n)`
pub fn expected_total(wins_needed: u32) -> u64 {
    (wins_needed..2 * wins_needed)
        .map(|length| expected_count(wins_needed, length))
        .sum()
}

/// Nodes in the full tree: `2·C(2n, n) − 1`
pub fn expected_node_count(wins_needed: u32) -> u64 {
    let n = u64::from(wins_needed);
    (2 * binomial(2 * n, n)).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::build_tree;
    use crate::outcomes::collect_outcomes;

    fn four_win_stats() -> SeriesStats {
        let tree = build_tree(4).unwrap();
        stats(4, collect_outcomes(&tree))
    }

    #[test]
    fn test_totals() {
        let s = four_win_stats();
        assert_eq!(s.total, 70);
        assert_eq!(s.per_winner, 35);
        assert_eq!(s.wins_a, 35);
        assert_eq!(s.wins_b, 35);
    }

    #[test]
    fn test_count_by_length() {
        let s = four_win_stats();
        assert_eq!(s.count_by_length(4), 2);
        assert_eq!(s.count_by_length(5), 8);
        assert_eq!(s.count_by_length(6), 20);
        assert_eq!(s.count_by_length(7), 40);
        assert_eq!(s.count_by_length(8), 0);
        assert_eq!(s.count_by_length.values().sum::<usize>(), s.total);
        assert_eq!(s.shortest(), Some(4));
        assert_eq!(s.longest(), Some(7));
    }

    #[test]
    fn test_share() {
        let s = four_win_stats();
        assert!((s.share(4) - 2.857).abs() < 0.01);
        assert!((s.share(7) - 57.142).abs() < 0.01);
        let total: f64 = (4..=7).map(|l| s.share(l)).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_verify_passes_for_enumerated_trees() {
        for n in 1..=6 {
            let tree = build_tree(n).unwrap();
            let s = stats(n as u32, collect_outcomes(&tree));
            assert!(s.verify().is_ok(), "closed form mismatch for n={}", n);
            assert_eq!(s.total as u64, expected_total(n as u32));
            assert_eq!(tree.len() as u64, expected_node_count(n as u32));
        }
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let mut s = four_win_stats();
        s.count_by_length.insert(6, 19);
        assert_eq!(
            s.verify().unwrap_err(),
            Error::CountMismatch {
                length: 6,
                expected: 20,
                actual: 19
            }
        );
    }

    #[test]
    fn test_closed_forms() {
        assert_eq!(binomial(6, 3), 20);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(expected_count(4, 7), 40);
        assert_eq!(expected_count(4, 3), 0);
        assert_eq!(expected_total(4), 70);
        assert_eq!(expected_total(1), 2);
        assert_eq!(expected_node_count(4), 139);
    }

    #[test]
    fn test_empty_outcomes() {
        let s = stats(4, std::iter::empty::<&Outcome>());
        assert_eq!(s.total, 0);
        assert_eq!(s.share(4), 0.0);
        assert_eq!(s.shortest(), None);
    }
}
