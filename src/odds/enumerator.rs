//! Exhaustive enumeration of crew voting combinations for one round.
//!
//! Every combination is a base `players_left - 1` numeral with one digit per
//! crew voter (voter 0 is the least significant digit). Counting from zero to
//! `combination_count(players_left)` visits each combination exactly once, so
//! nothing is materialized beyond a reusable tally buffer.

use super::{validate_player_count, OddsError, Result};
use instant::Instant;
use rayon::prelude::*;
use serde::Serialize;
use std::ops::Range;

/// Indices handed to one rayon task when enumerating in parallel.
const SHARD_SIZE: u64 = 1 << 20;

/// Enumeration options
#[derive(Debug, Clone)]
pub struct EnumerationOptions {
    /// Split the index range across the rayon thread pool.
    pub parallel: bool,
    /// Print per-round progress to stderr.
    pub verbose: bool,
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            verbose: false,
        }
    }
}

/// How a round ends once the impostor has cast its vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    CrewEliminated,
    ImpostorTiesAndSurvives,
    ImpostorEliminated,
}

/// Map a voter's digit onto a player slot, skipping the voter's own slot.
///
/// Digits `0..players_left - 1` cover every other living player: digits below
/// `voter` keep their value, the rest shift up by one.
pub fn resolve_target(voter: usize, digit: usize) -> usize {
    if digit >= voter {
        digit + 1
    } else {
        digit
    }
}

/// Number of crew voting combinations, `(players_left - 1) ^ (players_left - 1)`.
pub fn combination_count(players_left: usize) -> u64 {
    let radix = (players_left - 1) as u64;
    radix.pow(radix as u32)
}

/// Votes received by each living player. The impostor holds the last slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    votes: Vec<u32>,
}

impl VoteTally {
    pub fn new(players_left: usize) -> Self {
        Self {
            votes: vec![0; players_left],
        }
    }

    pub fn players_left(&self) -> usize {
        self.votes.len()
    }

    pub fn votes(&self) -> &[u32] {
        &self.votes
    }

    pub fn total_votes(&self) -> u32 {
        self.votes.iter().sum()
    }

    /// Highest vote count among crew members.
    pub fn max_crew_votes(&self) -> u32 {
        let crew = self.votes.len().saturating_sub(1);
        self.votes[..crew].iter().copied().max().unwrap_or(0)
    }

    pub fn impostor_votes(&self) -> u32 {
        self.votes.last().copied().unwrap_or(0)
    }

    pub fn classify(&self) -> Outcome {
        let max_crew = self.max_crew_votes();
        let impostor = self.impostor_votes();

        if max_crew >= impostor {
            Outcome::CrewEliminated
        } else if max_crew + 1 == impostor {
            Outcome::ImpostorTiesAndSurvives
        } else {
            Outcome::ImpostorEliminated
        }
    }

    fn clear(&mut self) {
        for count in self.votes.iter_mut() {
            *count = 0;
        }
    }
}

/// Decode a combination index into a fresh tally.
pub fn decode(index: u64, players_left: usize) -> VoteTally {
    let mut tally = VoteTally::new(players_left);
    decode_into(index, &mut tally);
    tally
}

/// Decode a combination index into an existing tally, overwriting it.
pub fn decode_into(index: u64, tally: &mut VoteTally) {
    tally.clear();
    let radix = (tally.players_left() - 1) as u64;
    let mut rest = index;

    for voter in 0..tally.players_left() - 1 {
        let digit = (rest % radix) as usize;
        tally.votes[resolve_target(voter, digit)] += 1;
        rest /= radix;
    }
}

/// The player slot each crew voter picks in combination `index`.
pub fn decode_targets(index: u64, players_left: usize) -> Vec<usize> {
    let radix = (players_left - 1) as u64;
    let mut rest = index;

    (0..players_left - 1)
        .map(|voter| {
            let digit = (rest % radix) as usize;
            rest /= radix;
            resolve_target(voter, digit)
        })
        .collect()
}

/// Inverse of [`decode_targets`]. Returns `None` when a voter picks itself or
/// a slot beyond the impostor.
pub fn encode_targets(targets: &[usize]) -> Option<u64> {
    let radix = targets.len() as u64;
    let mut index = 0u64;

    for (voter, &target) in targets.iter().enumerate().rev() {
        if target == voter || target > targets.len() {
            return None;
        }
        let digit = if target > voter { target - 1 } else { target };
        index = index * radix + digit as u64;
    }

    Some(index)
}

/// Per-outcome combination counts. Partial counts from disjoint index ranges
/// combine with [`OutcomeCounts::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub crew_eliminated: u64,
    pub ties: u64,
    pub impostor_eliminated: u64,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::CrewEliminated => self.crew_eliminated += 1,
            Outcome::ImpostorTiesAndSurvives => self.ties += 1,
            Outcome::ImpostorEliminated => self.impostor_eliminated += 1,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            crew_eliminated: self.crew_eliminated + other.crew_eliminated,
            ties: self.ties + other.ties,
            impostor_eliminated: self.impostor_eliminated + other.impostor_eliminated,
        }
    }

    pub fn total(&self) -> u64 {
        self.crew_eliminated + self.ties + self.impostor_eliminated
    }
}

/// Enumeration result for a single round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundOutcome {
    pub players_left: usize,
    pub combinations: u64,
    pub counts: OutcomeCounts,
    pub elapsed_ms: u64,
}

impl RoundOutcome {
    pub fn p_crew_eliminated(&self) -> f64 {
        self.counts.crew_eliminated as f64 / self.combinations as f64
    }

    pub fn p_tie(&self) -> f64 {
        self.counts.ties as f64 / self.combinations as f64
    }

    pub fn p_impostor_eliminated(&self) -> f64 {
        self.counts.impostor_eliminated as f64 / self.combinations as f64
    }

    /// Probability the impostor survives this round, `P(crew) / (1 - P(tie))`.
    ///
    /// A tie sends the round to a revote, so ties are conditioned away. When
    /// every combination ties the revote never resolves and this fails with
    /// [`OddsError::DegenerateTieProbability`].
    pub fn p_survive(&self) -> Result<f64> {
        if self.counts.ties == self.combinations {
            return Err(OddsError::DegenerateTieProbability {
                players_left: self.players_left,
            });
        }
        Ok(self.p_crew_eliminated() / (1.0 - self.p_tie()))
    }
}

/// Classify every crew voting combination for a round with `players_left` players.
pub fn enumerate_round(players_left: usize, options: &EnumerationOptions) -> Result<RoundOutcome> {
    validate_player_count(players_left)?;

    let start = Instant::now();
    let combinations = combination_count(players_left);

    let counts = if options.parallel {
        count_sharded(players_left, combinations)
    } else {
        count_range(players_left, 0..combinations)
    };
    debug_assert_eq!(counts.total(), combinations);

    Ok(RoundOutcome {
        players_left,
        combinations,
        counts,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}

fn count_range(players_left: usize, indices: Range<u64>) -> OutcomeCounts {
    let mut tally = VoteTally::new(players_left);
    let mut counts = OutcomeCounts::default();

    for index in indices {
        decode_into(index, &mut tally);
        counts.record(tally.classify());
    }

    counts
}

fn count_sharded(players_left: usize, combinations: u64) -> OutcomeCounts {
    let shards = (combinations + SHARD_SIZE - 1) / SHARD_SIZE;

    (0..shards)
        .into_par_iter()
        .map(|shard| {
            let start = shard * SHARD_SIZE;
            let end = (start + SHARD_SIZE).min(combinations);
            count_range(players_left, start..end)
        })
        .reduce(OutcomeCounts::default, OutcomeCounts::merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use std::collections::HashSet;

    fn sequential() -> EnumerationOptions {
        EnumerationOptions::default()
    }

    #[test]
    fn test_resolve_target_skips_voter() {
        for (voter, digit) in iproduct!(0..6, 0..6) {
            assert_ne!(resolve_target(voter, digit), voter);
        }
        assert_eq!(resolve_target(0, 0), 1);
        assert_eq!(resolve_target(2, 1), 1);
        assert_eq!(resolve_target(2, 2), 3);
    }

    #[test]
    fn test_resolve_target_is_bijective_per_voter() {
        let players_left = 5;
        for voter in 0..players_left - 1 {
            let targets: HashSet<usize> = (0..players_left - 1)
                .map(|digit| resolve_target(voter, digit))
                .collect();
            let expected: HashSet<usize> =
                (0..players_left).filter(|&slot| slot != voter).collect();
            assert_eq!(targets, expected, "voter {voter}");
        }
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(combination_count(2), 1);
        assert_eq!(combination_count(3), 4);
        assert_eq!(combination_count(4), 27);
        assert_eq!(combination_count(11), 10_000_000_000);
    }

    #[test]
    fn test_decode_zero() {
        // Voter 0 skips itself and lands on slot 1, everyone else on slot 0.
        assert_eq!(decode(0, 4).votes(), &[2, 1, 0, 0]);
        assert_eq!(decode(0, 4), decode(0, 4));
        assert_eq!(decode_targets(0, 4), vec![1, 0, 0]);
    }

    #[test]
    fn test_decode_last_index_targets_impostor() {
        let players_left = 5;
        let last = combination_count(players_left) - 1;
        let tally = decode(last, players_left);
        assert_eq!(tally.votes(), &[0, 0, 0, 0, 4]);
        assert_eq!(tally.classify(), Outcome::ImpostorEliminated);
    }

    #[test]
    fn test_decode_into_overwrites_previous_tally() {
        let mut tally = decode(3, 3);
        decode_into(0, &mut tally);
        assert_eq!(tally, decode(0, 3));
    }

    #[test]
    fn test_tally_sums_to_crew_size() {
        let players_left = 5;
        for index in 0..combination_count(players_left) {
            let tally = decode(index, players_left);
            assert_eq!(tally.total_votes() as usize, players_left - 1);
        }
    }

    #[test]
    fn test_decode_is_bijection() {
        let players_left = 5;
        let total = combination_count(players_left);
        let mut seen = HashSet::new();

        for index in 0..total {
            let targets = decode_targets(index, players_left);
            assert_eq!(encode_targets(&targets), Some(index));
            assert!(seen.insert(targets), "index {index} repeats a combination");
        }
        assert_eq!(seen.len() as u64, total);
    }

    #[test]
    fn test_encode_rejects_self_vote() {
        assert_eq!(encode_targets(&[0, 0]), None);
        assert_eq!(encode_targets(&[1, 3]), None);
        assert_eq!(encode_targets(&[2, 2]), Some(3));
    }

    #[test]
    fn test_classify() {
        let tally = |votes: Vec<u32>| VoteTally { votes };
        assert_eq!(tally(vec![1, 1, 1]).classify(), Outcome::CrewEliminated);
        assert_eq!(tally(vec![2, 0, 1]).classify(), Outcome::CrewEliminated);
        assert_eq!(
            tally(vec![1, 0, 0, 2]).classify(),
            Outcome::ImpostorTiesAndSurvives
        );
        assert_eq!(tally(vec![0, 0, 2]).classify(), Outcome::ImpostorEliminated);
    }

    #[test]
    fn test_three_players_hand_enumeration() {
        // 0: [1,1,0] crew, 1: [1,0,1] crew, 2: [0,1,1] crew, 3: [0,0,2] impostor
        let round = enumerate_round(3, &sequential()).unwrap();
        assert_eq!(round.combinations, 4);
        assert_eq!(
            round.counts,
            OutcomeCounts {
                crew_eliminated: 3,
                ties: 0,
                impostor_eliminated: 1,
            }
        );
        assert!((round.p_survive().unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_reference_counts() {
        let four = enumerate_round(4, &sequential()).unwrap();
        assert_eq!(
            (four.counts.crew_eliminated, four.counts.ties, four.counts.impostor_eliminated),
            (20, 6, 1)
        );
        assert!((four.p_survive().unwrap() - 20.0 / 21.0).abs() < 1e-12);

        let five = enumerate_round(5, &sequential()).unwrap();
        assert_eq!(
            (five.counts.crew_eliminated, five.counts.ties, five.counts.impostor_eliminated),
            (201, 42, 13)
        );
    }

    #[test]
    fn test_counts_are_exhaustive() {
        for players_left in 2..=7 {
            let round = enumerate_round(players_left, &sequential()).unwrap();
            assert_eq!(round.counts.total(), combination_count(players_left));
            let sum = round.p_crew_eliminated() + round.p_tie() + round.p_impostor_eliminated();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_two_players_always_tie() {
        let round = enumerate_round(2, &sequential()).unwrap();
        assert_eq!(round.counts.ties, 1);
        assert!(matches!(
            round.p_survive(),
            Err(OddsError::DegenerateTieProbability { players_left: 2 })
        ));
    }

    #[test]
    fn test_sharded_matches_sequential() {
        let parallel = EnumerationOptions {
            parallel: true,
            ..Default::default()
        };
        for players_left in [3, 6, 8] {
            let a = enumerate_round(players_left, &sequential()).unwrap();
            let b = enumerate_round(players_left, &parallel).unwrap();
            assert_eq!(a.counts, b.counts, "players_left {players_left}");
        }
    }

    #[test]
    fn test_enumerate_round_rejects_invalid_count() {
        assert!(enumerate_round(1, &sequential()).is_err());
        assert!(enumerate_round(12, &sequential()).is_err());
    }
}
