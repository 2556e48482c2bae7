use super::enumerator::{enumerate_round, EnumerationOptions, RoundOutcome};
use super::{validate_player_count, Result, MIN_PLAYERS};
use colored::*;
use serde::Serialize;

/// One round of the survival chain
#[derive(Debug, Clone, Serialize)]
pub struct ChainLink {
    pub round: RoundOutcome,
    pub p_survive: f64,
    /// Probability of surviving this round and every smaller one.
    pub cumulative: f64,
}

/// Per-round survival probabilities for a game, smallest round first.
#[derive(Debug, Clone, Serialize)]
pub struct SurvivalChain {
    pub players: usize,
    pub links: Vec<ChainLink>,
}

impl SurvivalChain {
    pub fn win_probability(&self) -> f64 {
        self.links.last().map(|link| link.cumulative).unwrap_or(1.0)
    }

    /// Win probability for a smaller game, read off the same chain.
    pub fn win_probability_at(&self, players: usize) -> Option<f64> {
        if players == MIN_PLAYERS {
            return Some(1.0);
        }
        self.links
            .iter()
            .find(|link| link.round.players_left == players)
            .map(|link| link.cumulative)
    }
}

/// Win probability when everyone, impostor included, votes at random.
///
/// With `n` players left each is voted off with probability `1/n`, so the
/// impostor survives with `(n-1)/n`. The product telescopes to `MIN_PLAYERS / n`.
pub fn random_win_probability(players: usize) -> Result<f64> {
    validate_player_count(players)?;
    Ok(MIN_PLAYERS as f64 / players as f64)
}

/// Win probability when the impostor votes strategically.
pub fn smart_win_probability(players: usize) -> Result<f64> {
    Ok(smart_chain(players, &EnumerationOptions::default())?.win_probability())
}

/// Enumerate every round from `MIN_PLAYERS + 1` up to `players` and
/// accumulate the impostor's survival probability.
pub fn smart_chain(players: usize, options: &EnumerationOptions) -> Result<SurvivalChain> {
    validate_player_count(players)?;

    let mut links = Vec::with_capacity(players - MIN_PLAYERS);
    let mut cumulative = 1.0;

    for players_left in (MIN_PLAYERS + 1)..=players {
        if options.verbose {
            eprintln!(
                "🗳️  Enumerating round with {} players left",
                players_left.to_string().bright_cyan()
            );
        }

        let round = enumerate_round(players_left, options)?;
        let p_survive = round.p_survive()?;
        cumulative *= p_survive;

        if options.verbose {
            eprintln!(
                "  📊 {} combinations in {} ms, survive {:.5}",
                round.combinations.to_string().bright_yellow(),
                round.elapsed_ms,
                p_survive
            );
        }

        links.push(ChainLink {
            round,
            p_survive,
            cumulative,
        });
    }

    Ok(SurvivalChain { players, links })
}
