use super::{OddsReport, OddsRow, ReportResult};
use crate::odds::{
    random_win_probability, smart_chain, validate_player_range, EnumerationOptions, OddsError,
};
use chrono::Utc;
use colored::*;

/// Build the results table for every game size in `min_players..=max_players`.
///
/// Smart probabilities for smaller games are prefixes of the largest game's
/// survival chain, so each round is enumerated once.
pub fn generate_odds_report(
    min_players: usize,
    max_players: usize,
    options: &EnumerationOptions,
) -> ReportResult<OddsReport> {
    validate_player_range(min_players, max_players)?;

    if options.verbose {
        eprintln!(
            "🚀 Computing impostor odds for {} to {} players",
            min_players.to_string().bright_cyan(),
            max_players.to_string().bright_cyan()
        );
    }

    let chain = smart_chain(max_players, options)?;

    let mut results = Vec::with_capacity(max_players - min_players + 1);
    for players in min_players..=max_players {
        let smart = chain
            .win_probability_at(players)
            .ok_or(OddsError::InvalidPlayerCount {
                players,
                min: min_players,
                max: max_players,
            })?;

        results.push(OddsRow {
            players,
            random: random_win_probability(players)?,
            smart,
        });
    }

    if options.verbose {
        eprintln!("✅ Computed {} rows", results.len().to_string().green());
    }

    Ok(OddsReport {
        generated_at: Utc::now(),
        min_players,
        max_players,
        results,
        rounds: chain.links,
    })
}
