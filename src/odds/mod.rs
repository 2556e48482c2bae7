//! Impostor survival odds under random and smart voting.
//!
//! A round with `players_left` living players has one impostor and
//! `players_left - 1` crew members. Crew members vote uniformly at random for
//! any other living player; the impostor votes last, either to eliminate a
//! crew member or to force a tie that saves itself.

pub mod chain;
pub mod enumerator;

pub use chain::{random_win_probability, smart_chain, smart_win_probability, ChainLink, SurvivalChain};
pub use enumerator::{
    combination_count, decode, decode_into, decode_targets, encode_targets, enumerate_round,
    resolve_target, EnumerationOptions, Outcome, OutcomeCounts, RoundOutcome, VoteTally,
};

/// Smallest supported game. With two players left the impostor has won.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported game. Enumeration at this size visits `10^10` combinations.
pub const MAX_PLAYERS: usize = 11;

#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    #[error("Number of players must be between {min} and {max}, got {players}")]
    InvalidPlayerCount {
        players: usize,
        min: usize,
        max: usize,
    },
    #[error("Invalid player range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: usize, max: usize },
    #[error("Tie probability is 1 with {players_left} players left, survival is undefined")]
    DegenerateTieProbability { players_left: usize },
}

pub type Result<T> = std::result::Result<T, OddsError>;

/// Reject player counts outside `[MIN_PLAYERS, MAX_PLAYERS]`.
pub fn validate_player_count(players: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(OddsError::InvalidPlayerCount {
            players,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

/// Validate both ends of an inclusive player range.
pub fn validate_player_range(min: usize, max: usize) -> Result<()> {
    validate_player_count(min)?;
    validate_player_count(max)?;
    if min > max {
        return Err(OddsError::InvalidRange { min, max });
    }
    Ok(())
}
