use crate::odds::{ChainLink, OddsError};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod generator;
pub mod table;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{0}")]
    Odds(#[from] OddsError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Impostor win probabilities for a range of game sizes
#[derive(Debug, Serialize)]
pub struct OddsReport {
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
    #[serde(rename = "minPlayers")]
    pub min_players: usize,
    #[serde(rename = "maxPlayers")]
    pub max_players: usize,
    pub results: Vec<OddsRow>,
    pub rounds: Vec<ChainLink>,
}

/// One row of the results table
#[derive(Debug, Clone, Serialize)]
pub struct OddsRow {
    pub players: usize,
    pub random: f64,
    pub smart: f64,
}
