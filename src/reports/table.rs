use super::{OddsReport, ReportResult};
use crate::odds::{RoundOutcome, SurvivalChain};
use itertools::Itertools;

fn row(cells: &[String]) -> String {
    cells.iter().join("| ")
}

/// Fixed-width text table: `n | Random | Smart`.
pub fn render_text(report: &OddsReport) -> String {
    let mut lines = Vec::with_capacity(report.results.len() + 1);
    lines.push(row(&[
        format!("{:<3}", "n"),
        format!("{:<10}", "Random"),
        format!("{:<10}", "Smart"),
    ]));

    for result in &report.results {
        lines.push(row(&[
            format!("{:<3}", result.players),
            format!("{:<10.5}", result.random),
            format!("{:<10.5}", result.smart),
        ]));
    }

    lines.join("\n")
}

pub fn render_json(report: &OddsReport) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Counts and probabilities for a single round.
pub fn render_round(round: &RoundOutcome) -> String {
    let survive = match round.p_survive() {
        Ok(p) => format!("{:.5}", p),
        Err(_) => "undefined".to_string(),
    };

    [
        format!("Players left:        {}", round.players_left),
        format!("Combinations:        {}", round.combinations),
        format!(
            "Crew eliminated:     {} ({:.5})",
            round.counts.crew_eliminated,
            round.p_crew_eliminated()
        ),
        format!(
            "Impostor ties:       {} ({:.5})",
            round.counts.ties,
            round.p_tie()
        ),
        format!(
            "Impostor eliminated: {} ({:.5})",
            round.counts.impostor_eliminated,
            round.p_impostor_eliminated()
        ),
        format!("Survival:            {}", survive),
    ]
    .join("\n")
}

/// One line per round: players left, survival, and the running product.
pub fn render_chain(chain: &SurvivalChain) -> String {
    let mut lines = vec![row(&[
        format!("{:<3}", "k"),
        format!("{:<10}", "Survive"),
        format!("{:<10}", "Cumulative"),
    ])];

    lines.extend(chain.links.iter().map(|link| {
        row(&[
            format!("{:<3}", link.round.players_left),
            format!("{:<10.5}", link.p_survive),
            format!("{:<10.5}", link.cumulative),
        ])
    }));

    lines.join("\n")
}
