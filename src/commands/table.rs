use impostor_odds::odds::EnumerationOptions;
use impostor_odds::reports::generator::generate_odds_report;
use impostor_odds::reports::table::{render_json, render_text};
use impostor_odds::reports::ReportResult;

pub fn table(
    min_players: usize,
    max_players: usize,
    json: bool,
    options: &EnumerationOptions,
) -> ReportResult<()> {
    let report = generate_odds_report(min_players, max_players, options)?;

    let output = if json {
        render_json(&report)?
    } else {
        render_text(&report)
    };
    println!("{}", output);

    Ok(())
}
