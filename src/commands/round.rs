use colored::Colorize;
use impostor_odds::odds::{decode, decode_targets, enumerate_round, smart_chain, EnumerationOptions};
use impostor_odds::reports::table::{render_chain, render_round};
use impostor_odds::reports::ReportResult;
use itertools::Itertools;

/// Print the outcome breakdown for one round, optionally listing the first
/// `show` decoded combinations.
pub fn round(players_left: usize, show: u64, options: &EnumerationOptions) -> ReportResult<()> {
    let outcome = enumerate_round(players_left, options)?;
    println!("{}", render_round(&outcome));

    let shown = show.min(outcome.combinations);
    if shown > 0 {
        println!("\n{}", "🔍 Combinations".bright_cyan().bold());
    }
    for index in 0..shown {
        let tally = decode(index, players_left);
        println!(
            "  {:>6}: targets [{}] tally [{}] {:?}",
            index,
            decode_targets(index, players_left).iter().join(", "),
            tally.votes().iter().join(", "),
            tally.classify()
        );
    }

    Ok(())
}

/// Print the survival chain for a game of `players`.
pub fn rounds(players: usize, options: &EnumerationOptions) -> ReportResult<()> {
    let chain = smart_chain(players, options)?;
    println!("{}", render_chain(&chain));
    println!(
        "\n{} {:.5}",
        "🎯 Smart win probability:".bright_green(),
        chain.win_probability()
    );

    Ok(())
}
