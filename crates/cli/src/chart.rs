// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text output for simulation results.
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use pocketodds_cards::{Rank, StartingHand};
use pocketodds_sim::{ResultTable, Simulator, Tally, table::PLAYER_COUNTS};

/// The outcomes of a starting hand for a number of players.
#[derive(Debug, Serialize)]
pub struct HandResult {
    hand: StartingHand,
    players: usize,
    tally: Tally,
}

/// The starting hand in a chart cell, suited above the diagonal.
fn chart_hand(r1: Rank, r2: Rank) -> StartingHand {
    if r1 == r2 {
        StartingHand::Pair(r1)
    } else if r1 > r2 {
        StartingHand::Suited(r1, r2)
    } else {
        StartingHand::Offsuit(r2, r1)
    }
}

fn separator<W: Write>(w: &mut W) -> Result<()> {
    write!(w, "|")?;
    for _ in 0..13 {
        write!(w, "-----|")?;
    }
    writeln!(w)?;
    Ok(())
}

/// Writes a 13x13 chart with the win probabilities for `num_players`.
pub fn write_chart<W: Write>(w: &mut W, sim: &Simulator, num_players: usize) -> Result<()> {
    separator(w)?;

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let hand = chart_hand(r1, r2);
            labels.push(format!("{:<3}", hand.to_string()));
            probs.push(sim.estimate(hand.hand(), num_players)? * 100.0);
        }

        write!(w, "|")?;
        for label in labels {
            write!(w, " {label} |")?;
        }
        writeln!(w)?;

        write!(w, "|")?;
        for prob in probs {
            write!(w, " {:2.0}% |", prob.round())?;
        }
        writeln!(w)?;

        separator(w)?;
    }

    Ok(())
}

/// Runs `hand` with 2 to 10 players.
pub fn hand_results(sim: &Simulator, hand: StartingHand) -> Result<Vec<HandResult>> {
    PLAYER_COUNTS
        .map(|players| -> Result<HandResult> {
            let tally = sim.run(hand.hand(), players)?;
            Ok(HandResult {
                hand,
                players,
                tally,
            })
        })
        .collect()
}

/// Writes the outcomes for a single hand with 2 to 10 players.
pub fn write_hand<W: Write>(w: &mut W, sim: &Simulator, hand: StartingHand) -> Result<()> {
    writeln!(w, "{hand}: {} trials per row", sim.config().trials)?;
    writeln!(w, "players    win    tie   loss  equity")?;

    for HandResult { players, tally, .. } in hand_results(sim, hand)? {
        let pct = |n: u64| n as f64 / tally.trials as f64 * 100.0;
        writeln!(
            w,
            "{players:>7} {:>5.1}% {:>5.1}% {:>5.1}% {:>6.1}%",
            pct(tally.wins),
            pct(tally.ties),
            pct(tally.losses),
            tally.pot_share / tally.trials as f64 * 100.0,
        )?;
    }

    Ok(())
}

/// Writes any result as pretty JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Writes the table as CSV with a column for each number of players.
pub fn write_csv<W: Write>(w: &mut W, table: &ResultTable) -> Result<()> {
    write!(w, "hand")?;
    for num_players in table.player_counts() {
        write!(w, ",{num_players}")?;
    }
    writeln!(w)?;

    for row in table.rows() {
        write!(w, "{}", row.hand)?;
        for prob in &row.probs {
            write!(w, ",{prob:.4}")?;
        }
        writeln!(w)?;
    }

    Ok(())
}
