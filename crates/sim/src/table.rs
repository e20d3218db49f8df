// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Win probability tables for all starting hands.
use ahash::AHashMap;
use log::{debug, info};
use serde::Serialize;
use std::{ops::RangeInclusive, time::Instant};

use pocketodds_cards::StartingHand;

use crate::{
    SimError, Simulator,
    deal::{self, MAX_PLAYERS, MIN_PLAYERS},
};

/// All the table player counts.
pub const PLAYER_COUNTS: RangeInclusive<usize> = MIN_PLAYERS..=MAX_PLAYERS;

/// The win probabilities of a starting hand.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// The starting hand.
    pub hand: StartingHand,
    /// The probabilities for each number of players in the table range, one
    /// column per player count.
    pub probs: Vec<f64>,
}

/// Win probabilities for each starting hand and number of players.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    trials_per_cell: u64,
    min_players: usize,
    max_players: usize,
    rows: Vec<Row>,
    #[serde(skip)]
    index: AHashMap<StartingHand, usize>,
}

impl ResultTable {
    fn new(trials_per_cell: u64, players: RangeInclusive<usize>) -> Self {
        let hands = StartingHand::all();
        let index = hands.iter().enumerate().map(|(i, h)| (*h, i)).collect();
        let rows = hands
            .into_iter()
            .map(|hand| Row {
                hand,
                probs: vec![0.0; players.clone().count()],
            })
            .collect();

        Self {
            trials_per_cell,
            min_players: *players.start(),
            max_players: *players.end(),
            rows,
            index,
        }
    }

    /// The number of trials used for each cell.
    pub fn trials_per_cell(&self) -> u64 {
        self.trials_per_cell
    }

    /// The number of players in the table columns.
    pub fn player_counts(&self) -> RangeInclusive<usize> {
        self.min_players..=self.max_players
    }

    /// The table rows in [StartingHand::all] order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The win probability of `hand` with `num_players`.
    pub fn get(&self, hand: StartingHand, num_players: usize) -> Option<f64> {
        let col = num_players.checked_sub(self.min_players)?;
        let row = self.index.get(&hand)?;
        self.rows[*row].probs.get(col).copied()
    }
}

/// Builds the table for all starting hands and 2 to 10 players.
pub fn build_table(sim: &Simulator) -> Result<ResultTable, SimError> {
    build_table_with(sim, PLAYER_COUNTS, |_, _, _| {})
}

/// Builds the table for all starting hands and the given range of players.
///
/// The `progress` closure is called after each cell with the hand, the
/// number of players and the win probability. The first failing cell aborts
/// the whole table.
pub fn build_table_with<F>(
    sim: &Simulator,
    players: RangeInclusive<usize>,
    mut progress: F,
) -> Result<ResultTable, SimError>
where
    F: FnMut(StartingHand, usize, f64),
{
    if players.is_empty() {
        return Err(SimError::NoPlayerCounts);
    }

    deal::check_players(*players.start())?;
    deal::check_players(*players.end())?;

    let mut table = ResultTable::new(sim.config().trials, players.clone());

    for (col, num_players) in players.enumerate() {
        let now = Instant::now();

        for row in table.rows.iter_mut() {
            let prob = sim.estimate(row.hand.hand(), num_players)?;
            debug!("{} {num_players} players: {prob:.4}", row.hand);

            row.probs[col] = prob;
            progress(row.hand, num_players, prob);
        }

        info!(
            "{num_players} players done in {:.3}s",
            now.elapsed().as_secs_f64()
        );
    }

    Ok(table)
}
