// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown equity simulation.
use log::trace;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;
use std::{iter::Sum, ops, thread};

use pocketodds_cards::{Card, Hand};
use pocketodds_eval::HandValue;

use crate::{
    SimError,
    deal::{self, BOARD_SIZE},
};

/// The hero result at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The hero hand beats every opponent.
    Win,
    /// The hero shares the best hand with `players - 1` opponents.
    Tie {
        /// Number of players with the best hand, hero included.
        players: usize,
    },
    /// An opponent has a better hand.
    Loss,
}

impl Outcome {
    /// Compares the hero hand value with the opponents values.
    pub fn showdown(hero: HandValue, opponents: &[HandValue]) -> Self {
        let mut tied = 1;
        for &value in opponents {
            if value > hero {
                return Outcome::Loss;
            } else if value == hero {
                tied += 1;
            }
        }

        if tied == 1 {
            Outcome::Win
        } else {
            Outcome::Tie { players: tied }
        }
    }

    /// The fraction of the pot won by the hero.
    pub fn pot_share(&self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie { players } => 1.0 / *players as f64,
            Outcome::Loss => 0.0,
        }
    }
}

/// How ties count towards the hero probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scoring {
    /// Only a strictly best hand counts as a win.
    #[default]
    StrictWin,
    /// A tie counts as the share of a split pot.
    SplitPot,
}

/// Outcome counters for a number of trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Tally {
    /// Number of trials.
    pub trials: u64,
    /// Trials won by the hero.
    pub wins: u64,
    /// Trials where the hero tied for the best hand.
    pub ties: u64,
    /// Trials lost by the hero.
    pub losses: u64,
    /// Sum of the hero pot shares.
    pub pot_share: f64,
}

impl Tally {
    /// Adds a trial outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.trials += 1;
        self.pot_share += outcome.pot_share();
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie { .. } => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    /// The hero win probability, zero if there are no trials.
    pub fn probability(&self, scoring: Scoring) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }

        let won = match scoring {
            Scoring::StrictWin => self.wins as f64,
            Scoring::SplitPot => self.pot_share,
        };

        won / self.trials as f64
    }
}

impl ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.trials += rhs.trials;
        self.wins += rhs.wins;
        self.ties += rhs.ties;
        self.losses += rhs.losses;
        self.pot_share += rhs.pot_share;
    }
}

impl ops::Add for Tally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Tally::default(), ops::Add::add)
    }
}

/// Evaluates all players hands for the given board.
pub fn showdown(players: &[Hand], board: &[Card; BOARD_SIZE]) -> Result<Vec<HandValue>, SimError> {
    players
        .iter()
        .map(|&hand| HandValue::eval(&deal::seven_cards(hand, board)).map_err(SimError::from))
        .collect()
}

/// Deals and plays a single round returning the hero outcome.
pub fn play_trial<R: Rng>(num_players: usize, hero: Hand, rng: &mut R) -> Result<Outcome, SimError> {
    let round = deal::deal_round(num_players, hero, rng)?;
    let values = showdown(&round.players, &round.board)?;
    Ok(Outcome::showdown(values[0], &values[1..]))
}

/// Runs `trials` rounds and counts the hero outcomes.
pub fn run_trials<R: Rng>(
    num_players: usize,
    hero: Hand,
    trials: u64,
    rng: &mut R,
) -> Result<Tally, SimError> {
    let mut tally = Tally::default();
    for _ in 0..trials {
        tally.record(play_trial(num_players, hero, rng)?);
    }

    Ok(tally)
}

/// Estimates the probability that `hand` has the strictly best hand at a
/// showdown with `num_players` players, running all trials on this thread.
pub fn estimate_win_probability<R: Rng>(
    hand: Hand,
    num_players: usize,
    trials: u64,
    rng: &mut R,
) -> Result<f64, SimError> {
    if trials == 0 {
        return Err(SimError::NoTrials);
    }

    let tally = run_trials(num_players, hand, trials, rng)?;
    Ok(tally.probability(Scoring::StrictWin))
}

/// Simulator configuration.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of trials for each hand and number of players.
    pub trials: u64,
    /// Number of parallel tasks.
    pub num_tasks: usize,
    /// Seed for reproducible runs, random if not set.
    pub seed: Option<u64>,
    /// How to count ties.
    pub scoring: Scoring,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            num_tasks: thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            seed: None,
            scoring: Scoring::default(),
        }
    }
}

/// A parallel equity simulator.
///
/// The trials are split between tasks, each task has its own random
/// generator and counters that are summed when all tasks are done.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// The simulator configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs the configured number of trials for `hand` with `num_players`.
    pub fn run(&self, hand: Hand, num_players: usize) -> Result<Tally, SimError> {
        let trials = self.config.trials;
        if trials == 0 {
            return Err(SimError::NoTrials);
        }

        deal::check_players(num_players)?;

        let num_tasks = (self.config.num_tasks.max(1) as u64).min(trials);
        let per_task = trials / num_tasks;
        let remainder = trials % num_tasks;

        let rngs = self.task_rngs(hand, num_players, num_tasks);

        thread::scope(|s| {
            let handles = rngs
                .into_iter()
                .zip(0..num_tasks)
                .map(|(mut rng, task_id)| {
                    let task_trials = per_task + u64::from(task_id < remainder);
                    s.spawn(move || {
                        trace!("task {task_id} running {task_trials} trials");
                        run_trials(num_players, hand, task_trials, &mut rng)
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().map_err(|_| SimError::WorkerPanic)?)
                .sum()
        })
    }

    /// Estimates the `hand` win probability with `num_players`.
    pub fn estimate(&self, hand: Hand, num_players: usize) -> Result<f64, SimError> {
        let tally = self.run(hand, num_players)?;
        Ok(tally.probability(self.config.scoring))
    }

    /// One generator per task, all drawn from the cell generator.
    fn task_rngs(&self, hand: Hand, num_players: usize, num_tasks: u64) -> Vec<SmallRng> {
        let mut cell_rng = match self.config.seed {
            Some(seed) => {
                // Cards ids and players count each fit in a byte.
                let [c1, c2] = hand.cards();
                let cell = (u64::from(c1.id()) << 16)
                    | (u64::from(c2.id()) << 8)
                    | (num_players as u64 & 0xff);
                SmallRng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ cell)
            }
            None => SmallRng::from_os_rng(),
        };

        (0..num_tasks)
            .map(|_| SmallRng::from_rng(&mut cell_rng))
            .collect()
    }
}
