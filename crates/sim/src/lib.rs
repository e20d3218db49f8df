// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocket Odds showdown simulator.
//!
//! Estimates the probability that a starting hand wins at showdown by dealing
//! random rounds where every player goes to the river. A round is dealt with
//! [deal_round], the hands are compared at showdown, and the outcomes are
//! counted in a [Tally]:
//!
//! ```
//! # use pocketodds_sim::*;
//! # use pocketodds_cards::StartingHand;
//! let sim = Simulator::new(SimConfig {
//!     trials: 1_000,
//!     num_tasks: 2,
//!     seed: Some(1),
//!     ..Default::default()
//! });
//!
//! let aces = "AA".parse::<StartingHand>().unwrap();
//! let p = sim.estimate(aces.hand(), 2).unwrap();
//! assert!(p > 0.7);
//! ```
//!
//! [build_table] runs the simulation for all the 169 starting hands and 2 to
//! 10 players.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod deal;
pub use deal::{MAX_PLAYERS, MIN_PLAYERS, Round, deal_round};

pub mod equity;
pub use equity::{
    Outcome, Scoring, SimConfig, Simulator, Tally, estimate_win_probability, showdown,
};

mod error;
pub use error::SimError;

pub mod table;
pub use table::{ResultTable, Row, build_table, build_table_with};
