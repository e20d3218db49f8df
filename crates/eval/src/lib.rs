// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocket Odds hand evaluator.
//!
//! Poker hand evaluator for 7 cards hands. Each hand is evaluated by scoring
//! all its 21 five cards subsets and keeping the best, the resulting
//! [HandValue] has a total order so that two hands can be compared directly,
//! equal values are a tie.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use pocketodds_eval::*;
//! let board = ["2H", "4H", "6H", "6S", "AS"];
//! let cards = ["TH", "3H"]
//!     .into_iter()
//!     .chain(board)
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let value = HandValue::eval(&cards).unwrap();
//! assert_eq!(value.rank(), HandRank::Flush);
//! assert_eq!(value.tiebreak(), [10, 6, 4, 3, 2]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};

// Reexport cards types.
pub use pocketodds_cards::{Card, Deck, Rank, Suit};
