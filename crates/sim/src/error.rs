// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation errors.
use thiserror::Error;

use pocketodds_cards::DeckError;
use pocketodds_eval::EvalError;

/// Errors returned by the deal engine and the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// More players than a deck can deal to.
    #[error("too many players {0}, at most 10 players fit in a deck")]
    TooManyPlayers(usize),
    /// A showdown needs at least two players.
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),
    /// The number of trials must be positive.
    #[error("number of trials must be positive")]
    NoTrials,
    /// The range of player counts is empty.
    #[error("empty players range")]
    NoPlayerCounts,
    /// A deck invariant was broken while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A hand could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// A simulation worker thread panicked.
    #[error("simulation worker panicked")]
    WorkerPanic,
}
