// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocket Odds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pocketodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_ne!(ah, kd);
//! ```
//!
//! a [Deck] type for drawing cards without replacement:
//!
//! ```
//! # use pocketodds_cards::{Card, Deck, Rank, Suit};
//! let mut rng = rand::rng();
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Hearts)).unwrap();
//!
//! let card = deck.draw(&mut rng).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//! assert!(!deck.contains(card));
//! ```
//!
//! and the 169 distinct [StartingHand]s:
//!
//! ```
//! # use pocketodds_cards::StartingHand;
//! let hands = StartingHand::all();
//! assert_eq!(hands.len(), 169);
//! assert_eq!(hands[0].to_string(), "AA");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};

mod hand;
pub use hand::{Hand, ParseStartingHandError, StartingHand};
