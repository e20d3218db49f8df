// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 7 cards hand is evaluated by scoring each of its 21 five cards subsets
//! and keeping the best one. A five cards hand is classified by the count of
//! cards for each rank, and by checking for straights and flushes.
//!
//! It provides a [HandValue::eval] method that computes a hand value without
//! extracting the best hand, useful for computing odds and other stats, and
//! [HandValue::eval_with_best_hand] that also returns the five best cards,
//! useful to show a winning hand.
use std::fmt;
use thiserror::Error;

use pocketodds_cards::Card;

mod five;

/// Errors returned by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The evaluator needs exactly 7 cards.
    #[error("expected 7 cards, got {0}")]
    InvalidInput(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// A hand category.
///
/// Categories are numbered as in the output tables, 8 is not used so that a
/// straight flush is always 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pair.
    TwoPair = 2,
    /// Three of a kind.
    ThreeOfAKind = 3,
    /// Five consecutive ranks.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of a kind and a pair.
    FullHouse = 6,
    /// Four of a kind.
    FourOfAKind = 7,
    /// Straight with all cards of the same suit.
    StraightFlush = 9,
}

impl HandRank {
    /// Returns all hand ranks from lowest to highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The hand rank name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 5 cards positions for each of the 21 subsets of a 7 cards hand.
const SUBSETS: [[usize; 5]; 21] = make_subsets();

const fn make_subsets() -> [[usize; 5]; 21] {
    let mut t = [[0usize; 5]; 21];
    let mut n = 0;

    // Each subset leaves out two cards at positions i < j.
    let mut i = 0;
    while i < 7 {
        let mut j = i + 1;
        while j < 7 {
            let mut k = 0;
            let mut c = 0;
            while c < 7 {
                if c != i && c != j {
                    t[n][k] = c;
                    k += 1;
                }
                c += 1;
            }

            n += 1;
            j += 1;
        }

        i += 1;
    }

    t
}

/// The value of a poker hand.
///
/// Values compare by category first and then by tiebreak ranks position by
/// position, two hands with equal values are a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: [u8; 5],
}

impl HandValue {
    /// The number of cards in an evaluated hand.
    pub const HAND_SIZE: usize = 7;

    /// Evaluates a 7 cards hand.
    ///
    /// Fails if there are not exactly 7 distinct cards.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        let cards = check_cards(cards)?;

        Ok(SUBSETS
            .iter()
            .map(|s| five::eval(&s.map(|pos| cards[pos])))
            .fold(five::LOWEST, HandValue::max))
    }

    /// Evaluates a 7 cards hand and returns the best 5 cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; 5]), EvalError> {
        let cards = check_cards(cards)?;

        let mut best_value = five::LOWEST;
        let mut best_hand = [cards[0]; 5];
        for subset in &SUBSETS {
            let hand = subset.map(|pos| cards[pos]);
            let value = five::eval(&hand);
            if value > best_value {
                best_value = value;
                best_hand = hand;
            }
        }

        Ok((best_value, best_hand))
    }

    /// Evaluates a 5 cards hand.
    pub fn eval5(cards: &[Card; 5]) -> Self {
        five::eval(cards)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The category number.
    pub fn category(&self) -> u8 {
        self.rank as u8
    }

    /// The ranks used to break ties from the most significant, an ace is 14
    /// unless it plays low in a straight where it is 1.
    pub fn tiebreak(&self) -> [u8; 5] {
        self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.rank)?;
        for v in self.tiebreak {
            let c = match v {
                1 | 14 => 'A',
                13 => 'K',
                12 => 'Q',
                11 => 'J',
                10 => 'T',
                v => char::from(b'0' + v),
            };
            write!(f, "{c}")?;
        }

        Ok(())
    }
}

fn check_cards(cards: &[Card]) -> Result<[Card; HandValue::HAND_SIZE], EvalError> {
    let cards: [Card; HandValue::HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidInput(cards.len()))?;

    let mut mask = 0u64;
    for card in cards {
        if mask & card.mask() != 0 {
            return Err(EvalError::DuplicateCard(card));
        }

        mask |= card.mask();
    }

    Ok(cards)
}
