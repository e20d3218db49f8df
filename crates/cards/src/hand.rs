// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hole cards and starting hands.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// A player two private cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 2]);

impl Hand {
    /// Creates a hand from two cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self([c1, c2])
    }

    /// The hand cards.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// Both cards have the same rank.
    pub fn is_pair(&self) -> bool {
        self.0[0].rank() == self.0[1].rank()
    }

    /// Both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.0[0].suit() == self.0[1].suit()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Error parsing a starting hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid starting hand '{0}'")]
pub struct ParseStartingHandError(String);

/// One of the 169 strategically distinct starting hands.
///
/// Two hands are in the same class when they only differ by a permutation of
/// suits, for example `AH KH` and `AS KS` are both `AKs`. Serialized as
/// its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StartingHand {
    /// A pocket pair.
    Pair(Rank),
    /// Two cards of the same suit, high rank first.
    Suited(Rank, Rank),
    /// Two cards of different suits and ranks, high rank first.
    Offsuit(Rank, Rank),
}

impl StartingHand {
    /// The number of distinct starting hands.
    pub const COUNT: usize = 169;

    /// Returns all the starting hands, each exactly once.
    ///
    /// Hands are ordered by high rank then low rank from aces down, with the
    /// pair first, then the suited and offsuit hands for each rank pair.
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(Self::COUNT);

        for high in Rank::ranks().rev() {
            hands.push(StartingHand::Pair(high));
            for low in Rank::ranks().rev().filter(|&r| r < high) {
                hands.push(StartingHand::Suited(high, low));
                hands.push(StartingHand::Offsuit(high, low));
            }
        }

        hands
    }

    /// A concrete hand for this class.
    ///
    /// The first card is always a heart, the second a spade unless the hand
    /// is suited.
    pub fn hand(&self) -> Hand {
        let (high, low) = self.ranks();
        let low_suit = match self {
            StartingHand::Suited(..) => Suit::Hearts,
            _ => Suit::Spades,
        };

        Hand::new(Card::new(high, Suit::Hearts), Card::new(low, low_suit))
    }

    /// The high and low ranks of this hand.
    pub fn ranks(&self) -> (Rank, Rank) {
        match *self {
            StartingHand::Pair(r) => (r, r),
            StartingHand::Suited(h, l) | StartingHand::Offsuit(h, l) => (h, l),
        }
    }

    /// The number of concrete two cards hands in this class.
    pub fn combos(&self) -> usize {
        match self {
            StartingHand::Pair(_) => 6,
            StartingHand::Suited(..) => 4,
            StartingHand::Offsuit(..) => 12,
        }
    }
}

impl From<Hand> for StartingHand {
    fn from(hand: Hand) -> Self {
        let [c1, c2] = hand.cards();
        let (high, low) = if c1.rank() >= c2.rank() {
            (c1.rank(), c2.rank())
        } else {
            (c2.rank(), c1.rank())
        };

        if hand.is_pair() {
            StartingHand::Pair(high)
        } else if hand.is_suited() {
            StartingHand::Suited(high, low)
        } else {
            StartingHand::Offsuit(high, low)
        }
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartingHand::Pair(r) => write!(f, "{r}{r}"),
            StartingHand::Suited(h, l) => write!(f, "{h}{l}s"),
            StartingHand::Offsuit(h, l) => write!(f, "{h}{l}o"),
        }
    }
}

impl FromStr for StartingHand {
    type Err = ParseStartingHandError;

    /// Parses hands like `QQ`, `AKs`, or `72o`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseStartingHandError(s.to_string());

        let parse_rank = |c: char| {
            // Parse the rank using a card of any suit.
            format!("{c}C").parse::<Card>().map(|c| c.rank()).ok()
        };

        let chars = s.trim().chars().collect::<Vec<_>>();
        let (r1, r2) = match chars.as_slice() {
            [r1, r2] | [r1, r2, _] => (
                parse_rank(*r1).ok_or_else(invalid)?,
                parse_rank(*r2).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };

        let (high, low) = (r1.max(r2), r1.min(r2));
        match chars.get(2).map(|c| c.to_ascii_lowercase()) {
            None if high == low => Ok(StartingHand::Pair(high)),
            Some('s') if high != low => Ok(StartingHand::Suited(high, low)),
            Some('o') if high != low => Ok(StartingHand::Offsuit(high, low)),
            _ => Err(invalid()),
        }
    }
}

impl From<StartingHand> for String {
    fn from(hand: StartingHand) -> Self {
        hand.to_string()
    }
}

impl TryFrom<String> for StartingHand {
    type Error = ParseStartingHandError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    use crate::Deck;

    #[test]
    fn all_starting_hands() {
        let hands = StartingHand::all();
        assert_eq!(hands.len(), StartingHand::COUNT);

        let unique = hands.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), StartingHand::COUNT);

        let pairs = hands.iter().filter(|h| matches!(h, StartingHand::Pair(_))).count();
        let suited = hands.iter().filter(|h| matches!(h, StartingHand::Suited(..))).count();
        let offsuit = hands.iter().filter(|h| matches!(h, StartingHand::Offsuit(..))).count();
        assert_eq!(pairs, 13);
        assert_eq!(suited, 78);
        assert_eq!(offsuit, 78);

        assert_eq!(hands[0], StartingHand::Pair(Rank::Ace));
        assert_eq!(hands[1], StartingHand::Suited(Rank::Ace, Rank::King));
        assert_eq!(hands[2], StartingHand::Offsuit(Rank::Ace, Rank::King));
        assert_eq!(hands[168], StartingHand::Pair(Rank::Deuce));
    }

    #[test]
    fn starting_hand_classes_cover_all_hands() {
        // Each of the 1326 two cards hands falls in exactly one class.
        let mut total = 0;
        let mut classes = HashSet::default();
        Deck::default().for_each(2, |cards| {
            classes.insert(StartingHand::from(Hand::new(cards[0], cards[1])));
            total += 1;
        });

        assert_eq!(total, 1_326);
        assert_eq!(classes.len(), StartingHand::COUNT);

        let combos = StartingHand::all().iter().map(|h| h.combos()).sum::<usize>();
        assert_eq!(combos, 1_326);
    }

    #[test]
    fn concrete_hand_roundtrip() {
        for sh in StartingHand::all() {
            let hand = sh.hand();
            let [c1, c2] = hand.cards();
            assert_ne!(c1, c2);
            assert_eq!(StartingHand::from(hand), sh);
            assert_eq!(c1.suit(), Suit::Hearts);
            assert_eq!((c1.rank(), c2.rank()), sh.ranks());
            assert_eq!(hand.is_pair(), matches!(sh, StartingHand::Pair(_)));
            assert_eq!(hand.is_suited(), matches!(sh, StartingHand::Suited(..)));
        }
    }

    #[test]
    fn hand_pairs() {
        let hand = |c1: &str, c2: &str| Hand::new(c1.parse().unwrap(), c2.parse().unwrap());
        assert!(hand("7C", "7D").is_pair());
        assert!(!hand("7C", "8C").is_pair());
        assert_eq!(
            StartingHand::from(hand("7C", "7D")),
            StartingHand::Pair(Rank::Seven)
        );
        assert_eq!(
            StartingHand::from(hand("2S", "KS")),
            StartingHand::Suited(Rank::King, Rank::Deuce)
        );
        assert_eq!(
            StartingHand::Offsuit(Rank::Jack, Rank::Nine).ranks(),
            (Rank::Jack, Rank::Nine)
        );
    }

    #[test]
    fn starting_hand_json() {
        let hands = vec![
            StartingHand::Pair(Rank::Ace),
            StartingHand::Suited(Rank::King, Rank::Queen),
            StartingHand::Offsuit(Rank::Seven, Rank::Deuce),
        ];

        let json = serde_json::to_string(&hands).unwrap();
        assert_eq!(json, r#"["AA","KQs","72o"]"#);

        let parsed = serde_json::from_str::<Vec<StartingHand>>(&json).unwrap();
        assert_eq!(parsed, hands);

        assert!(serde_json::from_str::<StartingHand>(r#""AKx""#).is_err());
    }

    #[test]
    fn starting_hand_strings() {
        for sh in StartingHand::all() {
            assert_eq!(sh.to_string().parse::<StartingHand>().unwrap(), sh);
        }

        assert_eq!(StartingHand::Pair(Rank::Queen).to_string(), "QQ");
        assert_eq!(
            StartingHand::Suited(Rank::Ace, Rank::King).to_string(),
            "AKs"
        );
        assert_eq!(
            "27o".parse::<StartingHand>().unwrap(),
            StartingHand::Offsuit(Rank::Seven, Rank::Deuce)
        );

        assert!("AA s".parse::<StartingHand>().is_err());
        assert!("AAs".parse::<StartingHand>().is_err());
        assert!("AK".parse::<StartingHand>().is_err());
        assert!("AKx".parse::<StartingHand>().is_err());
        assert!("A".parse::<StartingHand>().is_err());
    }
}
