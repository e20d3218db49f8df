// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use pocketodds_cards::Card;

use super::{HandRank, HandValue};

/// A value lower than any five cards hand.
pub(super) const LOWEST: HandValue = HandValue {
    rank: HandRank::HighCard,
    tiebreak: [0; 5],
};

const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];
const WHEEL_TIEBREAK: [u8; 5] = [5, 4, 3, 2, 1];

/// Computes the value of a five cards hand.
pub(super) fn eval(cards: &[Card; 5]) -> HandValue {
    let mut values = cards.map(|c| c.rank().value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 15];
    for v in values {
        counts[v as usize] += 1;
    }

    // Most repeated ranks first, then higher ranks first.
    let mut tiebreak = values;
    tiebreak.sort_by_key(|&v| std::cmp::Reverse((counts[v as usize], v)));

    let max_count = counts[tiebreak[0] as usize];
    let distinct = counts.iter().filter(|&&c| c > 0).count();

    let rank = match (max_count, distinct) {
        (4.., _) => HandRank::FourOfAKind,
        (3, 2) => HandRank::FullHouse,
        (3, _) => HandRank::ThreeOfAKind,
        (2, 3) => HandRank::TwoPair,
        (2, _) => HandRank::OnePair,
        _ => {
            let suit = cards[0].suit();
            let is_flush = cards.iter().all(|c| c.suit() == suit);
            let is_wheel = values == WHEEL;
            let is_straight = is_wheel || values[0] - values[4] == 4;

            if is_wheel {
                tiebreak = WHEEL_TIEBREAK;
            }

            match (is_straight, is_flush) {
                (true, true) => HandRank::StraightFlush,
                (false, true) => HandRank::Flush,
                (true, false) => HandRank::Straight,
                (false, false) => HandRank::HighCard,
            }
        }
    };

    HandValue { rank, tiebreak }
}
