// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals a round of hold'em.
use rand::Rng;

use pocketodds_cards::{Card, Deck, Hand};

use crate::SimError;

/// The minimum number of players in a round.
pub const MIN_PLAYERS: usize = 2;

/// The maximum number of players that a deck can deal to.
pub const MAX_PLAYERS: usize = 10;

/// The number of community cards.
pub const BOARD_SIZE: usize = 5;

/// The number of burned cards, one before each street.
pub const BURN_SIZE: usize = 3;

/// The cards dealt in a round.
#[derive(Debug, Clone)]
pub struct Round {
    /// The players hands, the first is the hero hand.
    pub players: Vec<Hand>,
    /// The community cards.
    pub board: [Card; BOARD_SIZE],
    /// The cards burned before the flop, turn, and river.
    pub burned: [Card; BURN_SIZE],
    /// The cards left in the deck.
    pub deck: Deck,
}

impl Round {
    /// The hero hand.
    pub fn hero(&self) -> Hand {
        self.players[0]
    }

    /// The 7 cards of a player made of the player hand and the board.
    pub fn player_cards(&self, player: usize) -> Option<[Card; 7]> {
        self.players
            .get(player)
            .map(|hand| seven_cards(*hand, &self.board))
    }
}

/// Combines a hand and the board.
pub fn seven_cards(hand: Hand, board: &[Card; BOARD_SIZE]) -> [Card; 7] {
    let [c1, c2] = hand.cards();
    let mut cards = [c1; 7];
    cards[1] = c2;
    cards[2..].copy_from_slice(board);
    cards
}

/// Checks the number of players can be dealt from a deck.
pub fn check_players(num_players: usize) -> Result<(), SimError> {
    if num_players < MIN_PLAYERS {
        Err(SimError::TooFewPlayers(num_players))
    } else if num_players > MAX_PLAYERS {
        Err(SimError::TooManyPlayers(num_players))
    } else {
        Ok(())
    }
}

/// Deals a round to `num_players` players where the first player holds the
/// `hero` hand.
///
/// Each opponent gets two random cards, then the board is dealt burning a
/// card before the flop, the turn, and the river.
pub fn deal_round<R: Rng>(num_players: usize, hero: Hand, rng: &mut R) -> Result<Round, SimError> {
    check_players(num_players)?;

    let mut deck = Deck::default();
    for card in hero.cards() {
        deck.remove(card)?;
    }

    let mut players = Vec::with_capacity(num_players);
    players.push(hero);
    for _ in 1..num_players {
        let c1 = deck.draw(rng)?;
        let c2 = deck.draw(rng)?;
        players.push(Hand::new(c1, c2));
    }

    let burn_flop = deck.draw(rng)?;
    let [f1, f2, f3] = [deck.draw(rng)?, deck.draw(rng)?, deck.draw(rng)?];
    let burn_turn = deck.draw(rng)?;
    let turn = deck.draw(rng)?;
    let burn_river = deck.draw(rng)?;
    let river = deck.draw(rng)?;

    let board = [f1, f2, f3, turn, river];
    let burned = [burn_flop, burn_turn, burn_river];

    Ok(Round {
        players,
        board,
        burned,
        deck,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::SmallRng};

    use pocketodds_cards::{Rank, StartingHand};

    fn hero() -> Hand {
        Hand::new("AH".parse().unwrap(), "KS".parse().unwrap())
    }

    #[test]
    fn deal_uses_all_cards_once() {
        let mut rng = SmallRng::seed_from_u64(11);

        for num_players in MIN_PLAYERS..=MAX_PLAYERS {
            for _ in 0..100 {
                let round = deal_round(num_players, hero(), &mut rng).unwrap();
                assert_eq!(round.players.len(), num_players);
                assert_eq!(round.hero(), hero());

                let dealt = round
                    .players
                    .iter()
                    .flat_map(|h| h.cards())
                    .chain(round.board)
                    .chain(round.burned)
                    .collect::<Vec<_>>();
                assert_eq!(dealt.len(), 2 * num_players + BOARD_SIZE + BURN_SIZE);
                assert_eq!(round.deck.count() + dealt.len(), Deck::SIZE);

                let all = dealt
                    .iter()
                    .chain(round.deck.cards())
                    .copied()
                    .collect::<HashSet<_>>();
                assert_eq!(all.len(), Deck::SIZE);
            }
        }
    }

    #[test]
    fn full_table_leaves_cards() {
        let mut rng = SmallRng::seed_from_u64(3);
        let round = deal_round(MAX_PLAYERS, hero(), &mut rng).unwrap();
        assert_eq!(round.deck.count(), 24);
    }

    #[test]
    fn player_counts() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(
            deal_round(11, hero(), &mut rng).unwrap_err(),
            SimError::TooManyPlayers(11)
        );
        assert_eq!(
            deal_round(1, hero(), &mut rng).unwrap_err(),
            SimError::TooFewPlayers(1)
        );
        assert!(deal_round(2, hero(), &mut rng).is_ok());
    }

    #[test]
    fn hero_with_same_card_twice() {
        let mut rng = SmallRng::seed_from_u64(3);
        let ah = "AH".parse().unwrap();
        let err = deal_round(3, Hand::new(ah, ah), &mut rng).unwrap_err();
        assert_eq!(err, SimError::Deck(pocketodds_cards::DeckError::CardNotFound(ah)));
    }

    #[test]
    fn player_cards() {
        let mut rng = SmallRng::seed_from_u64(5);
        let hand = StartingHand::Suited(Rank::Queen, Rank::Jack).hand();
        let round = deal_round(4, hand, &mut rng).unwrap();

        let cards = round.player_cards(0).unwrap();
        assert_eq!(cards[..2], hand.cards());
        assert_eq!(cards[2..], round.board);
        assert!(round.player_cards(4).is_none());
    }

    #[test]
    fn burn_before_each_street() {
        let mut rng = SmallRng::seed_from_u64(5);
        let round = deal_round(3, hero(), &mut rng).unwrap();

        // Replay the same draws from a deck without the hero cards.
        let mut rng = SmallRng::seed_from_u64(5);
        let mut deck = Deck::default();
        for card in hero().cards() {
            deck.remove(card).unwrap();
        }
        let mut draws = (0..12)
            .map(|_| deck.draw(&mut rng).unwrap())
            .collect::<Vec<_>>();

        let streets = draws.split_off(4);
        assert_eq!(round.players[1], Hand::new(draws[0], draws[1]));
        assert_eq!(round.players[2], Hand::new(draws[2], draws[3]));
        assert_eq!(round.burned, [streets[0], streets[4], streets[6]]);
        assert_eq!(
            round.board,
            [streets[1], streets[2], streets[3], streets[5], streets[7]]
        );
        assert_eq!(round.deck.cards(), deck.cards());
    }
}
