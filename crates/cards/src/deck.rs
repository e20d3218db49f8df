// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned by deck and card operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card is not in the deck.
    #[error("card {0} not found in deck")]
    CardNotFound(Card),
    /// Tried to draw from an empty deck.
    #[error("deck is empty")]
    Empty,
    /// A card string could not be parsed.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// A Poker card.
///
/// A card is stored as a single byte identifier in the range `0..52`:
///
/// ```text
///   id = suit * 13 + rank
///   rank = deuce=0,trey=1,four=2,five=3,...,ace=12
///   suit = clubs=0,diamonds=1,hearts=2,spades=3
/// ```
///
/// Two cards with the same rank and suit are the same card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8)
    }

    /// This card unique id in `0..52`.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.0 % 13)
    }

    /// Returns the card bit in a 52 bits cards mask.
    #[inline]
    pub fn mask(&self) -> u64 {
        1 << self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = DeckError;

    /// Parses cards like `AH`, `td`, or `10s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DeckError::InvalidCard(s.to_string());

        let mut chars = s.trim().chars();
        let suit = chars.next_back().ok_or_else(invalid)?;
        let rank = chars.as_str();

        let rank = match rank.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(invalid()),
        };

        let suit = match suit.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(invalid()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The poker value of this rank, from 2 for a deuce to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    fn from_index(idx: u8) -> Rank {
        match idx {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank 0x{:x}", idx),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no poker ordering, the derived `Ord` only exists to sort cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Removes and returns a card chosen uniformly from the remaining cards.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let idx = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(idx))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    ///
    /// Fails if the card has already been removed.
    pub fn remove(&mut self, card: Card) -> Result<(), DeckError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == &card)
            .ok_or(DeckError::CardNotFound(card))?;
        self.cards.swap_remove(pos);
        Ok(())
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Odometer over strictly increasing positions, the last position
        // moves fastest.
        let n = self.cards.len();
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut h = pos.iter().map(|&p| self.cards[p]).collect::<Vec<_>>();

        loop {
            f(&h);

            let mut i = k;
            while i > 0 && pos[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                break;
            }

            pos[i - 1] += 1;
            for j in i..k {
                pos[j] = pos[j - 1] + 1;
            }

            for j in (i - 1)..k {
                h[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::SmallRng;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new_and_shuffled(&mut rng);

        while !deck.is_empty() {
            let card = deck.draw(&mut rng).unwrap();
            assert_eq!(card.id() % 13, card.rank() as u8);
            assert_eq!(card.id() / 13, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(deck.draw(&mut rng), Err(DeckError::Empty));
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }

        assert_eq!(
            "10s".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Spades)
        );
        assert_eq!(
            "ah".parse::<Card>().unwrap(),
            Card::new(Rank::Ace, Suit::Hearts)
        );

        assert!("".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("1H".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);

        assert!(deck.contains(ad));
        deck.remove(ad).unwrap();
        assert!(!deck.contains(ad));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        // Removing twice must not be a silent no-op.
        assert_eq!(deck.remove(ad), Err(DeckError::CardNotFound(ad)));
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }

    #[test]
    fn deck_draw_is_uniform() {
        // Each of the 52 cards should be the first draw about 1/52 of the time.
        const ROUNDS: usize = 52_000;

        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [0usize; Deck::SIZE];
        for _ in 0..ROUNDS {
            let mut deck = Deck::default();
            let card = deck.draw(&mut rng).unwrap();
            counts[card.id() as usize] += 1;
        }

        for count in counts {
            assert!((700..1300).contains(&count), "count={count}");
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    // Goes through 133M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds)).unwrap();
        deck.remove(Card::new(Rank::King, Suit::Diamonds)).unwrap();

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
