// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{CardSet, CardsError};

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// A card is stored as its position in the 52 bits space used by [CardSet],
/// each rank takes a nibble and the suit selects the bit within the nibble:
///
/// ```text
///   bit = rank * 4 + suit
///   rank = deuce=0,trey=1,four=2,five=3,...,ace=12
///   suit = clubs=0,diamonds=1,hearts=2,spades=3
///
///   +----+----+-----+----+----+
///   |  A |  K | ... |  3 |  2 |
///   |shdc|shdc| ... |shdc|shdc|
///   +----+----+-----+----+----+
///    51                      0
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) * 4 + suit as u8)
    }

    /// Creates a card from its bit index, returns `None` if the index is not
    /// in `0..52`.
    pub const fn from_index(index: u8) -> Option<Card> {
        if (index as usize) < Deck::SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// This card unique index in `0..52`.
    #[inline]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// The single bit mask for this card.
    #[inline]
    pub const fn mask(&self) -> u64 {
        1 << self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 >> 2 {
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
            _ => panic!("Invalid rank 0x{:x}", self.0),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Card::new(Rank::Deuce, Suit::Clubs)
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

impl TryFrom<u8> for Card {
    type Error = CardsError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Card::from_index(index).ok_or(CardsError::InvalidIndex(index))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl FromStr for Card {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => match (Rank::from_char(r), Suit::from_char(u)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(CardsError::InvalidCard(s.to_string())),
            },
            _ => Err(CardsError::InvalidCard(s.to_string())),
        }
    }
}

/// Card rank.
///
/// The discriminant is the rank nibble position in a [CardSet], the
/// conventional 2 to 14 number is given by [Rank::value].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey = 1,
    /// Four
    Four = 2,
    /// Five
    Five = 3,
    /// Six
    Six = 4,
    /// Seven
    Seven = 5,
    /// Eight
    Eight = 6,
    /// Nine
    Nine = 7,
    /// Ten
    Ten = 8,
    /// Jack
    Jack = 9,
    /// Queen
    Queen = 10,
    /// King
    King = 11,
    /// Ace
    Ace = 12,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank face value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Parses a rank letter, `T` for ten and digits for ranks below ten.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
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
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit letter in either case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
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

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The cards left in the deck as a set.
    pub fn to_set(&self) -> CardSet {
        self.cards.iter().copied().collect()
    }

    /// Calls the `f` closure for each k-cards set.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(CardSet),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Each level ORs its card into the mask of the level above.
        let n = self.cards.len();
        let m = |idx: usize| self.cards[idx].mask();

        for c1 in 0..n {
            let h1 = m(c1);

            for c2 in (c1 + 1)..n {
                let h2 = h1 | m(c2);

                if k == 2 {
                    f(CardSet::from_mask(h2));
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    let h3 = h2 | m(c3);

                    if k == 3 {
                        f(CardSet::from_mask(h3));
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        let h4 = h3 | m(c4);

                        if k == 4 {
                            f(CardSet::from_mask(h4));
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            let h5 = h4 | m(c5);

                            if k == 5 {
                                f(CardSet::from_mask(h5));
                                continue;
                            }

                            for c6 in (c5 + 1)..n {
                                let h6 = h5 | m(c6);

                                if k == 6 {
                                    f(CardSet::from_mask(h6));
                                    continue;
                                }

                                for c7 in (c6 + 1)..n {
                                    f(CardSet::from_mask(h6 | m(c7)));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Calls the `f` closure for `samples` random k-cards sets.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(CardSet),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut rng = SmallRng::from_os_rng();
        for _ in 0..samples {
            let set = self.cards.choose_multiple(&mut rng, k).copied().collect();
            f(set);
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

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.index() >> 2, card.rank() as u8);
            assert_eq!(card.index() & 0x3, card.suit() as u8);
            assert_eq!(card.mask(), 1 << card.index());
            assert_eq!(Card::from_index(card.index()), Some(card));
            cards.insert(card.index());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());

        let c2 = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(c2.mask(), 0x1);

        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(ah.index(), 50);

        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(as_.mask(), 1 << 51);

        assert_eq!(Card::from_index(52), None);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::ranks().count(), Rank::COUNT);
        assert_eq!(Rank::ranks().next_back(), Some(Rank::Ace));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(format!("{c:?}"), "Card(KD)");

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
    fn card_from_str() {
        assert_eq!("Kd".parse::<Card>(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("TS".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("2c".parse::<Card>(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        for s in ["", "K", "Kx", "1s", "Kdd"] {
            assert_eq!(
                s.parse::<Card>(),
                Err(CardsError::InvalidCard(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Queen, Suit::Hearts);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, c.index().to_string());
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
    }

    #[test]
    fn card_serde_rejects_invalid_index() {
        assert!(serde_json::from_str::<Card>("51").is_ok());
        assert!(serde_json::from_str::<Card>("52").is_err());
        assert!(serde_json::from_str::<Card>("60").is_err());
        assert!(serde_json::from_str::<Card>("200").is_err());
        assert_eq!(Card::try_from(60), Err(CardsError::InvalidIndex(60)));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards);
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards);
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards);
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
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        deck.remove(ad);
        deck.remove(kd);
        assert_eq!(deck.count(), 50);
        assert!(!deck.to_set().contains(ad));

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(ad) && !cards.contains(kd));
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_sample() {
        let mut deck = Deck::default();
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        deck.remove(ah);

        let mut count = 0;
        deck.sample(1_000, 7, |cards| {
            assert_eq!(cards.len(), 7);
            assert!(!cards.contains(ah));
            count += 1;
        });
        assert_eq!(count, 1_000);
    }
}
