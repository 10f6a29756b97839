// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! A set of cards stored in a single word.
use serde::{Deserialize, Serialize};
use std::{fmt, iter::FusedIterator, ops};

use crate::{Card, CardsError, Rank, Suit};

/// A set of up to 52 cards.
///
/// Bit `rank * 4 + suit` is set when the card is in the set (see [Card] for
/// the layout), so each rank owns a nibble and the bits of a suit are spaced
/// four positions apart. The set is a plain value, copying it is free and the
/// set operations never allocate.
///
/// ```
/// # use bluff_cards::{Card, CardSet, Rank, Suit};
/// let ah = Card::new(Rank::Ace, Suit::Hearts);
/// let td = Card::new(Rank::Ten, Suit::Diamonds);
/// let set = CardSet::from([td, ah].as_slice());
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![ah, td]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CardSet(u64);

impl CardSet {
    /// The bits used by the 52 cards.
    pub const DECK_MASK: u64 = (1 << 52) - 1;

    /// The bits of a suit plane, one bit per rank at the lowest suit position.
    pub const SUIT_MASK: u64 = 0x1_1111_1111_1111;

    /// The bits of the four cards of a rank at the lowest rank position.
    pub const RANK_MASK: u64 = 0xF;

    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a set from a raw mask, bits outside the 52 cards are dropped.
    pub const fn from_mask(mask: u64) -> Self {
        Self(mask & Self::DECK_MASK)
    }

    /// The raw mask.
    #[inline]
    pub const fn mask(&self) -> u64 {
        self.0
    }

    /// Checks if a card is in the set.
    #[inline]
    pub const fn contains(&self, card: Card) -> bool {
        self.0 & card.mask() != 0
    }

    /// Checks if all cards in other are in this set.
    #[inline]
    pub const fn contains_all(&self, other: CardSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds a card to the set, adding a card already in the set is a no-op.
    #[inline]
    pub fn add(&mut self, card: Card) {
        self.0 |= card.mask();
    }

    /// Adds all the cards to the set.
    pub fn add_all<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.add(card);
        }
    }

    /// Removes a card from the set.
    #[inline]
    pub fn remove(&mut self, card: Card) {
        self.0 &= !card.mask();
    }

    /// Adds all cards in other to this set.
    #[inline]
    pub fn union(&mut self, other: CardSet) {
        self.0 |= other.0;
    }

    /// Keeps only the cards that are also in other.
    #[inline]
    pub fn intersect(&mut self, other: CardSet) {
        self.0 &= other.0;
    }

    /// Removes all cards in other from this set.
    #[inline]
    pub fn subtract(&mut self, other: CardSet) {
        self.0 &= !other.0;
    }

    /// The number of cards in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The cards of the given rank in this set.
    #[inline]
    pub const fn of_rank(&self, rank: Rank) -> CardSet {
        CardSet(self.0 & (Self::RANK_MASK << (rank as u32 * 4)))
    }

    /// The cards of the given suit in this set.
    #[inline]
    pub const fn of_suit(&self, suit: Suit) -> CardSet {
        CardSet(self.0 & (Self::SUIT_MASK << suit as u32))
    }

    /// The highest card in the set.
    #[inline]
    pub fn highest(&self) -> Option<Card> {
        self.iter().next()
    }

    /// Iterates the cards from the highest rank to the lowest, cards of the
    /// same rank are ordered spades, hearts, diamonds, clubs.
    #[inline]
    pub const fn iter(&self) -> Iter {
        Iter(self.0)
    }

    /// Iterates at most `max` cards in the same order as [CardSet::iter].
    #[inline]
    pub fn first_n(&self, max: usize) -> std::iter::Take<Iter> {
        self.iter().take(max)
    }

    /// The cards in the set, highest rank first.
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

/// Iterator over the cards of a [CardSet], highest first.
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Card;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let index = 63 - self.0.leading_zeros();
        self.0 &= !(1 << index);
        Card::from_index(index as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &CardSet {
    type Item = Card;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        set.add_all(iter);
        set
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl From<&[Card]> for CardSet {
    fn from(cards: &[Card]) -> Self {
        cards.iter().collect()
    }
}

impl TryFrom<u64> for CardSet {
    type Error = CardsError;

    /// Fails if the mask has bits outside the 52 cards.
    fn try_from(mask: u64) -> Result<Self, Self::Error> {
        if mask & !Self::DECK_MASK == 0 {
            Ok(CardSet(mask))
        } else {
            Err(CardsError::InvalidMask(mask))
        }
    }
}

impl From<CardSet> for u64 {
    fn from(set: CardSet) -> u64 {
        set.0
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        CardSet(card.mask())
    }
}

impl ops::BitOr for CardSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        CardSet(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.union(rhs);
    }
}

impl ops::BitAnd for CardSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        CardSet(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for CardSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersect(rhs);
    }
}

impl ops::Sub for CardSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        CardSet(self.0 & !rhs.0)
    }
}

impl ops::SubAssign for CardSet {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract(rhs);
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, card) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
