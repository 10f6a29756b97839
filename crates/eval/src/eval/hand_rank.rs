// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a poker hand.
///
/// The discriminant is the category strength, it is packed in the high bits
/// of both [HandValue](super::HandValue) and [RankKey](super::RankKey) so it
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pairs.
    TwoPair = 2,
    /// Three of a kind.
    ThreeOfAKind = 3,
    /// Straight.
    Straight = 4,
    /// Flush.
    Flush = 5,
    /// Full house.
    FullHouse = 6,
    /// Four of a kind.
    FourOfAKind = 7,
    /// Straight flush.
    StraightFlush = 8,
}

impl HandRank {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
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

    /// The category strength, 0 for high card up to 8 for straight flush.
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Returns the category with the given ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<HandRank> {
        HandRank::ranks().nth(ordinal as usize)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_strength() {
        for (idx, rank) in HandRank::ranks().enumerate() {
            assert_eq!(rank.ordinal() as usize, idx);
            assert_eq!(HandRank::from_ordinal(idx as u8), Some(rank));
        }

        assert_eq!(HandRank::ranks().count(), HandRank::COUNT);
        assert_eq!(HandRank::from_ordinal(9), None);
        assert!(HandRank::StraightFlush > HandRank::FourOfAKind);
        assert!(HandRank::OnePair > HandRank::HighCard);
    }

    #[test]
    fn labels() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
    }
}
