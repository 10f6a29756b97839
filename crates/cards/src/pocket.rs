// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em hole cards.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, CardSet, CardsError};

/// The two hole cards of a player, the first card has always a rank greater
/// or equal than the second card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pocket {
    first: Card,
    second: Card,
}

impl Pocket {
    /// Creates a pocket from two cards in any order.
    pub fn new(c1: Card, c2: Card) -> Self {
        if c1.rank() < c2.rank() {
            Self {
                first: c2,
                second: c1,
            }
        } else {
            Self {
                first: c1,
                second: c2,
            }
        }
    }

    /// The higher card.
    pub fn first(&self) -> Card {
        self.first
    }

    /// The lower card.
    pub fn second(&self) -> Card {
        self.second
    }

    /// Checks if both cards have the same rank.
    pub fn is_pair(&self) -> bool {
        self.first.rank() == self.second.rank()
    }

    /// Checks if both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.first.suit() == self.second.suit()
    }

    /// The rank distance between the two cards.
    pub fn gap(&self) -> u8 {
        self.first.rank().value() - self.second.rank().value()
    }

    /// Checks if the ranks are adjacent.
    pub fn is_connected(&self) -> bool {
        self.gap() == 1
    }

    /// The two cards, higher first.
    pub fn cards(&self) -> [Card; 2] {
        [self.first, self.second]
    }

    /// The two cards as a set.
    pub fn to_set(&self) -> CardSet {
        CardSet::from(self.first) | CardSet::from(self.second)
    }
}

impl TryFrom<&[Card]> for Pocket {
    type Error = CardsError;

    /// Takes the first two cards, fails with fewer than two cards.
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [c1, c2, ..] => Ok(Pocket::new(*c1, *c2)),
            _ => Err(CardsError::NotEnoughCards {
                expected: 2,
                found: cards.len(),
            }),
        }
    }
}

impl fmt::Display for Pocket {
    /// Starting hand notation, `AK` offsuit, `AKs` suited, and `QQ`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first.rank(), self.second.rank())?;
        if self.is_suited() {
            write!(f, "s")?;
        }
        Ok(())
    }
}
