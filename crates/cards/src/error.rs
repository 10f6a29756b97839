// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors returned when building cards from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// The text is not a rank letter followed by a suit letter.
    #[error("Invalid card '{0}'")]
    InvalidCard(String),
    /// The index is not a card position in `0..52`.
    #[error("Invalid card index {0}")]
    InvalidIndex(u8),
    /// The mask has bits set outside the 52 cards.
    #[error("Invalid cards mask 0x{0:x}")]
    InvalidMask(u64),
    /// Fewer cards than needed were given.
    #[error("Not enough cards, expected {expected} found {found}")]
    NotEnoughCards {
        /// The number of cards needed.
        expected: usize,
        /// The number of cards given.
        found: usize,
    },
}
