// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Both evaluators work on a [CardSet] of 5 or more cards and check the hand
//! categories from the straight flush down to the high card, stopping at the
//! first match.
//!
//! [evaluate] computes a [HandValue] with the hand category and the five best
//! cards, useful for UIs to show a winning hand, while [fast_evaluate] works
//! on the suits bit planes without building cards and returns a [RankKey],
//! useful for computing odds and other stats over millions of hands.
//!
//! Both results order hands the same way, a higher value is a better hand,
//! but their bit layouts differ so a [HandValue] must only be compared with
//! another [HandValue] and a [RankKey] with another [RankKey].
use thiserror::Error;

use bluff_cards::CardSet;

mod encoding;

mod fast;
pub use fast::{RankKey, fast_evaluate};

mod full;
pub use full::{HandValue, evaluate};

mod hand_rank;
pub use hand_rank::HandRank;

/// The minimum number of cards for an evaluation.
pub const MIN_CARDS: usize = 5;

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The set has fewer than [MIN_CARDS] cards.
    #[error("Hand evaluation needs at least 5 cards, found {found}")]
    TooFewCards {
        /// The number of cards in the set.
        found: usize,
    },
    /// The raw key has no valid category or sets bits outside the digits.
    #[error("Invalid rank key 0x{0:08x}")]
    InvalidKey(u32),
}

#[inline]
fn check_len(cards: &CardSet) -> Result<(), EvalError> {
    let found = cards.len();
    if found < MIN_CARDS {
        Err(EvalError::TooFewCards { found })
    } else {
        Ok(())
    }
}
