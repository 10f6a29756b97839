// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Bluff Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands, the cards are stored in a
//! [CardSet] bit mask and the evaluators find the hand category with bitwise
//! operations on the suits planes.
//!
//! To get the hand category and its five cards use [HandValue]:
//!
//! ```
//! # use bluff_eval::*;
//! let cards = parse_cards("As Ad Kh Kc 7s 2d 3c").unwrap();
//! let hand = HandValue::eval(&cards).unwrap();
//! assert_eq!(hand.rank(), HandRank::TwoPair);
//! assert_eq!(hand.to_string(), format!("Two Pairs [AS,AD,KH,KC,7S] ({})", 0x2EEDD7));
//! ```
//!
//! when only comparing hands use the faster [RankKey]:
//!
//! ```
//! # use bluff_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let k1 = RankKey::eval(&cards[0..5]).unwrap();
//! let k2 = RankKey::eval(&cards[5..]).unwrap();
//! assert_eq!(k1.rank(), HandRank::StraightFlush);
//! assert!(k2 > k1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, RankKey, evaluate, fast_evaluate};

// Reexport cards types.
pub use bluff_cards::{Card, CardSet, CardsError, Deck, Pocket, Rank, Suit, parse_cards};
