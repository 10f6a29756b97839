// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Bluff Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use bluff_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [CardSet] that stores up to 52 cards in a single word, and a [Deck] type
//! for shuffling, sampling, and iterating cards sets.
//!
//! For example to iterate through all 7 cards sets:
//!
//! ```no_run
//! # use bluff_cards::Deck;
//! // Iterate through all 7 cards sets (133M sets).
//! let mut counter = 0;
//! Deck::default().for_each(7, |set| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
//!
//! to sample 10 random 5-cards sets:
//!
//! ```
//! # use bluff_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |set| {
//!     assert_eq!(set.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling and iteration with
//! a given number of tasks, the closure `task_id` can be used to store per task
//! data to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use bluff_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 7, |task_id, set| {
//!     assert_eq!(set.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 133_784_560);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card_set;
pub use card_set::{CardSet, Iter};

mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::CardsError;

mod parse;
pub use parse::parse_cards;

mod pocket;
pub use pocket::Pocket;
