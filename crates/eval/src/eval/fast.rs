// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation without cards extraction.
use serde::{Deserialize, Serialize};
use std::fmt;

use bluff_cards::{Card, CardSet};

use super::{
    EvalError, HandRank, check_len,
    encoding::{
        DIGITS_BITS, STRAIGHT_MASK, STRAIGHT_WINDOWS, SUIT_MASK, WHEEL_DIGITS, WHEEL_MASK,
        encode_ranks, top_bit,
    },
};

/// Bit position of the category in a [RankKey].
const RANK_SHIFT: u32 = 24;

/// The rank digits of a [RankKey].
const DIGITS_MASK: u32 = (1 << DIGITS_BITS) - 1;

/// A packed hand strength returned by [fast_evaluate].
///
/// The category takes the high byte and the five rank digits the low 20
/// bits, a higher key is a better hand:
///
/// ```text
///   +--------+--------+--------+--------+
///   |cccccccc|xxxxaaaa|bbbbdddd|eeeeffff|
///   +--------+--------+--------+--------+
///   c = category (high card=0,...,straight flush=8)
///   a..f = rank value (deuce=2,...,ace=14), the rank of the category cards
///          is repeated once for each card
/// ```
///
/// Keys are only comparable with other keys, they are not compatible with
/// [HandValue](super::HandValue) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RankKey(u32);

impl RankKey {
    /// Evaluates a 5 or more cards slice, duplicated cards count once.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        fast_evaluate(&CardSet::from(cards))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        let ordinal = (self.0 >> RANK_SHIFT) as u8;
        // Keys are built by the evaluator or validated by `try_from`.
        HandRank::from_ordinal(ordinal).unwrap_or(HandRank::HighCard)
    }

    /// The five rank digits.
    pub fn digits(&self) -> u32 {
        self.0 & DIGITS_MASK
    }

    /// The raw key.
    pub fn key(&self) -> u32 {
        self.0
    }

    #[inline]
    fn new(rank: HandRank, digits: u32) -> Self {
        Self(((rank as u32) << RANK_SHIFT) | digits)
    }
}

impl TryFrom<u32> for RankKey {
    type Error = EvalError;

    fn try_from(key: u32) -> Result<Self, Self::Error> {
        let ordinal = (key >> RANK_SHIFT) as u8;
        let reserved = key & !(DIGITS_MASK | (0xFF << RANK_SHIFT));
        if reserved == 0 && HandRank::from_ordinal(ordinal).is_some() {
            Ok(Self(key))
        } else {
            Err(EvalError::InvalidKey(key))
        }
    }
}

impl From<RankKey> for u32 {
    fn from(key: RankKey) -> u32 {
        key.0
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:05X}", self.rank(), self.digits())
    }
}

/// Repeats a rank digit `n` times.
#[inline]
fn repeat(digit: u32, n: u32) -> u32 {
    (0..n).fold(0, |acc, _| (acc << 4) | digit)
}

/// Evaluates a set of 5 or more cards to a [RankKey].
///
/// Runs the same categories checks as [evaluate](super::evaluate) on the
/// suit planes only, without building cards. Fails if the set has fewer
/// than 5 cards.
pub fn fast_evaluate(cards: &CardSet) -> Result<RankKey, EvalError> {
    check_len(cards)?;

    let mask = cards.mask();
    let clubs = mask & SUIT_MASK;
    let diamonds = (mask >> 1) & SUIT_MASK;
    let hearts = (mask >> 2) & SUIT_MASK;
    let spades = (mask >> 3) & SUIT_MASK;
    let planes = [clubs, diamonds, hearts, spades];
    let ranks = clubs | diamonds | hearts | spades;

    // Straight flush, windows from the ace high down so the first match wins.
    for low in (0..STRAIGHT_WINDOWS).rev() {
        let window = STRAIGHT_MASK << (low * 4);
        if planes.iter().any(|&p| p & window == window) {
            return Ok(RankKey::new(
                HandRank::StraightFlush,
                encode_ranks(window, 5),
            ));
        }
    }

    if planes.iter().any(|&p| p & WHEEL_MASK == WHEEL_MASK) {
        return Ok(RankKey::new(HandRank::StraightFlush, WHEEL_DIGITS));
    }

    // Four of a kind, the kicker can be another four of a kind rank.
    let quads = clubs & diamonds & hearts & spades;
    if quads != 0 {
        let quad = top_bit(quads);
        let digits = (repeat(encode_ranks(quad, 1), 4) << 4) | encode_ranks(ranks & !quad, 1);
        return Ok(RankKey::new(HandRank::FourOfAKind, digits));
    }

    let triples = (clubs & diamonds & hearts)
        | (clubs & diamonds & spades)
        | (clubs & hearts & spades)
        | (diamonds & hearts & spades);
    let sets = (clubs & diamonds)
        | (clubs & hearts)
        | (clubs & spades)
        | (diamonds & hearts)
        | (diamonds & spades)
        | (hearts & spades);

    // Full house, a lower triple can be the pair.
    let triple = top_bit(triples);
    if triple != 0 && sets & !triple != 0 {
        let three = repeat(encode_ranks(triple, 1), 3);
        let two = repeat(encode_ranks(sets & !triple, 1), 2);
        return Ok(RankKey::new(HandRank::FullHouse, (three << 8) | two));
    }

    // Flush, suits checked in the same order as the full evaluator.
    for plane in planes {
        if plane.count_ones() >= 5 {
            return Ok(RankKey::new(HandRank::Flush, encode_ranks(plane, 5)));
        }
    }

    // Straight.
    for low in (0..STRAIGHT_WINDOWS).rev() {
        let window = STRAIGHT_MASK << (low * 4);
        if ranks & window == window {
            return Ok(RankKey::new(HandRank::Straight, encode_ranks(window, 5)));
        }
    }

    if ranks & WHEEL_MASK == WHEEL_MASK {
        return Ok(RankKey::new(HandRank::Straight, WHEEL_DIGITS));
    }

    // Three of a kind.
    if triple != 0 {
        let three = repeat(encode_ranks(triple, 1), 3);
        let kickers = encode_ranks(ranks & !triple, 2);
        return Ok(RankKey::new(HandRank::ThreeOfAKind, (three << 8) | kickers));
    }

    // Two pairs.
    let top = top_bit(sets);
    let second = top_bit(sets & !top);
    if second != 0 {
        let pairs = (repeat(encode_ranks(top, 1), 2) << 8) | repeat(encode_ranks(second, 1), 2);
        let kicker = encode_ranks(ranks & !top & !second, 1);
        return Ok(RankKey::new(HandRank::TwoPair, (pairs << 4) | kicker));
    }

    // One pair.
    if top != 0 {
        let pair = repeat(encode_ranks(top, 1), 2);
        let kickers = encode_ranks(ranks & !top, 3);
        return Ok(RankKey::new(HandRank::OnePair, (pair << 12) | kickers));
    }

    Ok(RankKey::new(HandRank::HighCard, encode_ranks(ranks, 5)))
}
