// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Bit masks and rank digits packing shared by the evaluators.
//!
//! Rank planes use the [CardSet] layout shifted down to the clubs position,
//! so rank `r` is bit `r * 4`.
use bluff_cards::CardSet;

/// One suit plane, a bit for each rank.
pub(crate) const SUIT_MASK: u64 = CardSet::SUIT_MASK;

/// Five consecutive ranks starting at the deuce.
pub(crate) const STRAIGHT_MASK: u64 = 0x11111;

/// Ace, deuce, trey, four, and five.
pub(crate) const WHEEL_MASK: u64 = (1 << 48) | 0x1111;

/// Digits of the five high straight with the ace as the last card.
pub(crate) const WHEEL_DIGITS: u32 = 0x5432E;

/// Number of five ranks windows, from 2-6 up to T-A.
pub(crate) const STRAIGHT_WINDOWS: u32 = 9;

/// Bits used by the five rank digits.
pub(crate) const DIGITS_BITS: u32 = 20;

/// Returns the mask with only the highest bit set, zero for an empty mask.
#[inline]
pub(crate) fn top_bit(mask: u64) -> u64 {
    if mask == 0 {
        0
    } else {
        1 << (63 - mask.leading_zeros())
    }
}

/// Rank value (2 to 14) of a rank plane bit index.
#[inline]
fn rank_value(bit: u32) -> u32 {
    (bit >> 2) + 2
}

/// Packs up to `n` ranks from the rank plane `mask` into 4 bits digits, the
/// highest rank in the most significant digit.
///
/// If the plane has fewer than `n` ranks the missing digits are zero so
/// that the digits position doesn't depend on the number of ranks.
#[inline]
pub(crate) fn encode_ranks(mut mask: u64, n: usize) -> u32 {
    let mut value = 0;
    for _ in 0..n {
        value <<= 4;
        if mask != 0 {
            let bit = 63 - mask.leading_zeros();
            value |= rank_value(bit);
            mask &= !(1 << bit);
        }
    }

    value
}

/// Packs rank values into 4 bits digits, first value most significant,
/// missing digits up to 5 are zero.
#[inline]
pub(crate) fn pack_digits<I>(values: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    let mut value = 0;
    let mut count = 0;
    for v in values.into_iter().take(5) {
        value = (value << 4) | v as u32;
        count += 1;
    }

    value << (4 * (5 - count))
}
