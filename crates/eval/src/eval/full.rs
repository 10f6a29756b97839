// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation that extracts the five best cards.
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use bluff_cards::{Card, CardSet, Pocket, Suit};

use super::{
    EvalError, HandRank, check_len,
    encoding::{
        DIGITS_BITS, STRAIGHT_MASK, STRAIGHT_WINDOWS, SUIT_MASK, WHEEL_MASK, pack_digits, top_bit,
    },
};

/// An evaluated hand with its five best cards.
///
/// The hand value packs the category in bits 20..24 and the rank of each of
/// the five cards in a 4 bits digit below it, a higher value is a better hand.
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|ccccaaaa|bbbbdddd|eeeeffff|
///   +--------+--------+--------+--------+
///   c = category (high card=0,...,straight flush=8)
///   a..f = rank value of each card (deuce=2,...,ace=14)
/// ```
///
/// Values are only comparable with other [HandValue]s, the [RankKey] returned
/// by the fast evaluator uses a different layout.
///
/// [RankKey]: super::RankKey
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HandValue {
    rank: HandRank,
    cards: [Card; 5],
    value: u32,
}

impl HandValue {
    /// Evaluates the best five cards hand in a 5 or more cards slice,
    /// duplicated cards count once.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        evaluate(&CardSet::from(cards))
    }

    /// Evaluates a player hole cards with the board cards.
    pub fn eval_pocket(pocket: &Pocket, board: &[Card]) -> Result<Self, EvalError> {
        let mut set = pocket.to_set();
        set.add_all(board.iter().copied());
        evaluate(&set)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The five cards of the hand, the cards that make the category first
    /// followed by the kickers.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand value used for comparison.
    pub fn value(&self) -> u32 {
        self.value
    }

    fn new(rank: HandRank, hand: Hand) -> Self {
        debug_assert_eq!(hand.len, 5);
        let digits = pack_digits(hand.cards[..hand.len].iter().map(|c| c.rank().value()));
        Self {
            rank,
            cards: hand.cards,
            value: ((rank as u32) << DIGITS_BITS) | digits,
        }
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank)?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] ({})", self.value)
    }
}

/// Cards collected in hand order.
#[derive(Clone, Copy)]
struct Hand {
    cards: [Card; 5],
    len: usize,
}

impl Hand {
    fn new() -> Self {
        Self {
            cards: [Card::default(); 5],
            len: 0,
        }
    }

    fn extend<I: IntoIterator<Item = Card>>(mut self, cards: I) -> Self {
        for card in cards {
            if self.len == self.cards.len() {
                break;
            }

            self.cards[self.len] = card;
            self.len += 1;
        }

        self
    }

    /// Moves the first card to the end, used for the ace in a wheel.
    fn ace_low(mut self) -> Self {
        self.cards[..self.len].rotate_left(1);
        self
    }
}

/// The cards of the rank at the `rank_bit` position of a rank plane.
#[inline]
fn rank_cards(cards: &CardSet, rank_bit: u64) -> CardSet {
    Card::from_index(rank_bit.trailing_zeros() as u8)
        .map_or(CardSet::EMPTY, |card| cards.of_rank(card.rank()))
}

/// One card for each rank in the rank plane, the highest suit is taken.
fn one_per_rank(cards: &CardSet, ranks: u64) -> Hand {
    let mut hand = Hand::new();
    let mut ranks = ranks;
    while ranks != 0 {
        let bit = top_bit(ranks);
        hand = hand.extend(rank_cards(cards, bit).highest());
        ranks &= !bit;
    }
    hand
}

/// Evaluates the best five cards hand in a set of 5 or more cards.
///
/// The categories are checked from the straight flush down to the high card
/// and the first match is returned. Fails if the set has fewer than 5 cards.
pub fn evaluate(cards: &CardSet) -> Result<HandValue, EvalError> {
    check_len(cards)?;

    let value = cards.mask();

    // Straight flush, windows from the ace high down so the first match wins.
    for low in (0..STRAIGHT_WINDOWS).rev() {
        for suit in 0..4 {
            let mask = STRAIGHT_MASK << (low * 4 + suit);
            if value & mask == mask {
                let hand = Hand::new().extend(CardSet::from_mask(mask));
                return Ok(HandValue::new(HandRank::StraightFlush, hand));
            }
        }
    }

    // Ace low straight flush.
    for suit in 0..4 {
        let mask = WHEEL_MASK << suit;
        if value & mask == mask {
            let hand = Hand::new().extend(CardSet::from_mask(mask)).ace_low();
            return Ok(HandValue::new(HandRank::StraightFlush, hand));
        }
    }

    let clubs = value & SUIT_MASK;
    let diamonds = (value >> 1) & SUIT_MASK;
    let hearts = (value >> 2) & SUIT_MASK;
    let spades = (value >> 3) & SUIT_MASK;

    // Four of a kind.
    let quads = clubs & diamonds & hearts & spades;
    if quads != 0 {
        let four = rank_cards(cards, top_bit(quads));
        let kickers = *cards - four;
        let hand = Hand::new().extend(four).extend(kickers.first_n(1));
        return Ok(HandValue::new(HandRank::FourOfAKind, hand));
    }

    // Ranks with three or more cards, and ranks with two or more cards.
    let triples = (clubs & diamonds & hearts)
        | (clubs & diamonds & spades)
        | (clubs & hearts & spades)
        | (diamonds & hearts & spades);
    let mut sets = (clubs & diamonds)
        | (clubs & hearts)
        | (clubs & spades)
        | (diamonds & hearts)
        | (diamonds & spades)
        | (hearts & spades);

    let three = if triples != 0 {
        let bit = top_bit(triples);
        sets &= !bit;
        Some(rank_cards(cards, bit))
    } else {
        None
    };

    let top_pair = if sets != 0 {
        let bit = top_bit(sets);
        sets &= !bit;
        Some(rank_cards(cards, bit))
    } else {
        None
    };

    let second_pair = if sets != 0 {
        Some(rank_cards(cards, top_bit(sets)))
    } else {
        None
    };

    // Full house, a lower triple can be the pair.
    if let (Some(three), Some(pair)) = (three, top_pair) {
        let hand = Hand::new().extend(three).extend(pair.first_n(2));
        return Ok(HandValue::new(HandRank::FullHouse, hand));
    }

    // Flush.
    for suit in Suit::suits() {
        let flush = cards.of_suit(suit);
        if flush.len() >= 5 {
            let hand = Hand::new().extend(flush.first_n(5));
            return Ok(HandValue::new(HandRank::Flush, hand));
        }
    }

    // Straight.
    let ranks = clubs | diamonds | hearts | spades;
    for low in (0..STRAIGHT_WINDOWS).rev() {
        let mask = STRAIGHT_MASK << (low * 4);
        if ranks & mask == mask {
            let hand = one_per_rank(cards, mask);
            return Ok(HandValue::new(HandRank::Straight, hand));
        }
    }

    if ranks & WHEEL_MASK == WHEEL_MASK {
        let hand = one_per_rank(cards, WHEEL_MASK).ace_low();
        return Ok(HandValue::new(HandRank::Straight, hand));
    }

    // Three of a kind.
    if let Some(three) = three {
        let kickers = *cards - three;
        let hand = Hand::new().extend(three).extend(kickers.first_n(2));
        return Ok(HandValue::new(HandRank::ThreeOfAKind, hand));
    }

    // Two pairs.
    if let (Some(top), Some(second)) = (top_pair, second_pair) {
        let kickers = *cards - top - second;
        let hand = Hand::new()
            .extend(top)
            .extend(second)
            .extend(kickers.first_n(1));
        return Ok(HandValue::new(HandRank::TwoPair, hand));
    }

    // One pair.
    if let Some(pair) = top_pair {
        let kickers = *cards - pair;
        let hand = Hand::new().extend(pair).extend(kickers.first_n(3));
        return Ok(HandValue::new(HandRank::OnePair, hand));
    }

    let hand = Hand::new().extend(cards.first_n(5));
    Ok(HandValue::new(HandRank::HighCard, hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluff_cards::parse_cards;

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap()).unwrap()
    }

    fn hand_str(h: &HandValue) -> String {
        h.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn straight_flush() {
        let h = eval("9s Ts Js Qs Ks 2d 3c");
        assert_eq!(h.rank(), HandRank::StraightFlush);
        assert_eq!(hand_str(&h), "KS QS JS TS 9S");
        assert_eq!(h.value(), 0x8DCBA9);

        let royal = eval("As Ks Qs Js Ts");
        assert!(royal > h);
    }

    #[test]
    fn straight_flush_highest_window() {
        // Seven consecutive spades, the nine high window wins.
        let h = eval("3s 4s 5s 6s 7s 8s 9s");
        assert_eq!(h.rank(), HandRank::StraightFlush);
        assert_eq!(hand_str(&h), "9S 8S 7S 6S 5S");

        // Straight flush in hearts with a higher straight in mixed suits.
        let h = eval("4h 5h 6h 7h 8h 9d Tc");
        assert_eq!(h.rank(), HandRank::StraightFlush);
        assert_eq!(hand_str(&h), "8H 7H 6H 5H 4H");
    }

    #[test]
    fn ace_low_straight_flush() {
        let h = eval("As 2s 3s 4s 5s");
        assert_eq!(h.rank(), HandRank::StraightFlush);
        assert_eq!(hand_str(&h), "5S 4S 3S 2S AS");
        assert_eq!(h.value(), 0x85432E);

        // The six high straight flush beats the wheel.
        let six = eval("As 2s 3s 4s 5s 6s");
        assert_eq!(hand_str(&six), "6S 5S 4S 3S 2S");
        assert!(six > h);
    }

    #[test]
    fn four_of_a_kind() {
        let h = eval("7s 7h 7d 7c Ks 2d 3c");
        assert_eq!(h.rank(), HandRank::FourOfAKind);
        assert_eq!(hand_str(&h), "7S 7H 7D 7C KS");
        assert_eq!(h.value(), 0x77777D);

        let low_kicker = eval("7s 7h 7d 7c 2s 3d 4c");
        assert_eq!(hand_str(&low_kicker), "7S 7H 7D 7C 4C");
        assert!(h > low_kicker);
    }

    #[test]
    fn four_of_a_kind_kicker_from_pair() {
        let h = eval("7s 7h 7d 7c Ks Kd 2c");
        assert_eq!(h.rank(), HandRank::FourOfAKind);
        assert_eq!(hand_str(&h), "7S 7H 7D 7C KS");
    }

    #[test]
    fn four_of_a_kind_kicker_from_quads() {
        let h = eval("7s 7h 7d 7c Ks Kh Kd Kc");
        assert_eq!(h.rank(), HandRank::FourOfAKind);
        assert_eq!(hand_str(&h), "KS KH KD KC 7S");
        assert_eq!(h.value(), 0x7DDDD7);
    }

    #[test]
    fn full_house() {
        let h = eval("9s 9h 9d 8s 8h 7s 6s");
        assert_eq!(h.rank(), HandRank::FullHouse);
        assert_eq!(hand_str(&h), "9S 9H 9D 8S 8H");
        assert_eq!(h.value(), 0x699988);
    }

    #[test]
    fn full_house_two_triples() {
        let h = eval("5s 5h 5d Js Jh Jc 2d");
        assert_eq!(h.rank(), HandRank::FullHouse);
        assert_eq!(hand_str(&h), "JS JH JC 5S 5H");
    }

    #[test]
    fn full_house_highest_pair() {
        let h = eval("5s 5h 5d 3s 3h Qc Qd");
        assert_eq!(h.rank(), HandRank::FullHouse);
        assert_eq!(hand_str(&h), "5S 5H 5D QD QC");
    }

    #[test]
    fn full_house_beats_flush() {
        let full = eval("Ks Kh Kd 2s 2h 7s 9s");
        let flush = eval("As Qs Ts 8s 6s 2c 3d");
        assert_eq!(full.rank(), HandRank::FullHouse);
        assert_eq!(flush.rank(), HandRank::Flush);
        assert!(full > flush);
    }

    #[test]
    fn flush() {
        let h = eval("2h 9h Jh 4h Ah 6h Kd");
        assert_eq!(h.rank(), HandRank::Flush);
        assert_eq!(hand_str(&h), "AH JH 9H 6H 4H");
    }

    #[test]
    fn flush_first_suit_wins() {
        let h = eval("2c 4c 6c 8c Tc 3s 5s 7s 9s Js");
        assert_eq!(h.rank(), HandRank::Flush);
        assert_eq!(hand_str(&h), "TC 8C 6C 4C 2C");
        assert_eq!(h.value(), 0x5A8642);
    }

    #[test]
    fn flush_with_triple() {
        let h = eval("2h 9h Jh 4h Ah 2c 2d");
        assert_eq!(h.rank(), HandRank::Flush);
    }

    #[test]
    fn straight() {
        let h = eval("8c 9d Th Js Qc 2d 2c");
        assert_eq!(h.rank(), HandRank::Straight);
        assert_eq!(hand_str(&h), "QC JS TH 9D 8C");

        // Highest straight in a six cards run.
        let h = eval("4c 5d 6h 7s 8c 9d Ks");
        assert_eq!(hand_str(&h), "9D 8C 7S 6H 5D");
    }

    #[test]
    fn straight_with_pair_takes_one_card() {
        let h = eval("8c 8s 9d Th Js Qc 2d");
        assert_eq!(h.rank(), HandRank::Straight);
        assert_eq!(hand_str(&h), "QC JS TH 9D 8S");
    }

    #[test]
    fn wheel() {
        let h = eval("As 2h 3d 4c 5s");
        assert_eq!(h.rank(), HandRank::Straight);
        assert_eq!(hand_str(&h), "5S 4C 3D 2H AS");
        assert_eq!(h.cards()[4].rank(), bluff_cards::Rank::Ace);

        let six_high = eval("6s 2h 3d 4c 5s");
        assert!(six_high > h);

        let broadway = eval("As Kh Qd Jc Ts");
        assert!(broadway > six_high);
    }

    #[test]
    fn wheel_with_high_cards() {
        // The ace makes a wheel even with a king and queen.
        let h = eval("As 2h 3d 4c 5s Kd Qh");
        assert_eq!(h.rank(), HandRank::Straight);
        assert_eq!(hand_str(&h), "5S 4C 3D 2H AS");
    }

    #[test]
    fn three_of_a_kind() {
        let h = eval("Qs Qh Qd 2c 7s 9h Kd");
        assert_eq!(h.rank(), HandRank::ThreeOfAKind);
        assert_eq!(hand_str(&h), "QS QH QD KD 9H");
    }

    #[test]
    fn two_pair() {
        let h = eval("Ks Kh Qd Qc 5s 4d 2c");
        assert_eq!(h.rank(), HandRank::TwoPair);
        assert_eq!(hand_str(&h), "KS KH QD QC 5S");
        assert_eq!(h.value(), 0x2DDCC5);
    }

    #[test]
    fn two_pair_third_pair_kicker() {
        let h = eval("Ks Kh Qd Qc 5s 5d 2c");
        assert_eq!(h.rank(), HandRank::TwoPair);
        assert_eq!(hand_str(&h), "KS KH QD QC 5S");
    }

    #[test]
    fn one_pair() {
        let h = eval("Js Jh 2d 5c 8s Ad Th");
        assert_eq!(h.rank(), HandRank::OnePair);
        assert_eq!(hand_str(&h), "JS JH AD TH 8S");
    }

    #[test]
    fn high_card() {
        let h = eval("2s 5h 7d 9c Jd Kh 3c");
        assert_eq!(h.rank(), HandRank::HighCard);
        assert_eq!(hand_str(&h), "KH JD 9C 7D 5H");
        assert_eq!(h.value(), 0x0DB975);
    }

    #[test]
    fn too_few_cards() {
        let cards = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(
            HandValue::eval(&cards),
            Err(EvalError::TooFewCards { found: 4 })
        );

        // Duplicates count once.
        let cards = parse_cards("As As Ks Qs Js").unwrap();
        assert_eq!(
            HandValue::eval(&cards),
            Err(EvalError::TooFewCards { found: 4 })
        );
    }

    #[test]
    fn eval_pocket_with_board() {
        let pocket = Pocket::new("Ah".parse().unwrap(), "Ad".parse().unwrap());
        let board = parse_cards("As 7c 7d 2h 9s").unwrap();
        let h = HandValue::eval_pocket(&pocket, &board).unwrap();
        assert_eq!(h.rank(), HandRank::FullHouse);
        assert_eq!(hand_str(&h), "AS AH AD 7D 7C");
    }

    #[test]
    fn display() {
        let h = eval("As 2h 3d 4c 5s");
        assert_eq!(h.to_string(), format!("Straight [5S,4C,3D,2H,AS] ({})", 0x45432E));
    }

    #[test]
    fn equal_values_with_different_suits() {
        let h1 = eval("As Kd 9c 7h 3s");
        let h2 = eval("Ac Kh 9s 7d 3d");
        assert_eq!(h1, h2);
        assert_ne!(h1.cards(), h2.cards());
    }

    #[test]
    fn idempotent() {
        let set = CardSet::from(parse_cards("Ts Th 4d 4c 9s 9d Ac").unwrap().as_slice());
        let h1 = evaluate(&set).unwrap();
        let h2 = evaluate(&set).unwrap();
        assert_eq!(h1.value(), h2.value());
        assert_eq!(h1.cards(), h2.cards());
        assert!(h1.cards().iter().all(|c| set.contains(*c)));
    }
}
