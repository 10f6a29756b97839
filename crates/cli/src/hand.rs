// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Single hands evaluation and comparison.
use anyhow::{Result, bail};
use log::warn;
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use bluff_eval::{CardSet, HandRank, HandValue, RankKey, evaluate, fast_evaluate, parse_cards};

/// A hand evaluated with both evaluators.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    /// The hand category.
    pub rank: HandRank,
    /// The five best cards.
    pub hand: String,
    /// The full evaluator value.
    pub value: u32,
    /// The fast evaluator key.
    pub key: RankKey,
    #[serde(skip)]
    full: HandValue,
}

impl Evaluation {
    /// Parses and evaluates a hand, fails if the evaluators disagree on the
    /// hand category.
    pub fn parse(s: &str) -> Result<Self> {
        let cards = parse_cards(s)?;
        let set = CardSet::from(cards.as_slice());
        if set.len() < cards.len() {
            warn!("Duplicated cards in {s}, evaluating {set}");
        }

        let full = evaluate(&set)?;
        let key = fast_evaluate(&set)?;
        if full.rank() != key.rank() {
            bail!("Evaluators disagree on {set}: {full} and {key}");
        }

        let hand = full
            .cards()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            rank: full.rank(),
            hand,
            value: full.value(),
            key,
            full,
        })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hand:  {}", self.full)?;
        write!(f, "Key:   {} (0x{:08X})", self.key, self.key.key())
    }
}

/// The winner of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
    /// The hands have the same strength.
    Split,
}

/// Two hands comparison.
#[derive(Debug, Serialize)]
pub struct Comparison {
    /// The first hand.
    pub first: Evaluation,
    /// The second hand.
    pub second: Evaluation,
    /// The winner.
    pub winner: Winner,
}

impl Comparison {
    /// Compares two hands, fails if the evaluators disagree on the winner.
    pub fn parse(hand1: &str, hand2: &str) -> Result<Self> {
        let first = Evaluation::parse(hand1)?;
        let second = Evaluation::parse(hand2)?;

        let by_value = first.full.cmp(&second.full);
        let by_key = first.key.cmp(&second.key);
        if by_value != by_key {
            bail!("Evaluators disagree: values {by_value:?} keys {by_key:?}");
        }

        let winner = match by_value {
            Ordering::Greater => Winner::First,
            Ordering::Less => Winner::Second,
            Ordering::Equal => Winner::Split,
        };

        Ok(Self {
            first,
            second,
            winner,
        })
    }
}

/// Prints a hand evaluation.
pub fn eval(cards: &str, json: bool) -> Result<()> {
    let eval = Evaluation::parse(cards)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
    } else {
        println!("{eval}");
    }

    Ok(())
}

/// Prints the comparison of two hands.
pub fn compare(hand1: &str, hand2: &str, json: bool) -> Result<()> {
    let cmp = Comparison::parse(hand1, hand2)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cmp)?);
    } else {
        println!("{}\n", cmp.first);
        println!("{}\n", cmp.second);
        match cmp.winner {
            Winner::First => println!("First hand wins"),
            Winner::Second => println!("Second hand wins"),
            Winner::Split => println!("Split pot"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation() {
        let e = Evaluation::parse("As 2h 3d 4c 5s Kd 9h").unwrap();
        assert_eq!(e.rank, HandRank::Straight);
        assert_eq!(e.hand, "5S 4C 3D 2H AS");
        assert_eq!(e.key.digits(), 0x5432E);
        assert_eq!(
            e.to_string(),
            format!(
                "Hand:  Straight [5S,4C,3D,2H,AS] ({})\nKey:   Straight 5432E (0x0405432E)",
                0x45432E
            )
        );
    }

    #[test]
    fn evaluation_json() {
        let e = Evaluation::parse("Ks Kh Qd Qc 5s 4d 2c").unwrap();
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["rank"], "TwoPair");
        assert_eq!(json["hand"], "KS KH QD QC 5S");
        assert_eq!(json["value"], 0x2DDCC5);
        assert_eq!(json["key"], 0x02DDCC5);
    }

    #[test]
    fn evaluation_errors() {
        assert!(Evaluation::parse("As Kx 2d 3c 4h").is_err());
        assert!(Evaluation::parse("As Ks 2d 3c").is_err());
        assert!(Evaluation::parse("As As Ks 2d 3c").is_err());
    }

    #[test]
    fn comparison() {
        let cmp = Comparison::parse("7s 7h 7d 7c Ks 2d 3c", "7s 7h 7d 7c 2s 3d 4c").unwrap();
        assert_eq!(cmp.winner, Winner::First);

        let cmp = Comparison::parse("As 2h 3d 4c 5s", "6s 2h 3d 4c 5s").unwrap();
        assert_eq!(cmp.winner, Winner::Second);

        let cmp = Comparison::parse("As Kd 9c 7h 3s", "Ac Kh 9s 7d 3d").unwrap();
        assert_eq!(cmp.winner, Winner::Split);
    }
}
