// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Parsing of cards lists.
use crate::{Card, CardsError};

/// Parses a list of cards like `"As Kd 7h"`, `"[AS,KD,7H]"`, or `"AsKd7h"`.
///
/// Cards are two characters each, whitespace and commas between cards are
/// optional and a surrounding pair of brackets is ignored.
///
/// ```
/// # use bluff_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("[Ah, Td]").unwrap();
/// assert_eq!(cards, vec![Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ten, Suit::Diamonds)]);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardsError> {
    let s = s.trim();
    let s = s
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(s);

    let mut cards = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }

        let chars = token.chars().collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(CardsError::InvalidCard(token.to_string()));
        }

        for chunk in chars.chunks(2) {
            let card = chunk.iter().collect::<String>();
            cards.push(card.parse()?);
        }
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn parse_separators() {
        let expected = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Hearts),
        ];

        for s in [
            "As Kd 7h",
            "AS,KD,7H",
            "[AS,KD,7H]",
            "  as  kd\t7h ",
            "AsKd7h",
            "AsKd 7h",
        ] {
            assert_eq!(parse_cards(s).unwrap(), expected, "{s}");
        }
    }

    #[test]
    fn parse_empty() {
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_cards("As Kx"),
            Err(CardsError::InvalidCard("Kx".to_string()))
        );
        assert_eq!(
            parse_cards("AsK"),
            Err(CardsError::InvalidCard("AsK".to_string()))
        );
        assert_eq!(
            parse_cards("10h"),
            Err(CardsError::InvalidCard("10h".to_string()))
        );
    }
}
