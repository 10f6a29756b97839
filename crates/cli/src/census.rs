// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluators census over all hands or random samples.
use anyhow::{Result, bail};
use log::info;
use serde::Serialize;
use std::{
    sync::atomic::{self, AtomicU64},
    time::Instant,
};

use bluff_eval::{CardSet, Deck, HandRank, evaluate, fast_evaluate};

/// Census configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Number of cards in each hand.
    pub cards: usize,
    /// Number of parallel tasks.
    pub tasks: usize,
}

/// Categories counts for a set of hands.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Number of cards in each hand.
    pub cards: usize,
    /// Number of hands evaluated.
    pub hands: u64,
    /// Hands count per category, from high card to straight flush.
    pub counts: Vec<(HandRank, u64)>,
    /// Number of disagreements between the evaluators.
    pub mismatches: u64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u128,
}

impl Report {
    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            for (rank, count) in &self.counts {
                println!("{:<16} {count:>10}", rank.to_string());
            }
            println!("{:<16} {:>10}", "Total", self.hands);
        }

        Ok(())
    }
}

/// Per task counters, each task only updates its own.
#[derive(Default)]
struct Counters {
    ranks: [AtomicU64; HandRank::COUNT],
    mismatches: AtomicU64,
}

impl Counters {
    fn add(&self, rank: HandRank) {
        self.ranks[rank.ordinal() as usize].fetch_add(1, atomic::Ordering::Relaxed);
    }

    fn mismatch(&self) {
        self.mismatches.fetch_add(1, atomic::Ordering::Relaxed);
    }
}

/// Checks the evaluators agree on a set and returns its category.
fn check(cards: &CardSet) -> Option<HandRank> {
    let value = evaluate(cards).ok()?;
    let key = fast_evaluate(cards).ok()?;
    (value.rank() == key.rank() && value.value() & 0xFFFFF == key.digits()).then_some(value.rank())
}

/// Evaluates all the hands of `config.cards` cards with both evaluators.
pub fn count(config: &Config) -> Report {
    let counters = (0..config.tasks)
        .map(|_| Counters::default())
        .collect::<Vec<_>>();

    let now = Instant::now();
    Deck::default().par_for_each(config.tasks, config.cards, |task, cards| {
        let counters = &counters[task];
        match check(&cards) {
            Some(rank) => counters.add(rank),
            None => counters.mismatch(),
        }
    });

    let elapsed_ms = now.elapsed().as_millis();
    let counts = HandRank::ranks()
        .map(|rank| {
            let n = counters
                .iter()
                .map(|c| c.ranks[rank.ordinal() as usize].load(atomic::Ordering::Relaxed))
                .sum();
            (rank, n)
        })
        .collect::<Vec<_>>();
    let mismatches = counters
        .iter()
        .map(|c| c.mismatches.load(atomic::Ordering::Relaxed))
        .sum::<u64>();

    Report {
        cards: config.cards,
        hands: counts.iter().map(|(_, n)| n).sum::<u64>() + mismatches,
        counts,
        mismatches,
        elapsed_ms,
    }
}

/// Runs a census of all the hands and prints the categories counts.
pub fn census(config: &Config, json: bool) -> Result<()> {
    info!(
        "Evaluating all {}-cards hands with {} tasks",
        config.cards, config.tasks
    );

    let report = count(config);
    info!("Evaluated {} hands in {}ms", report.hands, report.elapsed_ms);
    report.print(json)?;

    if report.mismatches > 0 {
        bail!("Evaluators disagree on {} hands", report.mismatches);
    }

    Ok(())
}

/// Evaluates `count` random hands, checking the evaluators agree on each
/// hand category and on the ordering of consecutive hands.
pub fn sample_hands(count: usize, cards: usize) -> Report {
    let mut report = Report {
        cards,
        counts: HandRank::ranks().map(|r| (r, 0)).collect(),
        ..Default::default()
    };

    let now = Instant::now();
    let mut last = None;
    Deck::default().sample(count, cards, |set| {
        report.hands += 1;

        let (Ok(value), Ok(key)) = (evaluate(&set), fast_evaluate(&set)) else {
            report.mismatches += 1;
            return;
        };

        if value.rank() != key.rank() {
            report.mismatches += 1;
            return;
        }

        if let Some((last_value, last_key)) = last {
            if value.cmp(&last_value) != key.cmp(&last_key) {
                report.mismatches += 1;
            }
        }

        report.counts[value.rank().ordinal() as usize].1 += 1;
        last = Some((value, key));
    });

    report.elapsed_ms = now.elapsed().as_millis();
    report
}

/// Samples random hands and prints the categories counts.
pub fn sample(count: usize, cards: usize, json: bool) -> Result<()> {
    info!("Sampling {count} hands of {cards} cards");

    let report = sample_hands(count, cards);
    info!("Evaluated {} hands in {}ms", report.hands, report.elapsed_ms);
    report.print(json)?;

    if report.mismatches > 0 {
        bail!("Evaluators disagree on {} hands", report.mismatches);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_cards_census() {
        let report = count(&Config { cards: 5, tasks: 4 });
        assert_eq!(report.hands, 2_598_960);
        assert_eq!(report.mismatches, 0);

        let counts = report.counts.iter().map(|(_, n)| *n).collect::<Vec<_>>();
        assert_eq!(
            counts,
            [1302540, 1098240, 123552, 54912, 10200, 5108, 3744, 624, 40]
        );
    }

    #[test]
    fn sampled_hands() {
        let report = sample_hands(10_000, 7);
        assert_eq!(report.hands, 10_000);
        assert_eq!(report.mismatches, 0);
        assert_eq!(
            report.counts.iter().map(|(_, n)| n).sum::<u64>(),
            10_000
        );
    }

    #[test]
    fn report_json() {
        let report = sample_hands(100, 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cards"], 5);
        assert_eq!(json["hands"], 100);
        assert_eq!(json["counts"][0][0], "HighCard");
        assert_eq!(json["counts"].as_array().unwrap().len(), HandRank::COUNT);
    }
}
