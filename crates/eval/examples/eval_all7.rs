// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// $ cargo r --release --example eval_all7 -- --full
// ```
use clap::Parser;
use std::time::Instant;

use bluff_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Use the full evaluator that extracts the best five cards.
    #[clap(long)]
    full: bool,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();

    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    Deck::default().for_each(7, |set| {
        let rank = if cli.full {
            evaluate(&set).map(|h| h.rank())
        } else {
            fast_evaluate(&set).map(|k| k.rank())
        };

        if let Ok(rank) = rank {
            counts[rank as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Evaluator        {}", if cli.full { "full" } else { "fast" });
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }
}
