// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Bluff Poker hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::error;

pub mod census;
pub mod hand;

#[derive(Debug, Parser)]
#[clap(version, about = "Bluff Poker hand evaluator.")]
struct Cli {
    /// Print the results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand of 5 to 7 cards, for example "As Kd 7h 7c 2s".
    Eval {
        /// The hand cards.
        cards: String,
    },
    /// Compares two hands.
    Compare {
        /// The first hand cards.
        hand1: String,
        /// The second hand cards.
        hand2: String,
    },
    /// Evaluates all the sets of k cards with both evaluators and checks
    /// that they agree.
    Census {
        /// The number of cards in each set.
        #[clap(long, short, default_value_t = 7, value_parser = value_parser!(u8).range(5..=7))]
        cards: u8,
        /// The number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
    /// Evaluates random sets of k cards with both evaluators and checks that
    /// they order hands the same way.
    Sample {
        /// The number of sets.
        #[clap(long, short = 'n', default_value_t = 1_000_000)]
        count: usize,
        /// The number of cards in each set.
        #[clap(long, short, default_value_t = 7, value_parser = value_parser!(u8).range(5..=7))]
        cards: u8,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Eval { cards } => hand::eval(&cards, cli.json),
        Command::Compare { hand1, hand2 } => hand::compare(&hand1, &hand2, cli.json),
        Command::Census { cards, tasks } => {
            let config = census::Config {
                cards: cards as usize,
                tasks: tasks as usize,
            };
            census::census(&config, cli.json)
        }
        Command::Sample { count, cards } => census::sample(count, cards as usize, cli.json),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
