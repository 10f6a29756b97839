// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7
// ```
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use bluff_eval::*;

fn main() {
    // Evaluate all 133M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    // Create per task counters to avoid contention and boost performance.
    let task_counters = (0..NUM_TASKS)
        .map(|_| {
            (0..HandRank::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_for_each(NUM_TASKS, 7, |task_id, set| {
        if let Ok(key) = fast_evaluate(&set) {
            let counters = &task_counters[task_id];
            counters[key.rank() as usize].fetch_add(1, Ordering::Relaxed);
        }
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..HandRank::COUNT)
        .map(|r| {
            task_counters
                .iter()
                .map(|counts| counts[r].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), agg[rank as usize]);
    }
}
