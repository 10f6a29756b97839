// Copyright (C) 2025 Bluff Poker Developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel card sets iteration.
use log::debug;
use rand::prelude::*;
use std::thread;

use super::Deck;
use crate::CardSet;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 52] {
    let mut t = [[0u32; 8]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    if n < k || n == 0 {
        0
    } else {
        NCKS[n.saturating_sub(1)][k] as usize
    }
}

/// Converts n to its k-combination in the combinatorial number system
/// (see Theorem L pg. 260 Knuth 4a), positions are in increasing order.
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for i in (0..k).rev() {
        // Largest c such that nck(c, i + 1) <= n.
        let mut c = i;
        while nck(c, i + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[i] = c;
        n = n.saturating_sub(nck(c, i + 1));
    }

    out
}

/// Calls the given closure for count k-subsets of 0..n starting from the
/// nth k-subset in colexicographic order.
fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    // Algorithm L from TAOCP 4a, c[k] and c[k + 1] are sentinels.
    let mut c = [0usize; 9];
    c[..k].copy_from_slice(&nth_ksubset(nth, k)[..k]);
    c[k] = n;

    for _ in 0..count {
        f(&c[..k]);

        let mut j = 0;
        while c[j] + 1 == c[j + 1] {
            c[j] = j;
            j += 1;
        }

        if j >= k {
            break;
        }

        c[j] += 1;
    }
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards set.
    ///
    /// The closure takes a usize that is the task identifier (0..num_task)
    /// and the set of k cards.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, CardSet) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let num_sets = nck(n, k);
        let sets_per_task = num_sets.div_ceil(num_tasks);
        debug!("Iterating {num_sets} sets of {k} cards with {num_tasks} tasks");

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * sets_per_task;
                if start >= num_sets {
                    break;
                }

                let count = sets_per_task.min(num_sets - start);
                let f = &f;
                s.spawn(move || {
                    for_each_ksubset(n, k, start, count, |p| {
                        let mask = p.iter().fold(0, |acc, &pos| acc | self.cards[pos].mask());
                        f(task_id, CardSet::from_mask(mask));
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` sets of k cards.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, CardSet) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);
        assert!(samples_per_task > 0);

        if k > self.cards.len() {
            return;
        }

        debug!("Sampling {samples_per_task} sets of {k} cards with {num_tasks} tasks");

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        let set = self.cards.choose_multiple(&mut rng, k).copied().collect();
                        f(task_id, set);
                    }
                });
            }
        });
    }
}
