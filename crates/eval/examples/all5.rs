// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all5
// ...
// Total hands      2598960
// Elapsed:         1.020s
// Hands/sec:       2547019
//
// Royal Flush:     4
// Straight Flush:  36
// Four of a Kind:  624
// Full House:      3744
// Flush:           5108
// Straight:        10200
// Three of a Kind: 54912
// Two Pair:        123552
// One Pair:        1098240
// High Card:       1302540
// ```

use std::time::Instant;

use showdown_eval::{combos::for_each_ksubset, *};

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let deck = Card::all().collect::<Vec<_>>();
    let mut counts = [0usize; 11];
    let mut hand = Vec::with_capacity(HAND_SIZE);

    for_each_ksubset(deck.len(), HAND_SIZE, |p| {
        hand.clear();
        hand.extend(p.iter().map(|&idx| deck[idx]));
        match evaluate(&hand) {
            Ok(h) => counts[h.category().strength() as usize] += 1,
            Err(e) => eprintln!("{e}"),
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let name = format!("{}:", title(category.name()));
        println!("{name:<17}{}", counts[category.strength() as usize]);
    }
}

fn title(name: &str) -> String {
    name.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) if w != "of" && w != "a" => c.to_uppercase().chain(chars).collect(),
                _ => w.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
