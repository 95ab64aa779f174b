// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals a Texas Hold'em and an Omaha table and ranks the players hands:
//
// ```bash
// $ cargo r --example table -- 42
// ```
use showdown_eval::*;

fn main() -> Result<(), EvalError> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    println!("seed {seed}");

    let mut deck = Deck::new(seed);
    let holes = (0..9).map(|_| deck.deal(2)).collect::<Result<Vec<_>, _>>()?;
    let board = deck.deal(5)?;
    let cards = holes
        .iter()
        .map(|hole| [hole.as_slice(), board.as_slice()].concat())
        .collect::<Vec<_>>();
    let hands = evaluate_all(&cards)?;
    print_table("HOLD EM HANDS:", &holes, &board, &hands);

    let mut deck = Deck::new(seed);
    let holes = (0..9).map(|_| deck.deal(4)).collect::<Result<Vec<_>, _>>()?;
    let board = deck.deal(5)?;
    let hands = holes
        .iter()
        .map(|hole| evaluate_omaha(hole, &board))
        .collect::<Result<Vec<_>, _>>()?;
    print_table("OMAHA HANDS:", &holes, &board, &hands);

    Ok(())
}

fn print_table(title: &str, holes: &[Vec<Card>], board: &[Card], hands: &[Hand]) {
    println!();
    println!("{title}");
    println!("BOARD {}", render_cards(board, 5));
    println!("---");

    let mut players = holes.iter().zip(hands).collect::<Vec<_>>();
    players.sort_by_key(|(_, hand)| hand.rank());

    for (idx, (hole, hand)) in players.into_iter().enumerate() {
        println!(
            "PLR {} {:<24} {} (0x{:x}) \"{}\"",
            idx + 1,
            render_cards(hole, 0),
            render_cards(hand.cards(), 0),
            hand.rank(),
            hand.description()
        );
    }
}
