// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals a table and ranks the players hands.
use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::fmt;

use showdown_eval::{
    Card, Deck, Hand, evaluate_omaha, par_evaluate_all, render_cards, winners,
};

/// The poker variant to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Texas Hold'em, 2 hole cards.
    Holdem,
    /// Omaha, 4 hole cards.
    Omaha,
}

impl Variant {
    /// Number of hole cards dealt to each player.
    pub fn hole_cards(self) -> usize {
        match self {
            Variant::Holdem => 2,
            Variant::Omaha => 4,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Holdem => write!(f, "HOLD EM"),
            Variant::Omaha => write!(f, "OMAHA"),
        }
    }
}

/// A player seat at showdown.
#[derive(Debug, Serialize)]
pub struct Seat {
    /// The player hole cards.
    pub hole: Vec<Card>,
    /// The player best hand.
    pub hand: Hand,
}

/// A dealt table.
#[derive(Debug, Serialize)]
pub struct Table {
    /// The table variant.
    pub variant: Variant,
    /// The board cards.
    pub board: Vec<Card>,
    /// The players seats.
    pub seats: Vec<Seat>,
    /// The seats indices of the winners.
    pub winners: Vec<usize>,
}

impl Table {
    /// Deals `players` hands and the board from the deck and evaluates each
    /// player hand, hold'em hands are evaluated with `num_tasks` threads.
    pub fn deal(deck: &mut Deck, variant: Variant, players: usize, num_tasks: usize) -> Result<Self> {
        let holes = (0..players)
            .map(|_| deck.deal(variant.hole_cards()))
            .collect::<Result<Vec<_>, _>>()?;
        let board = deck.deal(5)?;

        let hands = match variant {
            Variant::Holdem => {
                let cards = holes
                    .iter()
                    .map(|hole| [hole.as_slice(), board.as_slice()].concat())
                    .collect::<Vec<_>>();
                par_evaluate_all(num_tasks, &cards)?
            }
            Variant::Omaha => holes
                .iter()
                .map(|hole| evaluate_omaha(hole, &board))
                .collect::<Result<Vec<_>, _>>()?,
        };

        debug!("Evaluated {} {variant} hands", hands.len());

        let winners = winners(&hands);
        let seats = holes
            .into_iter()
            .zip(hands)
            .map(|(hole, hand)| Seat { hole, hand })
            .collect();

        Ok(Self {
            variant,
            board,
            seats,
            winners,
        })
    }

    /// Returns the seats indices from the strongest to the weakest hand.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order = (0..self.seats.len()).collect::<Vec<_>>();
        order.sort_by_key(|&idx| self.seats[idx].hand.rank());
        order
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} HANDS:", self.variant)?;
        writeln!(f, "BOARD {}", render_cards(&self.board, 5))?;
        writeln!(f, "---")?;

        let width = 5 * self.variant.hole_cards();
        for idx in self.ranking() {
            let seat = &self.seats[idx];
            let mark = if self.winners.contains(&idx) { '*' } else { ' ' };
            writeln!(
                f,
                "{mark}PLR {} {:<width$} {} (0x{:x}) \"{}\"",
                idx + 1,
                render_cards(&seat.hole, 0),
                render_cards(seat.hand.cards(), 0),
                seat.hand.rank(),
                seat.hand.description(),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::evaluate;

    #[test]
    fn deal_holdem() {
        let mut deck = Deck::new(42);
        let table = Table::deal(&mut deck, Variant::Holdem, 9, 4).unwrap();
        assert_eq!(table.seats.len(), 9);
        assert_eq!(table.board.len(), 5);
        assert_eq!(deck.remaining(), 52 - 9 * 2 - 5);
        assert!(!table.winners.is_empty());

        for seat in &table.seats {
            assert_eq!(seat.hole.len(), 2);
            let cards = [seat.hole.as_slice(), table.board.as_slice()].concat();
            assert_eq!(evaluate(&cards).unwrap().rank(), seat.hand.rank());
        }

        let ranking = table.ranking();
        assert!(table.winners.contains(&ranking[0]));
        assert!(ranking.windows(2).all(|w| {
            table.seats[w[0]].hand.rank() <= table.seats[w[1]].hand.rank()
        }));
    }

    #[test]
    fn deal_omaha() {
        let mut deck = Deck::new(42);
        let table = Table::deal(&mut deck, Variant::Omaha, 10, 1).unwrap();
        assert_eq!(table.seats.len(), 10);
        assert_eq!(deck.remaining(), 52 - 10 * 4 - 5);
        assert!(table.seats.iter().all(|s| s.hole.len() == 4));

        // Not enough cards for another table.
        assert!(Table::deal(&mut deck, Variant::Omaha, 2, 1).is_err());
    }

    #[test]
    fn seeded_tables_replay() {
        let t1 = Table::deal(&mut Deck::new(7), Variant::Holdem, 6, 2).unwrap();
        let t2 = Table::deal(&mut Deck::new(7), Variant::Holdem, 6, 3).unwrap();
        assert_eq!(t1.to_string(), t2.to_string());
        assert_eq!(
            serde_json::to_string(&t1).unwrap(),
            serde_json::to_string(&t2).unwrap()
        );
    }

    #[test]
    fn display() {
        let table = Table::deal(&mut Deck::new(1), Variant::Omaha, 3, 1).unwrap();
        let s = table.to_string();
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "OMAHA HANDS:");
        assert!(lines[1].starts_with("BOARD "));
        assert_eq!(lines.len(), 3 + 3);
        assert!(lines[3].starts_with('*'));
    }
}
