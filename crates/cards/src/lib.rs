// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(ah.value() > kd.value());
//! ```
//!
//! and a [Deck] type that deals the 52 cards in a shuffled order. A deck
//! created with a seed always deals the same cards, useful for tests and
//! replays:
//!
//! ```
//! # use showdown_cards::{Deck, CardsError};
//! let mut deck = Deck::new(42);
//! let hole = deck.deal(2).unwrap();
//! assert_eq!(hole, Deck::new(42).take(2).collect::<Vec<_>>());
//!
//! let _ = deck.deal(50).unwrap();
//! assert_eq!(deck.draw(), Err(CardsError::DeckExhausted));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, parse_cards, render_cards};

mod deck;
pub use deck::Deck;

mod error;
pub use error::CardsError;
