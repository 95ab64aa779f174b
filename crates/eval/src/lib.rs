// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Finds the best 5 cards hand out of 5 or more cards, with a packed rank to
//! compare hands and a description of the hand:
//!
//! ```
//! # use showdown_eval::*;
//! let hand = evaluate(&parse_cards("Kh Kd Ks Kc 2h").unwrap()).unwrap();
//! assert_eq!(hand.category(), Category::FourOfAKind);
//! assert_eq!(hand.description(), "four of a kind (kings)");
//! assert_eq!(hand.rank(), 0x31111c);
//!
//! let royal = evaluate(&parse_cards("Ah Kh Qh Jh Th").unwrap()).unwrap();
//! assert!(royal > hand);
//! assert!(royal.rank() < hand.rank());
//! ```
//!
//! The rank uses one hex digit for the category and one for each card of the
//! hand, a smaller rank is a stronger hand, while the [Hand] ordering puts
//! the stronger hand last so that `max` returns the winner.
//!
//! Omaha hands use exactly 2 hole cards and 3 board cards, see
//! [evaluate_omaha] and [evaluate_constrained] for other picks.
//!
//! The **`parallel`** feature enables [par_evaluate_all] to evaluate many
//! hands with a given number of threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::Category;

pub mod combos;

mod detect;

mod error;
pub use error::EvalError;

pub mod hand;
pub use hand::{HAND_SIZE, Hand, evaluate, evaluate_holdem};

pub mod omaha;
pub use omaha::{Pick, evaluate_constrained, evaluate_omaha};

pub mod showdown;
#[cfg(feature = "parallel")]
pub use showdown::par_evaluate_all;
pub use showdown::{evaluate_all, winners};

// Reexport cards types.
pub use showdown_cards::{Card, CardsError, Deck, Rank, Suit, parse_cards, render_cards};
