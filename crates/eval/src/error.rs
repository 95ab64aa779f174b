// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use showdown_cards::CardsError;

/// Errors returned by the hand evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Fewer than 5 distinct cards to build a hand.
    #[error("Insufficient cards: a hand needs 5 cards, got {0}")]
    InsufficientCards(usize),
    /// Wrong number of hole cards.
    #[error("Invalid hole cards count: expected {expected}, got {found}")]
    InvalidHoleCount {
        /// The required number of hole cards.
        expected: usize,
        /// The given number of hole cards.
        found: usize,
    },
    /// Wrong number of board cards.
    #[error("Invalid board cards count: expected {expected}, got {found}")]
    InvalidBoardCount {
        /// The required number of board cards.
        expected: usize,
        /// The given number of board cards.
        found: usize,
    },
    /// Board cards count outside the accepted range.
    #[error("Invalid board cards count: expected {min} to {max}, got {found}")]
    InvalidBoardRange {
        /// The minimum number of board cards.
        min: usize,
        /// The maximum number of board cards.
        max: usize,
        /// The given number of board cards.
        found: usize,
    },
    /// Hole and board picks that are zero or don't add up to a 5 cards hand.
    #[error("Invalid pick: {hole} hole and {board} board cards is not a 5 cards hand")]
    InvalidPick {
        /// Hole cards to pick.
        hole: usize,
        /// Board cards to pick.
        board: usize,
    },
    /// A cards error.
    #[error(transparent)]
    Cards(#[from] CardsError),
}
