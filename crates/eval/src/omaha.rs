// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Omaha hands evaluation.
//!
//! An Omaha hand must be made with exactly 2 of the 4 hole cards and exactly
//! 3 of the 5 board cards, the evaluator builds all the 60 legal hands and
//! keeps the strongest.
use showdown_cards::Card;

use crate::{EvalError, Hand, combos::combinations, evaluate, hand::HAND_SIZE};

/// How many hole and board cards a hand must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    /// The number of hole cards.
    pub hole: usize,
    /// The number of board cards.
    pub board: usize,
}

impl Pick {
    /// Omaha uses 2 hole cards and 3 board cards.
    pub const OMAHA: Pick = Pick { hole: 2, board: 3 };

    /// Creates a new pick.
    pub const fn new(hole: usize, board: usize) -> Self {
        Self { hole, board }
    }
}

/// Evaluates an Omaha hand with 4 hole cards and 5 board cards.
///
/// ```
/// # use showdown_eval::*;
/// let hole = parse_cards("Ah Kh 2c 2d").unwrap();
/// let board = parse_cards("Ac Kc Qc Jc Tc").unwrap();
/// let hand = evaluate_omaha(&hole, &board).unwrap();
/// assert_eq!(hand.description(), "straight - ace high");
/// ```
pub fn evaluate_omaha(hole: &[Card], board: &[Card]) -> Result<Hand, EvalError> {
    if hole.len() != 4 {
        return Err(EvalError::InvalidHoleCount {
            expected: 4,
            found: hole.len(),
        });
    }

    if board.len() != 5 {
        return Err(EvalError::InvalidBoardCount {
            expected: 5,
            found: board.len(),
        });
    }

    evaluate_constrained(hole, board, Pick::OMAHA)
}

/// Evaluates the best hand made with exactly `pick.hole` of the hole cards
/// and exactly `pick.board` of the board cards.
///
/// Both picks must be at least one card and add up to 5, otherwise the
/// result is an [EvalError::InvalidPick]. Fewer hole or board cards than
/// picked are a count error.
///
/// With equal ranks the first hand found is returned, hole combinations are
/// the outer loop and board combinations the inner loop.
pub fn evaluate_constrained(hole: &[Card], board: &[Card], pick: Pick) -> Result<Hand, EvalError> {
    if pick.hole == 0 || pick.board == 0 || pick.hole + pick.board != HAND_SIZE {
        return Err(EvalError::InvalidPick {
            hole: pick.hole,
            board: pick.board,
        });
    }

    if hole.len() < pick.hole {
        return Err(EvalError::InvalidHoleCount {
            expected: pick.hole,
            found: hole.len(),
        });
    }

    if board.len() < pick.board {
        return Err(EvalError::InvalidBoardCount {
            expected: pick.board,
            found: board.len(),
        });
    }

    let hole_picks = combinations(hole, pick.hole);
    let board_picks = combinations(board, pick.board);

    let mut best: Option<Hand> = None;
    let mut cards = Vec::with_capacity(HAND_SIZE);
    for h in &hole_picks {
        for b in &board_picks {
            cards.clear();
            cards.extend_from_slice(h);
            cards.extend_from_slice(b);

            let hand = evaluate(&cards)?;
            if best.as_ref().is_none_or(|best| hand.rank() < best.rank()) {
                best = Some(hand);
            }
        }
    }

    best.ok_or(EvalError::InsufficientCards(0))
}
