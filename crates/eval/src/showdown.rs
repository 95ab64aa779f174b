// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown helpers for evaluating and comparing the players hands.
use showdown_cards::Card;

use crate::{EvalError, Hand, evaluate};

/// Evaluates each cards collection, results are in the same order.
pub fn evaluate_all<C>(hands: &[C]) -> Result<Vec<Hand>, EvalError>
where
    C: AsRef<[Card]>,
{
    hands.iter().map(|cards| evaluate(cards.as_ref())).collect()
}

/// Returns the indices of the strongest hands, more than one index for a
/// split pot.
///
/// ```
/// # use showdown_eval::*;
/// let hands = [
///     evaluate(&parse_cards("Ah Ad 7c 5s 2h").unwrap()).unwrap(),
///     evaluate(&parse_cards("Kh Kd Qc Js 9h").unwrap()).unwrap(),
///     evaluate(&parse_cards("As Ac 7d 5h 2c").unwrap()).unwrap(),
/// ];
/// assert_eq!(winners(&hands), vec![0, 2]);
/// ```
pub fn winners(hands: &[Hand]) -> Vec<usize> {
    let Some(best) = hands.iter().map(Hand::rank).min() else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.rank() == best)
        .map(|(idx, _)| idx)
        .collect()
}

/// Parallel evaluation of many hands using `num_tasks` threads, results are
/// in the same order as the input.
///
/// Panics if num_tasks is 0.
#[cfg(feature = "parallel")]
pub fn par_evaluate_all<C>(num_tasks: usize, hands: &[C]) -> Result<Vec<Hand>, EvalError>
where
    C: AsRef<[Card]> + Sync,
{
    use std::thread;

    assert!(num_tasks > 0);

    if hands.is_empty() {
        return Ok(Vec::new());
    }

    let hands_per_task = hands.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let tasks = hands
            .chunks(hands_per_task)
            .map(|chunk| s.spawn(move || evaluate_all(chunk)))
            .collect::<Vec<_>>();

        let mut results = Vec::with_capacity(hands.len());
        for task in tasks {
            match task.join() {
                Ok(res) => results.extend(res?),
                Err(e) => std::panic::resume_unwind(e),
            }
        }

        Ok(results)
    })
}
