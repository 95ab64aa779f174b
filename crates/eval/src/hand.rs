// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection and ranking.
//!
//! The selector runs the category matchers from the strongest to the weakest
//! category and commits to the first one that matches, the cards that make
//! the category are then completed with the highest kickers up to 5 cards.
//!
//! The hand rank packs 6 hex digits:
//!
//! ```text
//!   +------+------+------+------+------+------+
//!   | cat  |  c1  |  c2  |  c3  |  c4  |  c5  |
//!   +------+------+------+------+------+------+
//!   cat = category strength (royal flush=1,...,high card=10)
//!   cN  = 13 - value of the Nth card in hand order (ace=0,...,deuce=12,low ace=13)
//! ```
//!
//! so that a smaller rank is a stronger hand.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

use crate::{
    Category, EvalError,
    detect::{Detection, Slot, sort_desc},
};

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A 5 cards poker hand.
///
/// Hands are ordered by strength, the stronger hand compares greater so
/// that `max` returns the winner, while the packed [rank](Hand::rank) is
/// smaller for stronger hands. Hands with the same rank are equal even if
/// they have different suits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    rank: u32,
    category: Category,
    cards: [Card; HAND_SIZE],
    description: String,
}

impl Hand {
    /// The packed hand rank, smaller is stronger.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand cards, from the most to the least significant.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The hand description, for example "full house - threes full of aces".
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank.cmp(&self.rank)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }

        write!(f, "({})", self.description)
    }
}

/// Evaluates the best 5 cards hand out of 5 or more cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("3h 3d Ah 3c As 9d 2c").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category(), Category::FullHouse);
/// assert_eq!(hand.description(), "full house - threes full of aces");
/// assert_eq!(hand.rank(), 0x4bbb00);
/// ```
///
/// The cards must be distinct, duplicates give an unspecified hand or an
/// [EvalError::InsufficientCards] error.
pub fn evaluate(cards: &[Card]) -> Result<Hand, EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::InsufficientCards(cards.len()));
    }

    let sorted = sort_desc(cards);
    let detection = Detection::new(&sorted);
    let made = MATCHERS
        .iter()
        .find_map(|matcher| matcher(&detection, &sorted))
        .ok_or(EvalError::InsufficientCards(0))?;

    // Fill with the highest kickers.
    let mut slots = made.cards();
    for slot in &sorted {
        if slots.len() == HAND_SIZE {
            break;
        }

        if !slots.iter().any(|s| s.card == slot.card) {
            slots.push(*slot);
        }
    }

    let slots = <[Slot; HAND_SIZE]>::try_from(slots)
        .map_err(|slots| EvalError::InsufficientCards(slots.len()))?;

    let category = made.category();
    Ok(Hand {
        rank: encode(category, &slots),
        category,
        cards: slots.map(|s| s.card),
        description: made.description(),
    })
}

/// Evaluates a Texas Hold'em hand with 2 hole cards and a flop, turn, or
/// river board.
pub fn evaluate_holdem(hole: &[Card], board: &[Card]) -> Result<Hand, EvalError> {
    if hole.len() != 2 {
        return Err(EvalError::InvalidHoleCount {
            expected: 2,
            found: hole.len(),
        });
    }

    if !(3..=5).contains(&board.len()) {
        return Err(EvalError::InvalidBoardRange {
            min: 3,
            max: 5,
            found: board.len(),
        });
    }

    evaluate(&[hole, board].concat())
}

/// Packs the category and the cards values into a hand rank.
fn encode(category: Category, slots: &[Slot; HAND_SIZE]) -> u32 {
    slots
        .iter()
        .enumerate()
        .fold(category.strength() << 20, |rank, (idx, slot)| {
            let digit = u32::from(Rank::ACE_HIGH - slot.value);
            rank | (digit << (4 * (HAND_SIZE - 1 - idx)))
        })
}

/// The cards that make a hand category, before kickers.
#[derive(Debug)]
enum Made {
    RoyalFlush([Slot; 5]),
    StraightFlush([Slot; 5]),
    FourOfAKind([Slot; 4]),
    FullHouse([Slot; 3], [Slot; 2]),
    Flush([Slot; 5]),
    Straight([Slot; 5]),
    ThreeOfAKind([Slot; 3]),
    TwoPair([Slot; 2], [Slot; 2]),
    OnePair([Slot; 2]),
    HighCard(Slot),
}

impl Made {
    fn category(&self) -> Category {
        match self {
            Made::RoyalFlush(_) => Category::RoyalFlush,
            Made::StraightFlush(_) => Category::StraightFlush,
            Made::FourOfAKind(_) => Category::FourOfAKind,
            Made::FullHouse(..) => Category::FullHouse,
            Made::Flush(_) => Category::Flush,
            Made::Straight(_) => Category::Straight,
            Made::ThreeOfAKind(_) => Category::ThreeOfAKind,
            Made::TwoPair(..) => Category::TwoPair,
            Made::OnePair(_) => Category::OnePair,
            Made::HighCard(_) => Category::HighCard,
        }
    }

    fn cards(&self) -> Vec<Slot> {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        match self {
            Made::RoyalFlush(c) | Made::StraightFlush(c) | Made::Flush(c) | Made::Straight(c) => {
                cards.extend_from_slice(c)
            }
            Made::FourOfAKind(c) => cards.extend_from_slice(c),
            Made::FullHouse(t, p) => {
                cards.extend_from_slice(t);
                cards.extend_from_slice(p);
            }
            Made::ThreeOfAKind(c) => cards.extend_from_slice(c),
            Made::TwoPair(hi, lo) => {
                cards.extend_from_slice(hi);
                cards.extend_from_slice(lo);
            }
            Made::OnePair(c) => cards.extend_from_slice(c),
            // All kickers.
            Made::HighCard(_) => {}
        }
        cards
    }

    fn description(&self) -> String {
        match self {
            Made::RoyalFlush(_) => "royal flush".to_string(),
            Made::StraightFlush(c) => format!("straight flush - {} high", c[0].rank().name()),
            Made::FourOfAKind(c) => format!("four of a kind ({})", c[0].rank().plural()),
            Made::FullHouse(t, p) => format!(
                "full house - {} full of {}",
                t[0].rank().plural(),
                p[0].rank().plural()
            ),
            Made::Flush(c) => format!("flush - {}", c[0].card.suit().name()),
            Made::Straight(c) => format!("straight - {} high", c[0].rank().name()),
            Made::ThreeOfAKind(c) => format!("three of a kind ({})", c[0].rank().plural()),
            Made::TwoPair(hi, lo) => format!(
                "two pair - {} and {}",
                hi[0].rank().plural(),
                lo[0].rank().plural()
            ),
            Made::OnePair(c) => format!("pair of {}", c[0].rank().plural()),
            Made::HighCard(c) => format!("{} high", c.rank().name()),
        }
    }
}

type Matcher = fn(&Detection<'_>, &[Slot]) -> Option<Made>;

/// Category matchers from the strongest to the weakest.
const MATCHERS: [Matcher; 10] = [
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
    high_card,
];

/// Returns the first N slots.
fn top<const N: usize>(slots: &[Slot]) -> Option<[Slot; N]> {
    slots.get(..N)?.try_into().ok()
}

fn royal_flush(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    if d.is_royal() {
        top(&d.straight_flush).map(Made::RoyalFlush)
    } else {
        None
    }
}

fn straight_flush(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    top(&d.straight_flush).map(Made::StraightFlush)
}

fn four_of_a_kind(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    top(d.quads.first()?).map(Made::FourOfAKind)
}

fn full_house(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    let trips = d.trips.first()?;

    // A second set of trips plays as the pair.
    let pair = match (d.pairs.first(), d.trips.get(1)) {
        (Some(pair), Some(trips)) if trips[0].value > pair[0].value => trips,
        (Some(pair), _) => pair,
        (None, Some(trips)) => trips,
        (None, None) => return None,
    };

    Some(Made::FullHouse(top(trips)?, top(pair)?))
}

fn flush(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    top(&d.flush).map(Made::Flush)
}

fn straight(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    let mut run = d.straight.clone();
    run.dedup_by_key(|s| s.value);
    top(&run).map(Made::Straight)
}

fn three_of_a_kind(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    top(d.trips.first()?).map(Made::ThreeOfAKind)
}

fn two_pair(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    match d.pairs.as_slice() {
        [hi, lo, ..] => Some(Made::TwoPair(top(hi)?, top(lo)?)),
        _ => None,
    }
}

fn one_pair(d: &Detection<'_>, _: &[Slot]) -> Option<Made> {
    top(d.pairs.first()?).map(Made::OnePair)
}

fn high_card(_: &Detection<'_>, sorted: &[Slot]) -> Option<Made> {
    sorted.first().copied().map(Made::HighCard)
}
