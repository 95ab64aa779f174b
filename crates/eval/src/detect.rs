// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detection.
//!
//! Detection works on a copy of the cards sorted by value from high to low,
//! ties broken by suit so that the same cards always produce the same
//! groups regardless of the order they were given.
use showdown_cards::{Card, Rank};

/// A card with the value it plays in a hand.
///
/// The value is the card value except for an ace played low in a wheel
/// straight that has value [Rank::ACE_LOW].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub card: Card,
    pub value: u8,
}

impl Slot {
    fn new(card: Card) -> Self {
        Self {
            card,
            value: card.value(),
        }
    }

    /// Returns the rank of the card in this slot.
    pub fn rank(&self) -> Rank {
        self.card.rank()
    }
}

/// Sorts cards by value descending.
pub(crate) fn sort_desc(cards: &[Card]) -> Vec<Slot> {
    let mut slots = cards.iter().copied().map(Slot::new).collect::<Vec<_>>();
    slots.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.card.suit().cmp(&b.card.suit()))
    });
    slots
}

/// The groupings found in a set of cards.
#[derive(Debug, Default)]
pub(crate) struct Detection<'a> {
    /// Groups of 4 cards with the same value, highest first.
    pub quads: Vec<&'a [Slot]>,
    /// Groups of 3 cards with the same value, highest first.
    pub trips: Vec<&'a [Slot]>,
    /// Groups of 2 cards with the same value, highest first.
    pub pairs: Vec<&'a [Slot]>,
    /// Cards of the first suit with 5 or more cards, highest first.
    pub flush: Vec<Slot>,
    /// The highest straight run, may contain cards with the same value.
    pub straight: Vec<Slot>,
    /// The highest straight run made of flush cards.
    pub straight_flush: Vec<Slot>,
}

impl<'a> Detection<'a> {
    /// Runs all the detectors on cards sorted by [sort_desc].
    pub fn new(sorted: &'a [Slot]) -> Self {
        let mut detection = Detection::default();

        for group in rank_groups(sorted) {
            match group.len() {
                2 => detection.pairs.push(group),
                3 => detection.trips.push(group),
                4 => detection.quads.push(group),
                _ => {}
            }
        }

        detection.flush = flush_cards(sorted);
        detection.straight = straight_run(sorted);

        if !detection.straight.is_empty() && !detection.flush.is_empty() {
            detection.straight_flush = straight_run(&detection.flush);
        }

        detection
    }

    /// Checks if the straight flush is ace high.
    pub fn is_royal(&self) -> bool {
        self.straight_flush
            .first()
            .is_some_and(|s| s.value == Rank::ACE_HIGH)
    }
}

/// Groups sorted cards by value, highest value first.
pub(crate) fn rank_groups(sorted: &[Slot]) -> impl Iterator<Item = &[Slot]> {
    sorted.chunk_by(|a, b| a.value == b.value)
}

/// Returns the cards of the first suit with at least 5 cards.
pub(crate) fn flush_cards(sorted: &[Slot]) -> Vec<Slot> {
    let mut suits: [Vec<Slot>; 4] = Default::default();
    for slot in sorted {
        suits[slot.card.suit().index()].push(*slot);
    }

    suits
        .into_iter()
        .find(|cards| cards.len() >= 5)
        .unwrap_or_default()
}

/// Finds the highest run of 5 or more consecutive values.
///
/// Every ace is repeated at the end of the list with the low ace value so
/// that A-2-3-4-5 is found. Cards with the same value are kept in the run,
/// the caller picks one card per value. Returns an empty run if there is no
/// straight.
pub(crate) fn straight_run(sorted: &[Slot]) -> Vec<Slot> {
    let low_aces = sorted
        .iter()
        .filter(|s| s.value == Rank::ACE_HIGH)
        .map(|s| Slot {
            value: Rank::ACE_LOW,
            ..*s
        });

    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let mut last = first.value;
    let mut length = 1;
    let mut run = Vec::with_capacity(sorted.len());

    for slot in sorted.iter().copied().chain(low_aces) {
        let delta = last.saturating_sub(slot.value);
        last = slot.value;

        match delta {
            0 => run.push(slot),
            1 => {
                length += 1;
                run.push(slot);
            }
            _ if length < 5 => {
                length = 1;
                run.clear();
                run.push(slot);
            }
            _ => break,
        }
    }

    if length >= 5 { run } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;

    fn sorted(s: &str) -> Vec<Slot> {
        sort_desc(&parse_cards(s).unwrap())
    }

    fn values(slots: &[Slot]) -> Vec<u8> {
        slots.iter().map(|s| s.value).collect()
    }

    #[test]
    fn sort_is_deterministic() {
        let a = sorted("2c Kd Ks 9h Kh");
        let b = sorted("Kh 9h Ks 2c Kd");
        assert_eq!(a, b);
        assert_eq!(values(&a), vec![12, 12, 12, 8, 1]);
        assert_eq!(a[0].card.to_string(), "Kh");
    }

    #[test]
    fn groups() {
        let cards = sorted("Kh Kd 5c 5s 5h Ad Ac");
        let d = Detection::new(&cards);
        assert!(d.quads.is_empty());
        assert_eq!(d.trips.len(), 1);
        assert_eq!(d.trips[0][0].value, 4);
        assert_eq!(d.pairs.len(), 2);
        // Higher pair first.
        assert_eq!(d.pairs[0][0].value, 13);
        assert_eq!(d.pairs[1][0].value, 12);
        assert!(d.flush.is_empty());
        assert!(d.straight.is_empty());
    }

    #[test]
    fn flush() {
        let cards = sorted("2h 9h Kh 4h 7d 6h Jh");
        let d = Detection::new(&cards);
        assert_eq!(values(&d.flush), vec![12, 10, 8, 5, 3, 1]);

        let cards = sorted("2h 9h Kh 4h 7d 6c Jd");
        assert!(flush_cards(&cards).is_empty());
    }

    #[test]
    fn straight() {
        let cards = sorted("9c 8d 7h 6s 5c 2d 2h");
        assert_eq!(values(&straight_run(&cards)), vec![8, 7, 6, 5, 4]);

        // Duplicate values stay in the run.
        let cards = sorted("9c 8d 8h 7h 6s 5c 2d");
        assert_eq!(values(&straight_run(&cards)), vec![8, 7, 7, 6, 5, 4]);

        // Longer run keeps all the values.
        let cards = sorted("Tc 9c 8d 7h 6s 5c 4d");
        assert_eq!(values(&straight_run(&cards)), vec![9, 8, 7, 6, 5, 4, 3]);

        // A gap after a complete straight ends the run.
        let cards = sorted("Kc Qd Jh Ts 9c 3d 2h");
        assert_eq!(values(&straight_run(&cards)), vec![12, 11, 10, 9, 8]);

        let cards = sorted("Kc Qd Jh Ts 8c 7d 6h");
        assert!(straight_run(&cards).is_empty());
    }

    #[test]
    fn wheel() {
        let cards = sorted("Ah 2c 3d 4s 5h Kd");
        let run = straight_run(&cards);
        assert_eq!(values(&run), vec![4, 3, 2, 1, 0]);
        assert_eq!(run[4].card.to_string(), "Ah");

        // Broadway uses the high ace.
        let cards = sorted("Ah Kc Qd Js Th");
        assert_eq!(values(&straight_run(&cards)), vec![13, 12, 11, 10, 9]);

        // No wrap around.
        let cards = sorted("Qh Kc Ad 2s 3h");
        assert!(straight_run(&cards).is_empty());
    }

    #[test]
    fn straight_flush() {
        let cards = sorted("9h 8h 7h 6h 5h 4c Ad");
        let d = Detection::new(&cards);
        assert_eq!(values(&d.straight_flush), vec![8, 7, 6, 5, 4]);
        assert!(!d.is_royal());

        let cards = sorted("Ah Kh Qh Jh Th 9h");
        let d = Detection::new(&cards);
        assert_eq!(values(&d.straight_flush), vec![13, 12, 11, 10, 9, 8]);
        assert!(d.is_royal());

        // A straight and a flush that don't intersect.
        let cards = sorted("9h 8c 7h 6h 5h 2h");
        let d = Detection::new(&cards);
        assert!(!d.straight.is_empty());
        assert!(!d.flush.is_empty());
        assert!(d.straight_flush.is_empty());
    }
}
