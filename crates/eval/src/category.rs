// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten poker hand categories.
///
/// Categories are compared through their [strength](Category::strength)
/// digit where smaller is stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Ace high straight flush.
    RoyalFlush = 1,
    /// Straight flush.
    StraightFlush,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
    /// Two pair.
    TwoPair,
    /// One pair.
    OnePair,
    /// High card.
    HighCard,
}

impl Category {
    /// Returns all categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category digit in the packed rank, 1 for a royal flush up to 10
    /// for high card.
    pub const fn strength(self) -> u32 {
        self as u32
    }

    /// Returns the category from a packed hand rank.
    pub fn from_rank(rank: u32) -> Option<Category> {
        let digit = rank >> 20;
        Category::categories().find(|c| c.strength() == digit)
    }

    /// The category name.
    pub fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "royal flush",
            Category::StraightFlush => "straight flush",
            Category::FourOfAKind => "four of a kind",
            Category::FullHouse => "full house",
            Category::Flush => "flush",
            Category::Straight => "straight",
            Category::ThreeOfAKind => "three of a kind",
            Category::TwoPair => "two pair",
            Category::OnePair => "pair",
            Category::HighCard => "high card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_order() {
        let digits = Category::categories()
            .map(Category::strength)
            .collect::<Vec<_>>();
        assert_eq!(digits, (1..=10).collect::<Vec<_>>());

        assert!(Category::RoyalFlush.strength() < Category::StraightFlush.strength());
        assert_eq!(Category::HighCard.to_string(), "high card");
    }

    #[test]
    fn from_rank() {
        assert_eq!(Category::from_rank(0x101234), Some(Category::RoyalFlush));
        assert_eq!(Category::from_rank(0x31111c), Some(Category::FourOfAKind));
        assert_eq!(Category::from_rank(0xa01235), Some(Category::HighCard));
        assert_eq!(Category::from_rank(0x001234), None);
        assert_eq!(Category::from_rank(0xb00000), None);
    }
}
