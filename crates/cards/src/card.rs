// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardsError;

/// A Poker card.
///
/// A card is an immutable rank and suit pair, its textual form is the rank
/// symbol followed by the suit initial:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let card: Card = "Th".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card.to_string(), "Th");
/// assert_eq!(card.symbol(), "[T♡]");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns all the 52 cards, suit by suit from deuce to ace.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card value, 2 is 1 and ace is 13.
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Renders the card with its suit symbol, for example `[A♠]`.
    pub fn symbol(&self) -> String {
        format!("[{}{}]", self.rank, self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardsError::InvalidCardToken(s.to_string());

        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_initial(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace separated list of cards like `"Ah Kd 5c"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardsError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Renders cards with their suit symbols, padding with empty slots up to
/// `total` cards.
///
/// ```
/// # use showdown_cards::{parse_cards, render_cards};
/// let flop = parse_cards("Ah Kd 5c").unwrap();
/// assert_eq!(render_cards(&flop, 5), "[A♡] [K♢] [5♣] [  ] [  ]");
/// ```
pub fn render_cards(cards: &[Card], total: usize) -> String {
    let empty = total.saturating_sub(cards.len());
    cards
        .iter()
        .map(Card::symbol)
        .chain(std::iter::repeat_n("[  ]".to_string(), empty))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The value of a high ace.
    pub const ACE_HIGH: u8 = 13;

    /// The value of an ace played low in a wheel straight.
    pub const ACE_LOW: u8 = 0;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank value in `1..=13`.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the rank symbol.
    pub fn symbol(self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parses a rank symbol, lowercase letters are accepted.
    pub fn from_symbol(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        Rank::ranks().find(|r| r.symbol() == c)
    }

    /// Returns the rank name used in hand descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Deuce => "deuce",
            Rank::Trey => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    /// Returns the plural rank name, `sixes` for six.
    pub fn plural(self) -> String {
        match self {
            Rank::Six => format!("{}es", self.name()),
            _ => format!("{}s", self.name()),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
///
/// Suits never rank against each other, the order is only used to make
/// evaluation deterministic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }

    /// The suit index in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the suit initial used in the card textual form.
    pub fn initial(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    /// Parses a suit initial, uppercase letters are accepted.
    pub fn from_initial(c: char) -> Option<Suit> {
        let c = c.to_ascii_lowercase();
        Suit::suits().find(|s| s.initial() == c)
    }

    /// Returns the suit display symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♡',
            Suit::Diamonds => '♢',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Returns the suit name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial())
    }
}
