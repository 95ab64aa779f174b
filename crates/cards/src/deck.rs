// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A shuffled deck of cards.
use rand::{prelude::*, rngs::StdRng};

use crate::{Card, CardsError};

/// A cards Deck.
///
/// The deck is shuffled once when created and then dealt one card at a
/// time until all 52 cards have been drawn.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck shuffled with a seeded generator, decks with the same
    /// seed deal the same cards in the same order.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Creates a deck shuffled with entropy from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(&mut StdRng::from_os_rng())
    }

    /// Creates a new deck shuffled with the given generator.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all().collect::<Vec<_>>();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Draws the next card from the deck.
    pub fn draw(&mut self) -> Result<Card, CardsError> {
        self.cards.pop().ok_or(CardsError::DeckExhausted)
    }

    /// Draws `n` cards, fails without drawing if fewer than `n` are left.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, CardsError> {
        if n > self.cards.len() {
            return Err(CardsError::DeckExhausted);
        }

        let start = self.cards.len() - n;
        Ok(self.cards.drain(start..).rev().collect())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Iterator for Deck {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.draw().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cards.len(), Some(self.cards.len()))
    }
}

impl ExactSizeIterator for Deck {}
