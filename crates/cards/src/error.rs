// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors returned by cards and deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// All the cards in the deck have been drawn.
    #[error("Deck exhausted")]
    DeckExhausted,
    /// A card token with an unknown rank or suit symbol.
    #[error("Invalid card token {0:?}")]
    InvalidCardToken(String),
}
