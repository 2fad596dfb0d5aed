//! Error types.
//!
//! Game play itself has no failure modes: actions taken after a round is
//! over are ignored. Errors only arise when building decks or parsing cards.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when arranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card was requested twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// More cards were requested than a deck holds.
    #[error("{0} cards requested but a deck holds 52")]
    TooManyCards(usize),
    /// The deck already had cards drawn from it.
    #[error("deck has been dealt from ({remaining} cards remaining)")]
    PartiallyDealt {
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card")]
    Empty,
    /// Rank was missing or not one of 2-10, T, J, Q, K, A.
    #[error("invalid rank")]
    Rank,
    /// Suit was not one of H, D, C, S.
    #[error("invalid suit")]
    Suit,
}
