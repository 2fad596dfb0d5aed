//! A single-player blackjack round engine with optional `no_std` support.
//!
//! A [`Round`] holds one deck and two hands and moves through three actions:
//! deal, hit, and stand. A [`Game`] wraps rounds into a session with a seeded
//! shuffler and produces [`TableView`] snapshots for whatever draws the table.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.hit();
//! if game.state() == GameState::RoundActive {
//!     game.stand();
//! }
//! assert_eq!(game.state(), GameState::RoundOver);
//! println!("{}", game.view().unwrap().message);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, shuffle};
pub use error::{DeckError, ParseCardError};
pub use game::{DEALER_STANDS_ON, Game, GameState, Round, TableView};
pub use hand::{BLACKJACK, Hand, score};
pub use options::GameOptions;
pub use outcome::{Outcome, Seat};
