//! A single round of play.

use rand::Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::outcome::Outcome;

use super::GameState;

/// One round: the deck, both hands, and the outcome once decided.
///
/// The round is a plain owned value. Whoever holds it drives it with
/// [`hit`](Self::hit) and [`stand`](Self::stand); starting over means
/// replacing it with a fresh round.
///
/// Every card of the deck is always in exactly one place: still in the deck,
/// in the player's hand, or in the dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) deck: Deck,
    pub(super) player: Hand,
    pub(super) dealer: Hand,
    pub(super) outcome: Option<Outcome>,
}

impl Round {
    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// ```
    /// use bjsolo::Round;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let round = Round::start(&mut ChaCha8Rng::seed_from_u64(3));
    /// assert_eq!(round.player().len(), 2);
    /// assert_eq!(round.dealer().len(), 2);
    /// assert_eq!(round.deck().remaining(), 48);
    /// assert!(round.outcome().is_none());
    /// ```
    #[must_use]
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal(Deck::shuffled(rng))
    }

    /// Deals the opening hands from an undrawn deck.
    ///
    /// The player takes the first two cards, the dealer the next two.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already drawn from `deck`.
    pub fn from_deck(deck: Deck) -> Result<Self, DeckError> {
        if !deck.is_fresh() {
            return Err(DeckError::PartiallyDealt {
                remaining: deck.remaining(),
            });
        }

        Ok(Self::deal(deck))
    }

    fn deal(mut deck: Deck) -> Self {
        // A fresh deck always has the four opening cards.
        let player: Hand = deck.draw().into_iter().chain(deck.draw()).collect();
        let dealer: Hand = deck.draw().into_iter().chain(deck.draw()).collect();

        debug!(
            player = %player,
            player_value = player.value(),
            dealer_up = ?dealer.first(),
            "dealt opening hands"
        );

        Self {
            deck,
            player,
            dealer,
            outcome: None,
        }
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome, or `None` while the round is in play.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the round has an outcome.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the state this round puts the game in.
    #[must_use]
    pub const fn state(&self) -> GameState {
        if self.is_over() {
            GameState::RoundOver
        } else {
            GameState::RoundActive
        }
    }

    /// Draws the next card.
    ///
    /// Rounds start from a full deck and bust long before 52 draws, so this
    /// never returns `None` in play.
    pub(super) fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw();
        trace!(card = ?card, remaining = self.deck.remaining(), "draw");
        card
    }
}
