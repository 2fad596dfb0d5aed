//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::options::GameOptions;
use crate::outcome::Outcome;

mod actions;
mod dealer;
mod round;
pub mod state;
pub mod view;

pub use dealer::DEALER_STANDS_ON;
pub use round::Round;
pub use state::GameState;
pub use view::TableView;

/// A blackjack session for one player.
///
/// The game owns the random source and the current [`Round`]. A presentation
/// layer keeps the game, forwards the three user intents
/// ([`new_game`](Self::new_game), [`hit`](Self::hit), [`stand`](Self::stand))
/// and renders [`view`](Self::view) after each one.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    round: Option<Round>,
    rounds_played: u32,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// With the default options the first round is dealt right away.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::RoundActive);
    ///
    /// let idle = Game::new(GameOptions::default().with_deal_on_open(false), 42);
    /// assert_eq!(idle.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self {
            options,
            round: None,
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        if options.deal_on_open {
            game.new_game();
        }

        game
    }

    /// Starts a new round, discarding the current one.
    ///
    /// Valid in every state.
    pub fn new_game(&mut self) -> &Round {
        let round = Round::start(&mut self.rng);
        self.start_round(round)
    }

    /// Starts a prepared round, discarding the current one.
    ///
    /// Use this to replay a known arrangement, e.g. from
    /// [`Deck::stacked`](crate::Deck::stacked).
    pub fn start_round(&mut self, round: Round) -> &Round {
        self.rounds_played += 1;
        debug!(round = self.rounds_played, "new round");
        self.round.insert(round)
    }

    /// Player action: Hit. Returns the card drawn.
    ///
    /// Does nothing and returns `None` when no round is in play.
    pub fn hit(&mut self) -> Option<Card> {
        self.round.as_mut()?.hit()
    }

    /// Player action: Stand. Returns the outcome.
    ///
    /// Does nothing and returns `None` when no round is in play.
    pub fn stand(&mut self) -> Option<Outcome> {
        self.round.as_mut()?.stand()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.round
            .as_ref()
            .map_or(GameState::NotStarted, Round::state)
    }

    /// Returns the current round, if one has been dealt.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the current outcome.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.as_ref().and_then(Round::outcome)
    }

    /// Returns a snapshot of the table for rendering.
    #[must_use]
    pub fn view(&self) -> Option<TableView> {
        self.round
            .as_ref()
            .map(|round| TableView::of(round, self.options.reveal_dealer_score))
    }

    /// Returns how many rounds have been dealt in this game.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}
