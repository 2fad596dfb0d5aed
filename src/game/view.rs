//! Table snapshots for presentation layers.

use alloc::vec::Vec;

use crate::card::Card;
use crate::outcome::Outcome;

use super::Round;

/// What a renderer may show after an action.
///
/// While the round is in play only the dealer's first card is face up; the
/// others are `None` and should be drawn as card backs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The player's cards.
    pub player: Vec<Card>,
    /// The player's score.
    pub player_score: u8,
    /// The dealer's cards, `None` where face down.
    pub dealer: Vec<Option<Card>>,
    /// The dealer's score, when it may be shown.
    pub dealer_score: Option<u8>,
    /// The outcome, once decided.
    pub outcome: Option<Outcome>,
    /// The outcome message, empty while the round is in play.
    pub message: &'static str,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl TableView {
    /// Takes a snapshot of `round`.
    ///
    /// `reveal_dealer_score` shows the dealer's full score even while the
    /// hole card is hidden.
    #[must_use]
    pub fn of(round: &Round, reveal_dealer_score: bool) -> Self {
        let revealed = round.is_over();
        let dealer = round
            .dealer()
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (revealed || index == 0).then_some(*card))
            .collect();

        Self {
            player: round.player().cards().to_vec(),
            player_score: round.player().value(),
            dealer,
            dealer_score: (revealed || reveal_dealer_score).then(|| round.dealer().value()),
            outcome: round.outcome(),
            message: round.outcome().map_or("", Outcome::message),
            cards_remaining: round.deck().remaining(),
        }
    }

    /// Returns whether any dealer card is face down.
    #[must_use]
    pub fn has_hidden_cards(&self) -> bool {
        self.dealer.iter().any(Option::is_none)
    }
}
