use tracing::debug;

use crate::card::Card;
use crate::outcome::Outcome;

use super::Round;

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the card drawn. Going over 21 ends the round with
    /// [`Outcome::PlayerBusts`]. Once the round is over this does nothing and
    /// returns `None`.
    pub fn hit(&mut self) -> Option<Card> {
        if self.is_over() {
            return None;
        }

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            debug!(player = %self.player, value = self.player.value(), "player busts");
            self.outcome = Some(Outcome::PlayerBusts);
        }

        Some(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out its hand and the round is settled. Returns
    /// the outcome, or `None` if the round was already over.
    pub fn stand(&mut self) -> Option<Outcome> {
        if self.is_over() {
            return None;
        }

        let drawn = self.dealer_play();
        let outcome = self.settle();
        debug!(
            dealer = %self.dealer,
            dealer_drew = drawn.len(),
            player_value = self.player.value(),
            dealer_value = self.dealer.value(),
            %outcome,
            "round settled"
        );

        self.outcome = Some(outcome);
        Some(outcome)
    }
}
