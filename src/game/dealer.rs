use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::BLACKJACK;
use crate::outcome::Outcome;

use super::Round;

/// The dealer draws until reaching this score, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while under 17 and stands on every 17, including a
    /// soft one. Returns the cards drawn, which may be none. Only
    /// [`stand`](Self::stand) plays the dealer; a finished round draws
    /// nothing.
    pub(super) fn dealer_play(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();
        if self.is_over() {
            return drawn_cards;
        }

        while self.dealer.value() < DEALER_STANDS_ON {
            let Some(card) = self.draw() else {
                break;
            };
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        drawn_cards
    }

    /// Compares the two hands as they stand.
    ///
    /// A dealer over 21 loses outright; otherwise the higher score wins and
    /// equal scores tie. The player's own bust is decided on the hit, so it
    /// is not considered here.
    #[must_use]
    pub fn settle(&self) -> Outcome {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        if dealer_value > BLACKJACK {
            Outcome::DealerBusts
        } else if player_value > dealer_value {
            Outcome::PlayerWins
        } else if player_value < dealer_value {
            Outcome::DealerWins
        } else {
            Outcome::Tie
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::deck::Deck;
    use crate::{Card, Outcome, Round};

    fn cards(draws: &[&str]) -> Vec<Card> {
        draws.iter().map(|c| c.parse().expect("valid card")).collect()
    }

    fn round(draws: &[&str]) -> Round {
        Round::from_deck(Deck::stacked(&cards(draws)).expect("distinct cards")).expect("fresh deck")
    }

    #[test]
    fn dealer_draws_to_17() {
        let mut round = round(&["10H", "8C", "5D", "6S", "2H", "3C", "9D"]);

        let drawn = round.dealer_play();
        assert_eq!(drawn, cards(&["2H", "3C", "9D"]));
        assert_eq!(round.dealer().value(), 25);
    }

    #[test]
    fn dealer_stands_on_soft_17() {
        let mut round = round(&["10H", "8C", "AD", "6S", "5H"]);

        assert!(round.dealer().is_soft());
        assert!(round.dealer_play().is_empty());
        assert_eq!(round.dealer().value(), 17);
    }

    #[test]
    fn dealer_stands_on_hard_17() {
        let mut round = round(&["10H", "8C", "10D", "7S", "5H"]);
        assert!(round.dealer_play().is_empty());
    }

    #[test]
    fn settle_compares_scores() {
        assert_eq!(round(&["10H", "9C", "10D", "8S"]).settle(), Outcome::PlayerWins);
        assert_eq!(round(&["10H", "7C", "10D", "9S"]).settle(), Outcome::DealerWins);
        assert_eq!(round(&["10H", "8C", "10D", "8S"]).settle(), Outcome::Tie);
    }

    #[test]
    fn finished_round_dealer_does_not_draw() {
        let mut round = round(&["10H", "9C", "2D", "2S", "5H", "4C", "AS"]);
        assert!(round.hit().is_some());
        assert_eq!(round.outcome(), Some(Outcome::PlayerBusts));

        let frozen = round.clone();
        assert!(round.dealer_play().is_empty());
        assert_eq!(round, frozen);
        assert_eq!(round.dealer().len(), 2);
        assert_eq!(round.deck().remaining(), 47);
    }

    #[test]
    fn dealer_bust_beats_any_player_score() {
        let mut round = round(&["10H", "2C", "10D", "6S", "KH"]);

        assert_eq!(round.dealer_play().len(), 1);
        assert_eq!(round.settle(), Outcome::DealerBusts);
    }
}
