//! Hands and hand scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Highest score that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        } else {
            value = value.saturating_add(card.rank.points());
        }
    }

    // Each ace takes 11 while that still fits under 21. Once one ace falls
    // back to 1 every later ace does too, so the order is irrelevant.
    let mut is_soft = false;
    for _ in 0..aces {
        if value <= BLACKJACK - 11 {
            value += 11;
            is_soft = true;
        } else {
            value = value.saturating_add(1);
        }
    }

    (value, is_soft && value <= BLACKJACK)
}

/// Scores a set of cards.
///
/// Face cards count 10 and numbered cards their pip value. Aces are counted
/// last: each one is worth 11 if that keeps the running total at or below 21,
/// otherwise 1.
///
/// ```
/// use bjsolo::{Card, hand::score};
///
/// let cards: Vec<Card> = ["AH", "AS", "9C"].iter().map(|c| c.parse().unwrap()).collect();
/// assert_eq!(score(&cards), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// A hand held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    ///
    /// A bust hand is never soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::*;
    use crate::card::Suit;
    use crate::deck::Deck;

    fn hand(cards: &[&str]) -> Hand {
        cards.iter().map(|c| c.parse().expect("valid card")).collect()
    }

    #[test]
    fn face_cards() {
        assert_eq!(hand(&["KH", "QS"]).value(), 20);
        assert_eq!(hand(&["JD", "10C"]).value(), 20);
    }

    #[test]
    fn soft_ace() {
        let ace_eight = hand(&["AH", "8C"]);
        assert_eq!(ace_eight.value(), 19);
        assert!(ace_eight.is_soft());

        let ace_king = hand(&["AS", "KD"]);
        assert_eq!(ace_king.value(), 21);
        assert!(ace_king.is_soft());
    }

    #[test]
    fn multiple_aces() {
        assert_eq!(hand(&["AH", "AS", "9C"]).value(), 21);
        assert_eq!(hand(&["AH", "AS", "AC", "8D"]).value(), 21);
        assert_eq!(hand(&["AH", "AS"]).value(), 12);
        assert_eq!(hand(&["AH", "AS", "AC", "AD"]).value(), 14);
    }

    #[test]
    fn hard_ace() {
        let h = hand(&["AH", "9C", "5D"]);
        assert_eq!(h.value(), 15);
        assert!(!h.is_soft());
    }

    #[test]
    fn greedy_ace_rule_can_overshoot_with_two_aces() {
        // The first ace takes 11 because 10 + 11 fits; the second can then
        // only add 1.
        let h = hand(&["AH", "AS", "10C"]);
        assert_eq!(h.value(), 22);
        assert!(h.is_bust());
        assert!(!h.is_soft());
    }

    #[test]
    fn score_accepts_any_number_of_aces() {
        let aces = alloc::vec![Card::new(Suit::Spades, Rank::Ace); 300];
        assert_eq!(score(&aces), u8::MAX);
    }

    #[test]
    fn bust() {
        let h = hand(&["10H", "9C", "5D"]);
        assert_eq!(h.value(), 24);
        assert!(h.is_bust());
        assert!(!hand(&["10H", "9C", "2D"]).is_bust());
    }

    #[test]
    fn empty_hand_scores_zero() {
        let h = Hand::new();
        assert!(h.is_empty());
        assert_eq!(h.value(), 0);
        assert!(!h.is_soft());
    }

    #[test]
    fn scoring_is_idempotent() {
        let h = hand(&["AH", "7C", "AD"]);
        let first = h.value();
        assert_eq!(h.value(), first);
        assert_eq!(h.cards().len(), 3);
    }

    #[test]
    fn displays_cards_in_order() {
        assert_eq!(hand(&["10H", "AS"]).to_string(), "10H AS");
        assert_eq!(Hand::new().to_string(), "");
    }

    proptest! {
        #[test]
        fn score_ignores_card_order(
            picks in prop::collection::vec(0..52usize, 0..8),
            rotate in 0..8usize,
        ) {
            let deck = Deck::ordered();
            let mut cards: Vec<Card> = picks.iter().map(|&i| deck.cards()[i]).collect();
            let before = score(&cards);

            cards.reverse();
            prop_assert_eq!(score(&cards), before);
            if !cards.is_empty() {
                let by = rotate % cards.len();
                cards.rotate_left(by);
            }
            prop_assert_eq!(score(&cards), before);
        }
    }
}
