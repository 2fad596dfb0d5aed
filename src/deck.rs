//! The 52-card deck and the shuffler.
//!
//! A [`Deck`] never moves its cards: it keeps an immutable arrangement and a
//! cursor counting how many cards are still undealt. Drawing takes the card
//! just below the cursor, so the end of the arrangement is the top of the deck.

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`. Every permutation is equally likely
/// given a uniform `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// A single 52-card deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    order: [Card; DECK_SIZE],
    remaining: usize,
}

impl Deck {
    /// Creates an unshuffled deck.
    ///
    /// Cards are grouped by suit (hearts, diamonds, clubs, spades), each suit
    /// running 2 through 10, then J, Q, K, A. The first draw is therefore the
    /// ace of spades.
    ///
    /// ```
    /// use bjsolo::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::ordered();
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck.draw(), Some(Card::new(Suit::Spades, Rank::Ace)));
    /// ```
    #[must_use]
    pub fn ordered() -> Self {
        let order = core::array::from_fn(|i| {
            Card::new(Suit::ALL[i / Rank::ALL.len()], Rank::ALL[i % Rank::ALL.len()])
        });

        Self {
            order,
            remaining: DECK_SIZE,
        }
    }

    /// Creates a deck in uniformly random order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        shuffle(&mut deck.order, rng);
        deck
    }

    /// Creates a full deck whose next draws are exactly `draws`, in order.
    ///
    /// Cards not listed stay below them in their unshuffled order.
    ///
    /// # Errors
    ///
    /// Returns an error if a card is listed twice or more than 52 cards are
    /// given.
    pub fn stacked(draws: &[Card]) -> Result<Self, DeckError> {
        if draws.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards(draws.len()));
        }

        let mut deck = Self::ordered();
        for (placed, &card) in draws.iter().enumerate() {
            let top = DECK_SIZE - 1 - placed;
            let pos = deck.order[..=top]
                .iter()
                .position(|&c| c == card)
                .ok_or(DeckError::DuplicateCard(card))?;
            deck.order[pos..=top].rotate_left(1);
        }

        Ok(deck)
    }

    /// Draws the top card, or `None` once every card has been dealt.
    pub fn draw(&mut self) -> Option<Card> {
        self.remaining = self.remaining.checked_sub(1)?;
        Some(self.order[self.remaining])
    }

    /// Returns the undealt cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.order[..self.remaining]
    }

    /// Returns the cards drawn so far, most recent first.
    #[must_use]
    pub fn dealt_cards(&self) -> &[Card] {
        &self.order[self.remaining..]
    }

    /// Returns the next card to be drawn without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards().last()
    }

    /// Number of undealt cards.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of cards drawn so far.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        DECK_SIZE - self.remaining
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Returns whether no card has been drawn yet.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.remaining == DECK_SIZE
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn card(s: &str) -> Card {
        s.parse().expect("valid card")
    }

    #[test]
    fn ordered_deck_is_complete() {
        let deck = Deck::ordered();
        assert_eq!(deck.cards().len(), DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|c| **c == Card::new(suit, rank))
                    .count();
                assert_eq!(count, 1, "{rank} of {suit}");
            }
        }

        assert_eq!(deck.cards()[0], card("2H"));
        assert_eq!(deck.cards()[12], card("AH"));
        assert_eq!(deck.cards()[13], card("2D"));
    }

    #[test]
    fn draw_moves_cursor() {
        let mut deck = Deck::ordered();
        assert!(deck.is_fresh());
        assert_eq!(deck.peek(), Some(&card("AS")));

        assert_eq!(deck.draw(), Some(card("AS")));
        assert_eq!(deck.draw(), Some(card("KS")));
        assert_eq!(deck.remaining(), 50);
        assert_eq!(deck.dealt(), 2);
        assert_eq!(deck.dealt_cards(), &[card("KS"), card("AS")]);
        assert!(!deck.is_fresh());
    }

    #[test]
    fn exhausted_deck_draws_nothing() {
        let mut deck = Deck::ordered();
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_some());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.dealt(), DECK_SIZE);
    }

    #[test]
    fn stacked_deck_draws_in_order() {
        let draws = [card("10H"), card("9C"), card("AS"), card("2H")];
        let mut deck = Deck::stacked(&draws).unwrap();

        for expected in draws {
            assert_eq!(deck.draw(), Some(expected));
        }
        assert_eq!(deck.remaining(), DECK_SIZE - draws.len());

        // Undealt cards keep their unshuffled order.
        assert_eq!(deck.cards()[0], card("3H"));
        assert_eq!(deck.peek(), Some(&card("KS")));
    }

    #[test]
    fn stacked_deck_rejects_bad_arrangements() {
        assert_eq!(
            Deck::stacked(&[card("5D"), card("6D"), card("5D")]),
            Err(DeckError::DuplicateCard(card("5D")))
        );

        let too_many: Vec<Card> = Deck::ordered()
            .cards()
            .iter()
            .copied()
            .chain([card("2H")])
            .collect();
        assert_eq!(
            Deck::stacked(&too_many),
            Err(DeckError::TooManyCards(DECK_SIZE + 1))
        );
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        let c = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::ordered());
    }

    #[test]
    fn shuffle_accepts_trait_object_rng() {
        let mut seeded = ChaCha8Rng::seed_from_u64(7);
        let rng: &mut dyn RngCore = &mut seeded;

        assert_eq!(
            Deck::shuffled(rng),
            Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7))
        );
    }

    #[test]
    fn shuffle_handles_short_slices() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [9]);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(
            mut items in prop::collection::vec(any::<u8>(), 0..64),
            seed in any::<u64>(),
        ) {
            let mut expected = items.clone();
            shuffle(&mut items, &mut ChaCha8Rng::seed_from_u64(seed));

            let mut actual = items;
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn shuffled_deck_keeps_every_card(seed in any::<u64>()) {
            let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
            for reference in Deck::ordered().cards() {
                prop_assert!(deck.cards().contains(reference));
            }
        }
    }
}
