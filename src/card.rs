//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Single-letter abbreviation (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'H' | 'h' | '♥' => Some(Self::Hearts),
            'D' | 'd' | '♦' => Some(Self::Diamonds),
            'C' | 'c' | '♣' => Some(Self::Clubs),
            'S' | 's' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck order (2 through 10, then J, Q, K, A).
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Hard point value: face cards count 10, an ace counts 1.
    ///
    /// Whether an ace is promoted to 11 depends on the rest of the hand; see
    /// [`crate::hand::score`].
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 1,
        }
    }

    /// Returns whether this is a jack, queen, or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Printed label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

/// Parses cards written as rank followed by suit, e.g. `"10H"`, `"as"`, `"TC"`, `"K♠"`.
///
/// ```
/// use bjsolo::{Card, Rank, Suit};
///
/// let card: Card = "10h".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
/// assert_eq!(card.to_string(), "10H");
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().next_back().ok_or(ParseCardError::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        if rank_part.is_empty() {
            return Err(ParseCardError::Rank);
        }

        let rank = Rank::from_label(rank_part).ok_or(ParseCardError::Rank)?;
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::Suit)?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_symbols() {
        assert_eq!(
            "AS".parse::<Card>(),
            Ok(Card::new(Suit::Spades, Rank::Ace))
        );
        assert_eq!(
            "t♦".parse::<Card>(),
            Ok(Card::new(Suit::Diamonds, Rank::Ten))
        );
        assert_eq!(
            " q♣ ".parse::<Card>(),
            Ok(Card::new(Suit::Clubs, Rank::Queen))
        );
    }

    #[test]
    fn rejects_malformed_cards() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("H".parse::<Card>(), Err(ParseCardError::Rank));
        assert_eq!("1H".parse::<Card>(), Err(ParseCardError::Rank));
        assert_eq!("KX".parse::<Card>(), Err(ParseCardError::Suit));
    }

    #[test]
    fn face_cards_are_worth_ten() {
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.points(), 10);
        }
        assert!(Rank::King.is_face());
        assert!(!Rank::Ten.is_face());
        assert_eq!(Rank::Ace.points(), 1);
    }
}
