//! Round outcomes.

use core::fmt;

/// A participant at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// How a round ended.
///
/// A round still in play has no outcome; see [`crate::Round::outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player went over 21 after a hit.
    PlayerBusts,
    /// The dealer went over 21 while drawing.
    DealerBusts,
    /// The player finished closer to 21.
    PlayerWins,
    /// The dealer finished closer to 21.
    DealerWins,
    /// Both finished on the same score.
    Tie,
}

impl Outcome {
    /// Returns who won, or `None` for a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::DealerBusts | Self::PlayerWins => Some(Seat::Player),
            Self::PlayerBusts | Self::DealerWins => Some(Seat::Dealer),
            Self::Tie => None,
        }
    }

    /// Message shown to the player when the round ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBusts => "Player busts! Dealer wins.",
            Self::DealerBusts => "Dealer busts! Player wins.",
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
