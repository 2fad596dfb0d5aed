//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round has been dealt yet.
    NotStarted,
    /// Waiting for the player to hit or stand.
    RoundActive,
    /// The round has an outcome; only a new game changes anything.
    RoundOver,
}

impl GameState {
    /// Returns the state name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::RoundActive => "RoundActive",
            Self::RoundOver => "RoundOver",
        }
    }
}
