//! Game configuration options.

/// Configuration options for a [`Game`](crate::Game).
///
/// Rules are fixed (one deck, dealer stands on all 17s); the options only
/// control how the session presents itself.
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_deal_on_open(false)
///     .with_reveal_dealer_score(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether a new game deals its first round immediately.
    pub deal_on_open: bool,
    /// Whether views show the dealer's score before the round is over.
    pub reveal_dealer_score: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deal_on_open: true,
            reveal_dealer_score: false,
        }
    }
}

impl GameOptions {
    /// Sets whether a new game deals its first round immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_on_open(false);
    /// assert!(!options.deal_on_open);
    /// ```
    #[must_use]
    pub const fn with_deal_on_open(mut self, deal: bool) -> Self {
        self.deal_on_open = deal;
        self
    }

    /// Sets whether views show the dealer's score while the round is active.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_dealer_score(true);
    /// assert!(options.reveal_dealer_score);
    /// ```
    #[must_use]
    pub const fn with_reveal_dealer_score(mut self, reveal: bool) -> Self {
        self.reveal_dealer_score = reveal;
        self
    }
}
