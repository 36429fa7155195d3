//! Game configuration options.

/// How Aces are valued when totalling a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceScoring {
    /// Left to right, an Ace counts 11 if the running total stays at or
    /// below 21, otherwise 1. Aces already counted are never revisited, so
    /// `5, A, K` totals 26.
    #[default]
    Greedy,
    /// Every Ace counts 11, then Aces drop to 1 one at a time while the total
    /// is over 21. `5, A, K` totals 16.
    Optimal,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjduel::{AceScoring, GameOptions};
///
/// let options = GameOptions::default()
///     .with_hand_capacity(10)
///     .with_ai_hit_limit(15)
///     .with_ace_scoring(AceScoring::Optimal)
///     .with_stand_on_21(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum number of cards a hand can hold.
    pub hand_capacity: usize,
    /// The computer draws while its total is at or below this value.
    pub ai_hit_limit: u16,
    /// Ace valuation rule used for every total.
    pub ace_scoring: AceScoring,
    /// End the player's turn at exactly 21. When unset, a player on 21 is
    /// dealt another card without being asked.
    pub stand_on_21: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_capacity: 8,
            ai_hit_limit: 16,
            ace_scoring: AceScoring::Greedy,
            stand_on_21: false,
        }
    }
}

impl GameOptions {
    /// Sets the hand capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_capacity(5);
    /// assert_eq!(options.hand_capacity, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    /// Sets the total at or below which the computer keeps drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_hit_limit(17);
    /// assert_eq!(options.ai_hit_limit, 17);
    /// ```
    #[must_use]
    pub const fn with_ai_hit_limit(mut self, limit: u16) -> Self {
        self.ai_hit_limit = limit;
        self
    }

    /// Sets the Ace valuation rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{AceScoring, GameOptions};
    ///
    /// let options = GameOptions::default().with_ace_scoring(AceScoring::Optimal);
    /// assert_eq!(options.ace_scoring, AceScoring::Optimal);
    /// ```
    #[must_use]
    pub const fn with_ace_scoring(mut self, scoring: AceScoring) -> Self {
        self.ace_scoring = scoring;
        self
    }

    /// Sets whether reaching exactly 21 ends the player's turn.
    #[must_use]
    pub const fn with_stand_on_21(mut self, stand: bool) -> Self {
        self.stand_on_21 = stand;
        self
    }
}
