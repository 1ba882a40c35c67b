//! Blackjack table state.

/// Blackjack table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlackjackState {
    /// Fresh or freshly shuffled table.
    #[default]
    Idle,
    /// A bet has been placed and the round can start.
    Betting,
    /// Cards are dealt and the player is acting.
    InProgress,
    /// The round has been settled.
    Resolved,
}

impl BlackjackState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}
