//! Round result types for blackjack settlement.

/// How a blackjack round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    Bust,
    /// Player won with a natural.
    Blackjack,
    /// Player won (dealer busts or player has the higher value).
    Win,
    /// Dealer has the higher value.
    Lose,
    /// Tie, the stake is returned.
    Push,
}

impl Outcome {
    /// Returns the status line shown once the round is over.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Bust => "Player busts! Dealer wins!",
            Self::Blackjack => "Blackjack! Player wins!",
            Self::Win => "Player wins!",
            Self::Lose => "Dealer wins!",
            Self::Push => "It's a tie!",
        }
    }

    /// Returns whether the player was paid more than the stake.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }
}

/// Result of a settled blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The stake the payout was computed from.
    pub stake: usize,
    /// Amount credited to the balance (stake included).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
