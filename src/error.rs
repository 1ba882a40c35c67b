//! Error types for game operations.
//!
//! Every rejected action leaves the table untouched; the `Display` text of
//! the error doubles as the status message shown to the player.

use thiserror::Error;

/// The shoe ran out of cards.
///
/// A full shoe covers any single round, so this only happens when a reshuffle
/// was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck is empty, shuffle the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is being played.
    #[error("cannot make bets while the game is in progress")]
    RoundInProgress,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the balance.
    #[error("insufficient balance")]
    InsufficientBalance,
}

/// Errors that can occur when starting a blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No bet has been placed.
    #[error("place a bet before starting the game")]
    NoBetPlaced,
    /// The current round has not finished.
    #[error("finish the current round before starting a new game")]
    RoundInProgress,
    /// Not enough cards in the shoe.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is being played.
    #[error("start a new game first")]
    NotInProgress,
    /// No bet has been placed.
    #[error("place a bet before drawing cards")]
    NoBetPlaced,
    /// Double down needs exactly the two dealt cards.
    #[error("double down is only available after the first two cards are dealt")]
    CannotDouble,
    /// Balance cannot cover the doubled stake.
    #[error("insufficient balance for double down")]
    InsufficientBalance,
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// A round is being played.
    #[error("cannot shuffle while a game is in progress")]
    RoundInProgress,
}

/// Errors that can occur when spinning the roulette wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpinError {
    /// The pot is empty.
    #[error("place a bet before spinning")]
    NoBetPlaced,
    /// The wheel is already spinning. Not observable through exclusive
    /// access to the table.
    #[error("finish the current round before starting a new game")]
    RoundInProgress,
}

/// Errors raised by durable balance storage.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("balance file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file holds malformed data.
    #[error("balance file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
