//! Blackjack and roulette game-state engines with optional `no_std` support.
//!
//! The crate provides a [`Blackjack`] table and a [`Roulette`] table that
//! play against one shared bankroll held in a [`BalanceStore`]. Each table
//! exposes its state to a renderer through an immutable snapshot.
//!
//! # Example
//!
//! ```
//! use casino_sim::{Blackjack, Color, MemoryBalanceStore, Roulette, TableOptions};
//!
//! let store = MemoryBalanceStore::new();
//! let mut blackjack = Blackjack::new(TableOptions::default(), &store, 42);
//! blackjack.place_bet(100).unwrap();
//! blackjack.start_game().unwrap();
//! assert_eq!(blackjack.cards_remaining(), 204);
//!
//! let mut roulette = Roulette::new(&store, 7);
//! roulette.place_bet(5, Color::Red).unwrap();
//! let spin = roulette.spin().unwrap();
//! assert_eq!(spin.stake, 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod balance;
pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod roulette;
pub mod snapshot;
mod sync;

// Re-export main types
#[cfg(feature = "std")]
pub use balance::FileBalanceStore;
pub use balance::{BalanceStore, Balances, DEFAULT_BALANCE, MemoryBalanceStore};
pub use blackjack::{Blackjack, BlackjackState};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::StoreError;
pub use error::{ActionError, BetError, DealError, EmptyDeckError, ShuffleError, SpinError};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::{PayoutRatio, RoundingMode, TableOptions};
pub use result::{Outcome, RoundResult};
pub use roulette::{Color, Pocket, Roulette, RouletteState, Slot, SpinResult, Wheel};
pub use snapshot::{BlackjackSnapshot, RouletteSnapshot};
