//! Roulette engine: color bets on a single spin.

use alloc::string::{String, ToString};
use core::fmt::Display;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::balance::BalanceStore;
use crate::blackjack::WELCOME_MESSAGE;
use crate::error::{BetError, SpinError};
use crate::snapshot::RouletteSnapshot;

pub mod wheel;

pub use wheel::{Color, Pocket, Slot, WHEEL_SIZE, Wheel};

/// Roulette table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RouletteState {
    /// No chips on the table.
    #[default]
    Idle,
    /// Chips are on the table for the next spin.
    Betting,
    /// The wheel is turning; bets are closed.
    ///
    /// Held only for the duration of [`Roulette::spin`], so a caller never
    /// observes it. It is an internal guard, not a phase a renderer sees.
    Spinning,
}

impl RouletteState {
    /// Returns whether a spin is underway.
    #[must_use]
    pub const fn is_spinning(self) -> bool {
        matches!(self, Self::Spinning)
    }
}

/// Result of a resolved spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResult {
    /// The winning slot.
    pub slot: Slot,
    /// The color that was bet on.
    pub bet_color: Color,
    /// The pot that rode on the spin.
    pub stake: usize,
    /// Whether the bet won.
    pub won: bool,
    /// Amount credited to the balance.
    pub payout: usize,
}

/// A single-player roulette table.
///
/// Only one color bet is tracked: every bet adds to the pot, and the color
/// of the latest bet is the one the whole pot rides on.
pub struct Roulette<S, R = ChaCha8Rng> {
    wheel: Wheel,
    pot: usize,
    bet_color: Option<Color>,
    state: RouletteState,
    last_spin: Option<SpinResult>,
    message: String,
    store: S,
    rng: R,
}

impl<S: BalanceStore> Roulette<S> {
    /// Creates a new table with a standard wheel, seeded for reproducibility.
    #[must_use]
    pub fn new(store: S, seed: u64) -> Self {
        Self::with_rng(Wheel::american(), store, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: BalanceStore, R: Rng> Roulette<S, R> {
    /// Creates a new table with the given wheel and random source.
    #[must_use]
    pub fn with_rng(wheel: Wheel, store: S, rng: R) -> Self {
        Self {
            wheel,
            pot: 0,
            bet_color: None,
            state: RouletteState::Idle,
            last_spin: None,
            message: WELCOME_MESSAGE.to_string(),
            store,
            rng,
        }
    }

    /// Places `amount` on `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wheel is spinning, the bet is zero, or the
    /// balance cannot cover it.
    pub fn place_bet(&mut self, amount: usize, color: Color) -> Result<(), BetError> {
        if self.state.is_spinning() {
            return Err(self.reject(BetError::RoundInProgress));
        }

        if amount == 0 {
            return Err(self.reject(BetError::ZeroBet));
        }

        let balance = self.store.balance();
        if amount > balance {
            return Err(self.reject(BetError::InsufficientBalance));
        }

        self.store.set_balance(balance - amount);
        self.pot += amount;
        self.bet_color = Some(color);
        self.state = RouletteState::Betting;

        debug!(amount, color = color.name(), pot = self.pot, "roulette bet placed");
        Ok(())
    }

    /// Spins the wheel and settles the pot.
    ///
    /// The bet settles by [`Color::wins_on`], paying twice the pot on a win.
    /// The pot is emptied either way and the table returns to idle; the
    /// result stays available through [`Roulette::last_spin`].
    ///
    /// # Errors
    ///
    /// Returns an error if a spin is already underway or nothing is bet.
    pub fn spin(&mut self) -> Result<SpinResult, SpinError> {
        if self.state.is_spinning() {
            return Err(self.reject(SpinError::RoundInProgress));
        }

        let Some(bet_color) = self.bet_color.filter(|_| self.pot > 0) else {
            return Err(self.reject(SpinError::NoBetPlaced));
        };

        self.state = RouletteState::Spinning;
        self.store.set_winnings(0);

        let slot = self.wheel.spin(&mut self.rng);
        let won = bet_color.wins_on(slot.pocket);
        let stake = self.pot;
        let payout = if won { stake.saturating_mul(2) } else { 0 };

        if won {
            let balance = self.store.balance();
            self.store.set_balance(balance.saturating_add(payout));
        }
        self.store.set_winnings(payout);

        let result = SpinResult {
            slot,
            bet_color,
            stake,
            won,
            payout,
        };

        self.pot = 0;
        self.last_spin = Some(result);
        self.state = RouletteState::Idle;
        self.message = if won {
            "Congratulations! You won!"
        } else {
            "Sorry, you lost."
        }
        .to_string();

        info!(
            pocket = %slot.pocket,
            color = slot.color.name(),
            bet = bet_color.name(),
            stake,
            payout,
            "wheel spun"
        );
        Ok(result)
    }

    /// Restores the default balance and clears winnings.
    pub fn reset_balance(&mut self) {
        self.store.reset();
        info!(balance = self.store.balance(), "balance reset");
    }

    /// Returns the current table state.
    pub const fn state(&self) -> RouletteState {
        self.state
    }

    /// Returns the wheel.
    pub const fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Returns the amount riding on the next spin.
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns the color of the latest bet.
    pub const fn bet_color(&self) -> Option<Color> {
        self.bet_color
    }

    /// Returns the result of the last spin.
    pub const fn last_spin(&self) -> Option<SpinResult> {
        self.last_spin
    }

    /// Returns the status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the spendable balance.
    pub fn balance(&self) -> usize {
        self.store.balance()
    }

    /// Returns the winnings of the last spin.
    pub fn winnings(&self) -> usize {
        self.store.winnings()
    }

    /// Returns the balance store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Captures everything a renderer needs to draw the table.
    pub fn snapshot(&self) -> RouletteSnapshot {
        RouletteSnapshot {
            state: self.state,
            wheel: self.wheel.slots().to_vec(),
            pot: self.pot,
            bet_color: self.bet_color,
            balance: self.store.balance(),
            winnings: self.store.winnings(),
            last_spin: self.last_spin,
            message: self.message.clone(),
        }
    }

    fn reject<E: Display>(&mut self, err: E) -> E {
        debug!(%err, state = ?self.state, "roulette action rejected");
        self.message = err.to_string();
        err
    }
}
