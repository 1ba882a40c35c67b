use rand::Rng;
use tracing::debug;

use crate::balance::BalanceStore;
use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::Blackjack;

impl<S: BalanceStore, R: Rng> Blackjack<S, R> {
    fn ensure_player_turn(&mut self) -> Result<(), ActionError> {
        if !self.state.is_in_progress() {
            return Err(self.reject(ActionError::NotInProgress));
        }

        if self.bet_amount == 0 {
            return Err(self.reject(ActionError::NoBetPlaced));
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a bust; the dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, no bet is placed, or the
    /// shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        debug!(%card, value, "player hits");

        if self.player.is_bust() {
            self.settle(Outcome::Bust, self.bet_amount, 0);
        }

        Ok(card)
    }

    /// Player action: Stand (dealer plays out and the round is settled).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, no bet is placed, or the
    /// shoe runs out while the dealer draws. On error nothing changes.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        let mut shoe = self.shoe.clone();
        let dealer = self.dealer_play(&mut shoe)?;
        self.shoe = shoe;
        self.dealer = dealer;

        Ok(self.showdown(self.bet_amount))
    }

    /// Player action: Double down (receive exactly one card, then stand).
    ///
    /// The balance must cover twice the stake. Unless
    /// [`TableOptions::charge_double_down`](crate::TableOptions::charge_double_down)
    /// is set, the extra stake is neither debited nor paid out.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, no bet is placed, the
    /// hand does not hold exactly two cards, the balance is too low, or the
    /// shoe runs out. On error nothing changes.
    pub fn double_down(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        if self.player.len() != 2 {
            return Err(self.reject(ActionError::CannotDouble));
        }

        let balance = self.store.balance();
        if self.bet_amount.saturating_mul(2) > balance {
            return Err(self.reject(ActionError::InsufficientBalance));
        }

        let mut shoe = self.shoe.clone();
        let card = shoe
            .draw(&mut self.rng)
            .map_err(|err| self.mark_shoe_exhausted(err))?;
        let dealer = self.dealer_play(&mut shoe)?;
        self.shoe = shoe;
        self.dealer = dealer;
        self.player.add_card(card);
        debug!(%card, value = self.player.value(), "player doubles down");

        let stake = if self.options.charge_double_down {
            self.store.set_balance(balance - self.bet_amount);
            self.pot += self.bet_amount;
            self.bet_amount.saturating_mul(2)
        } else {
            self.bet_amount
        };

        Ok(self.showdown(stake))
    }
}
