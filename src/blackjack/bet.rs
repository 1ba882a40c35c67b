use alloc::string::ToString;

use rand::Rng;
use tracing::{debug, error, info};

use crate::balance::BalanceStore;
use crate::error::{BetError, DealError, EmptyDeckError};

use super::{Blackjack, BlackjackState};

/// Cards dealt at the start of a round: two each, alternating.
const INITIAL_DEAL: usize = 4;

impl<S: BalanceStore, R: Rng> Blackjack<S, R> {
    /// Places a bet for the next round.
    ///
    /// The amount leaves the balance immediately and joins the pot. Betting
    /// again before the deal adds to the pot and makes the latest amount the
    /// stake.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the bet is zero, or the
    /// balance cannot cover it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state.is_in_progress() {
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
        self.bet_amount = amount;
        self.pot += amount;
        self.state = BlackjackState::Betting;

        debug!(amount, pot = self.pot, balance = balance - amount, "bet placed");
        Ok(())
    }

    /// Deals a new round: player, dealer, player, dealer.
    ///
    /// The dealer's second card stays face down unless it is an ace or a
    /// ten-valued card, in which case it is shown straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, a round is already in
    /// progress, or the shoe cannot cover the deal.
    pub fn start_game(&mut self) -> Result<(), DealError> {
        if self.bet_amount == 0 {
            return Err(self.reject(DealError::NoBetPlaced));
        }

        if self.state.is_in_progress() {
            return Err(self.reject(DealError::RoundInProgress));
        }

        if self.needs_reshuffle() {
            self.rebuild_shoe();
            info!(cards = self.shoe.len(), "penetration reached, shoe reshuffled");
        }

        if self.shoe.len() < INITIAL_DEAL {
            error!(remaining = self.shoe.len(), "not enough cards to deal");
            return Err(self.reject(DealError::EmptyDeck(EmptyDeckError)));
        }

        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.shoe_exhausted = false;
        self.store.set_winnings(0);

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        let shows_hole = self
            .dealer
            .cards()
            .get(1)
            .is_some_and(|card| card.is_ace() || card.is_ten_value());
        if !shows_hole {
            self.dealer.hide_hole();
        }

        self.state = BlackjackState::InProgress;
        self.message = "Game in progress...".to_string();

        info!(
            bet = self.bet_amount,
            player = self.player.value(),
            dealer_up = self.dealer.visible_value(),
            hole_hidden = self.dealer.is_hole_hidden(),
            "round dealt"
        );
        Ok(())
    }
}
