//! Blackjack engine and state management.

use alloc::string::{String, ToString};
use core::fmt::Display;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, warn};

use crate::balance::BalanceStore;
use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{EmptyDeckError, ShuffleError};
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::Outcome;
use crate::snapshot::BlackjackSnapshot;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::BlackjackState;

/// Status message of an idle table.
pub const WELCOME_MESSAGE: &str = "Place your bet and start the game.";

/// A single-player blackjack table.
///
/// The table owns its shoe and hands; the bankroll lives in the injected
/// [`BalanceStore`]. Use [`TableOptions`] to configure the shoe size, dealer
/// rule, and natural payout.
pub struct Blackjack<S, R = ChaCha8Rng> {
    /// Table options.
    pub options: TableOptions,
    /// Cards in the shoe.
    pub shoe: Deck,
    player: Hand,
    dealer: DealerHand,
    /// Stake of the current round.
    bet_amount: usize,
    /// Money held out of the balance until the round settles.
    pot: usize,
    state: BlackjackState,
    /// Set when a draw failed mid-round; lets `shuffle` refill the shoe.
    shoe_exhausted: bool,
    outcome: Option<Outcome>,
    message: String,
    store: S,
    rng: R,
}

impl<S: BalanceStore> Blackjack<S> {
    /// Creates a new table with a shoe shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use casino_sim::{Blackjack, MemoryBalanceStore, TableOptions};
    ///
    /// let table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 42);
    /// assert_eq!(table.cards_remaining(), 208);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, store: S, seed: u64) -> Self {
        Self::with_rng(options, store, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: BalanceStore, R: Rng> Blackjack<S, R> {
    /// Creates a new table drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(options: TableOptions, store: S, mut rng: R) -> Self {
        let shoe = Deck::shoe(options.decks, &mut rng);

        Self {
            options,
            shoe,
            player: Hand::new(),
            dealer: DealerHand::new(),
            bet_amount: 0,
            pot: 0,
            state: BlackjackState::Idle,
            shoe_exhausted: false,
            outcome: None,
            message: WELCOME_MESSAGE.to_string(),
            store,
            rng,
        }
    }

    /// Clears the board and replaces the shoe with a freshly shuffled one.
    ///
    /// If the shoe ran dry during the current round, only the shoe is
    /// replaced and the round carries on with the hands already dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress and the shoe has not run dry.
    pub fn shuffle(&mut self) -> Result<(), ShuffleError> {
        if self.state.is_in_progress() {
            if !self.shoe_exhausted {
                return Err(self.reject(ShuffleError::RoundInProgress));
            }

            self.rebuild_shoe();
            self.message = "Game in progress...".to_string();
            warn!(cards = self.shoe.len(), "shoe refilled mid-round");
            return Ok(());
        }

        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.message = WELCOME_MESSAGE.to_string();
        self.rebuild_shoe();
        self.state = BlackjackState::Idle;

        info!(cards = self.shoe.len(), "dealer shuffled the deck and cleared the board");
        Ok(())
    }

    /// Returns whether the shoe needs reshuffling based on penetration.
    ///
    /// If penetration is 0, always returns `false`.
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration <= 0.0 {
            return false;
        }

        let total_cards = self.options.decks as usize * DECK_SIZE;
        if total_cards == 0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.shoe.len() as f64 / total_cards as f64);

        used_ratio >= self.options.penetration
    }

    /// Restores the default balance and clears winnings.
    ///
    /// Allowed at any time, including mid-round.
    pub fn reset_balance(&mut self) {
        self.store.reset();
        info!(balance = self.store.balance(), "balance reset");
    }

    /// Returns the current table state.
    pub const fn state(&self) -> BlackjackState {
        self.state
    }

    /// Returns the outcome of the last settled round, if the board still shows it.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current stake.
    pub const fn bet_amount(&self) -> usize {
        self.bet_amount
    }

    /// Returns the amount held for the current round.
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns the spendable balance.
    pub fn balance(&self) -> usize {
        self.store.balance()
    }

    /// Returns the winnings of the last round.
    pub fn winnings(&self) -> usize {
        self.store.winnings()
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the balance store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Captures everything a renderer needs to draw the table.
    pub fn snapshot(&self) -> BlackjackSnapshot {
        let dealer_cards = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if index == 1 && self.dealer.is_hole_hidden() {
                    None
                } else {
                    Some(*card)
                }
            })
            .collect();

        BlackjackSnapshot {
            state: self.state,
            player_cards: self.player.cards().to_vec(),
            dealer_cards,
            hole_hidden: self.dealer.is_hole_hidden(),
            player_score: self.player.value(),
            dealer_score: self.dealer.visible_value(),
            bet_amount: self.bet_amount,
            pot: self.pot,
            balance: self.store.balance(),
            winnings: self.store.winnings(),
            shoe_exhausted: self.shoe_exhausted,
            outcome: self.outcome,
            message: self.message.clone(),
            cards_remaining: self.shoe.len(),
        }
    }

    fn rebuild_shoe(&mut self) {
        self.shoe = Deck::shoe(self.options.decks, &mut self.rng);
        self.shoe_exhausted = false;
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self
            .shoe
            .draw(&mut self.rng)
            .map_err(|err| self.mark_shoe_exhausted(err))?;
        debug!(%card, remaining = self.shoe.len(), "card drawn");
        Ok(card)
    }

    /// Flags the shoe as dry so the next `shuffle` may refill it mid-round.
    fn mark_shoe_exhausted(&mut self, err: EmptyDeckError) -> EmptyDeckError {
        error!("shoe exhausted mid-round, a reshuffle was skipped");
        self.shoe_exhausted = true;
        self.reject(err)
    }

    /// Records a rejected action as the status message and hands the error back.
    fn reject<E: Display>(&mut self, err: E) -> E {
        debug!(%err, state = ?self.state, "action rejected");
        self.message = err.to_string();
        err
    }
}
