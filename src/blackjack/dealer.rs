use alloc::string::ToString;

use rand::Rng;
use tracing::{debug, info};

use crate::balance::BalanceStore;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::{BLACKJACK, DealerHand};
use crate::result::{Outcome, RoundResult};

use super::{Blackjack, BlackjackState};

impl<S: BalanceStore, R: Rng> Blackjack<S, R> {
    /// Plays the dealer's hand against `shoe` without touching the table.
    ///
    /// The hole card is revealed and the dealer draws while below
    /// `dealer_stands_on`. Soft and hard totals are treated alike.
    pub(super) fn dealer_play(&mut self, shoe: &mut Deck) -> Result<DealerHand, EmptyDeckError> {
        let mut dealer = self.dealer.clone();
        dealer.reveal_hole();

        while dealer.value() < self.options.dealer_stands_on {
            let card = shoe
                .draw(&mut self.rng)
                .map_err(|err| self.mark_shoe_exhausted(err))?;
            dealer.add_card(card);
        }

        debug!(
            cards = dealer.len(),
            value = dealer.value(),
            "dealer stands"
        );
        Ok(dealer)
    }

    /// Compares the final hands and settles the round.
    ///
    /// A dealer bust or a higher player value wins: a natural pays the stake
    /// plus the configured ratio, anything else pays twice the stake. A lower
    /// value loses the stake and a tie returns it.
    pub(super) fn showdown(&mut self, stake: usize) -> RoundResult {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let (outcome, payout) = if player_value > BLACKJACK {
            (Outcome::Bust, 0)
        } else if dealer_value > BLACKJACK || player_value > dealer_value {
            if self.player.is_natural() {
                let bonus = self
                    .options
                    .blackjack_pays
                    .apply(stake, self.options.rounding_blackjack);
                (Outcome::Blackjack, stake.saturating_add(bonus))
            } else {
                (Outcome::Win, stake.saturating_mul(2))
            }
        } else if player_value < dealer_value {
            (Outcome::Lose, 0)
        } else {
            (Outcome::Push, stake)
        };

        self.settle(outcome, stake, payout)
    }

    /// Credits the payout, clears the pot, and closes the round.
    pub(super) fn settle(&mut self, outcome: Outcome, stake: usize, payout: usize) -> RoundResult {
        if payout > 0 {
            let balance = self.store.balance();
            self.store.set_balance(balance.saturating_add(payout));
        }

        if outcome.is_player_win() {
            self.store.set_winnings(payout);
        }

        self.dealer.reveal_hole();
        self.pot = 0;
        self.outcome = Some(outcome);
        self.state = BlackjackState::Resolved;
        self.message = outcome.message().to_string();

        let result = RoundResult {
            outcome,
            stake,
            payout,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };

        info!(
            ?outcome,
            stake,
            payout,
            player = result.player_value,
            dealer = result.dealer_value,
            balance = self.store.balance(),
            "round settled"
        );
        result
    }
}
