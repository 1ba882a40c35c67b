//! Immutable views of a table for rendering.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::blackjack::BlackjackState;
use crate::card::Card;
use crate::result::Outcome;
use crate::roulette::{Color, RouletteState, Slot, SpinResult};

/// Everything needed to draw a blackjack table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackjackSnapshot {
    /// Table state.
    pub state: BlackjackState,
    /// Player cards in deal order.
    pub player_cards: Vec<Card>,
    /// Dealer cards in deal order, `None` for a face-down card.
    pub dealer_cards: Vec<Option<Card>>,
    /// Whether the dealer's second card is face down.
    pub hole_hidden: bool,
    /// Value of the player's hand.
    pub player_score: u8,
    /// Value of the dealer's visible cards.
    pub dealer_score: u8,
    /// Current stake.
    pub bet_amount: usize,
    /// Amount held for the round.
    pub pot: usize,
    /// Spendable balance.
    pub balance: usize,
    /// Winnings of the last round.
    pub winnings: usize,
    /// Whether the shoe ran dry during the current round.
    pub shoe_exhausted: bool,
    /// Outcome of the last settled round.
    pub outcome: Option<Outcome>,
    /// Status message.
    pub message: String,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
}

impl BlackjackSnapshot {
    /// Dealer score as displayed: `"7 ?"` while the hole card is hidden.
    #[must_use]
    pub fn dealer_score_label(&self) -> String {
        if self.hole_hidden {
            format!("{} ?", self.dealer_score)
        } else {
            self.dealer_score.to_string()
        }
    }

    /// Whether a bet can be placed.
    #[must_use]
    pub const fn can_bet(&self) -> bool {
        !self.state.is_in_progress()
    }

    /// Whether a round can be dealt.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        !self.state.is_in_progress() && self.bet_amount > 0
    }

    /// Whether the player may hit.
    #[must_use]
    pub const fn can_hit(&self) -> bool {
        self.state.is_in_progress() && self.bet_amount > 0
    }

    /// Whether the player may stand.
    #[must_use]
    pub const fn can_stand(&self) -> bool {
        self.can_hit()
    }

    /// Whether the player may double down.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.can_hit() && self.player_cards.len() == 2
    }

    /// Whether the shoe may be shuffled: between rounds, or mid-round once
    /// the shoe has run dry.
    #[must_use]
    pub const fn can_shuffle(&self) -> bool {
        !self.state.is_in_progress() || self.shoe_exhausted
    }
}

/// Everything needed to draw a roulette table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouletteSnapshot {
    /// Table state.
    pub state: RouletteState,
    /// Wheel slots in wheel order.
    pub wheel: Vec<Slot>,
    /// Amount riding on the next spin.
    pub pot: usize,
    /// Color of the outstanding bet.
    pub bet_color: Option<Color>,
    /// Spendable balance.
    pub balance: usize,
    /// Winnings of the last spin.
    pub winnings: usize,
    /// Result of the last spin.
    pub last_spin: Option<SpinResult>,
    /// Status message.
    pub message: String,
}

impl RouletteSnapshot {
    /// Whether a bet can be placed. Always `true` for a snapshot taken
    /// between calls, since the spinning guard never outlives `spin`.
    #[must_use]
    pub const fn can_bet(&self) -> bool {
        !self.state.is_spinning()
    }

    /// Whether the wheel can be spun.
    #[must_use]
    pub const fn can_spin(&self) -> bool {
        !self.state.is_spinning() && self.pot > 0
    }
}
