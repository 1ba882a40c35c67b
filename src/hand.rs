//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::{ACE, Card};

/// Highest hand value that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Returns the value of a single rank, counting an ace as 11.
#[must_use]
pub const fn card_value(rank: u8) -> u8 {
    match rank {
        ACE => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Computes the best value of a set of cards.
///
/// Every ace starts at 11. When the total goes over 21, a single ace is
/// counted as 1 instead; further aces keep their value of 11, so `A A` is
/// 12 but `A A A` is 23.
///
/// ```
/// use casino_sim::{Card, Suit, hand_value};
///
/// let aces = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 1)];
/// assert_eq!(hand_value(&aces), 12);
/// assert_eq!(hand_value(&[]), 0);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        value = value.saturating_add(card_value(card.rank));
    }

    if value > BLACKJACK && has_ace {
        value -= 10;
    }

    value
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a natural (two cards totalling 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the second card is face down.
    hole_hidden: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_hidden: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-down card, if one is currently hidden.
    #[must_use]
    pub fn hidden_card(&self) -> Option<&Card> {
        if self.hole_hidden {
            self.cards.get(1)
        } else {
            None
        }
    }

    /// Returns whether the hole card is face down.
    #[must_use]
    pub const fn is_hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Turns the hole card face down.
    pub const fn hide_hole(&mut self) {
        self.hole_hidden = true;
    }

    /// Turns the hole card face up.
    pub const fn reveal_hole(&mut self) {
        self.hole_hidden = false;
    }

    /// Calculates the visible value (only the up card while the hole is hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_hidden {
            self.cards.first().map_or(0, |c| hand_value(core::slice::from_ref(c)))
        } else {
            self.value()
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_hidden = false;
    }
}
