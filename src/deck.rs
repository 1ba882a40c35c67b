//! The card shoe.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::EmptyDeckError;

/// An ordered multiset of cards.
///
/// Cards are drawn from a uniformly random position rather than popped from
/// the top, so the order of the remaining cards is kept intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `num_decks` standard decks in default order.
    ///
    /// Each sub-deck holds one card per (suit, rank) pair, suits in
    /// [`Suit::ALL`] order and ranks in [`RANKS`] order.
    ///
    /// ```
    /// use casino_sim::Deck;
    ///
    /// assert_eq!(Deck::build(4).len(), 208);
    /// ```
    #[must_use]
    pub fn build(num_decks: u8) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in RANKS {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Builds and shuffles a shoe with the given number of decks.
    #[must_use]
    pub fn shoe<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut deck = Self::build(num_decks);
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck holding exactly the given cards, in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns a card chosen uniformly from the remaining cards.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, EmptyDeckError> {
        if self.cards.is_empty() {
            return Err(EmptyDeckError);
        }

        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
