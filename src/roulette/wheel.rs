//! The 38-pocket roulette wheel.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

/// Pocket and bet color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Odd numbers.
    Red,
    /// Even numbers, the zeros included.
    Black,
    /// `0` and `00`.
    Green,
}

impl Color {
    /// Returns the lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Green => "green",
        }
    }

    /// Returns whether a bet on this color wins when the ball lands in
    /// `pocket`.
    ///
    /// Bets settle on the pocket number's parity, with both zeros counting
    /// as 0: red wins on odd, black on even, green on `0` or `00`. Black
    /// therefore also wins on the zeros, which are painted green.
    ///
    /// ```
    /// use casino_sim::{Color, Pocket};
    ///
    /// assert!(Color::Red.wins_on(Pocket::Number(7)));
    /// assert!(Color::Black.wins_on(Pocket::DoubleZero));
    /// assert!(!Color::Red.wins_on(Pocket::Zero));
    /// ```
    #[must_use]
    pub const fn wins_on(self, pocket: Pocket) -> bool {
        match self {
            Self::Red => pocket.number() % 2 == 1,
            Self::Black => pocket.number() % 2 == 0,
            Self::Green => pocket.is_zero(),
        }
    }
}

/// A pocket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pocket {
    /// The single zero.
    Zero,
    /// The double zero.
    DoubleZero,
    /// A numbered pocket, 1 through 36.
    Number(u8),
}

impl Pocket {
    /// Returns the pocket number, 0 for both zeros.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Zero | Self::DoubleZero => 0,
            Self::Number(n) => n,
        }
    }

    /// Returns whether this is `0` or `00`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero | Self::DoubleZero)
    }

    /// Returns the painted color: green zeros, red odd numbers, black even
    /// numbers. Used for display; bets settle through [`Color::wins_on`].
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Zero | Self::DoubleZero => Color::Green,
            Self::Number(n) if n % 2 == 1 => Color::Red,
            Self::Number(_) => Color::Black,
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::DoubleZero => f.write_str("00"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A wheel slot: pocket label and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// The pocket label.
    pub pocket: Pocket,
    /// The pocket color.
    pub color: Color,
}

impl Slot {
    /// Creates the slot for `pocket`.
    #[must_use]
    pub const fn new(pocket: Pocket) -> Self {
        Self {
            pocket,
            color: pocket.color(),
        }
    }
}

/// Number of slots on the wheel.
pub const WHEEL_SIZE: usize = 38;

/// An ordered, non-empty set of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    slots: Vec<Slot>,
}

impl Wheel {
    /// Builds the standard wheel: `00`, then 1 through 36, then `0`.
    #[must_use]
    pub fn american() -> Self {
        let mut slots = Vec::with_capacity(WHEEL_SIZE);
        slots.push(Slot::new(Pocket::DoubleZero));
        slots.extend((1..=36).map(|n| Slot::new(Pocket::Number(n))));
        slots.push(Slot::new(Pocket::Zero));
        Self { slots }
    }

    /// Creates a wheel holding exactly the given slots.
    ///
    /// Returns `None` for an empty slot list.
    #[must_use]
    pub fn from_slots(slots: Vec<Slot>) -> Option<Self> {
        if slots.is_empty() {
            None
        } else {
            Some(Self { slots })
        }
    }

    /// Picks a slot uniformly at random.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Slot {
        self.slots[rng.random_range(0..self.slots.len())]
    }

    /// Returns the slots in wheel order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; a wheel has at least one slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::american()
    }
}
