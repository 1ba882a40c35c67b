//! Table configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves up.
    Nearest,
}

/// A payout ratio expressed as `numerator : denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Units won.
    pub numerator: usize,
    /// Units staked.
    pub denominator: usize,
}

impl PayoutRatio {
    /// The classic 3:2 natural payout.
    pub const THREE_TO_TWO: Self = Self::new(3, 2);
    /// The reduced 6:5 natural payout.
    pub const SIX_TO_FIVE: Self = Self::new(6, 5);

    /// Creates a new ratio.
    #[must_use]
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Applies the ratio to a stake, rounding the result with `mode`.
    ///
    /// A zero denominator pays nothing.
    ///
    /// ```
    /// use casino_sim::{PayoutRatio, RoundingMode};
    ///
    /// let ratio = PayoutRatio::THREE_TO_TWO;
    /// assert_eq!(ratio.apply(5, RoundingMode::Down), 7);
    /// assert_eq!(ratio.apply(5, RoundingMode::Up), 8);
    /// assert_eq!(ratio.apply(5, RoundingMode::Nearest), 8);
    /// ```
    #[must_use]
    pub const fn apply(self, stake: usize, mode: RoundingMode) -> usize {
        if self.denominator == 0 {
            return 0;
        }

        let scaled = stake.saturating_mul(self.numerator);
        match mode {
            RoundingMode::Down => scaled / self.denominator,
            RoundingMode::Up => scaled.div_ceil(self.denominator),
            RoundingMode::Nearest => {
                scaled.saturating_mul(2).saturating_add(self.denominator) / (self.denominator * 2)
            }
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use casino_sim::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_dealer_stands_on(17)
///     .with_penetration(0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Dealer keeps drawing while below this value.
    pub dealer_stands_on: u8,
    /// Payout ratio for a natural, on top of the returned stake.
    pub blackjack_pays: PayoutRatio,
    /// Rounding mode for natural payouts.
    pub rounding_blackjack: RoundingMode,
    /// Fraction of the shoe dealt before `start_game` reshuffles.
    /// 0 to disable reshuffling.
    pub penetration: f64,
    /// Whether doubling down debits and pays a doubled stake.
    pub charge_double_down: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            dealer_stands_on: 17,
            blackjack_pays: PayoutRatio::THREE_TO_TWO,
            rounding_blackjack: RoundingMode::Down,
            penetration: 0.75,
            charge_double_down: false,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use casino_sim::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the value the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use casino_sim::{PayoutRatio, TableOptions};
    ///
    /// let options = TableOptions::default().with_blackjack_pays(PayoutRatio::SIX_TO_FIVE);
    /// assert_eq!(options.blackjack_pays, PayoutRatio::new(6, 5));
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for natural payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the shoe penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use casino_sim::TableOptions;
    ///
    /// let options = TableOptions::default().with_penetration(0.0);
    /// assert_eq!(options.penetration, 0.0);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets whether doubling down charges a second stake.
    #[must_use]
    pub const fn with_charge_double_down(mut self, charge: bool) -> Self {
        self.charge_double_down = charge;
        self
    }
}
