//! Table configuration.

use crate::deck::LOW_WATER_MARK;

/// How settlement pays winning seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PayoutMode {
    /// Each seat is paid by the house independently: a push refunds the
    /// bet, a win pays 2x, a natural pays 2.5x.
    #[default]
    Independent,
    /// All bets pool into a shared pot. Pushes are refunded off the top and
    /// the remainder splits among winners by weight, naturals at 3:2
    /// priority over plain wins.
    Pooled,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{PayoutMode, TableOptions};
///
/// let options = TableOptions::default()
///     .with_payout(PayoutMode::Pooled)
///     .with_reshuffle_below(20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Payout mode at settlement.
    pub payout: PayoutMode,
    /// Remaining-card threshold below which the deck is replaced before a
    /// deal. Must stay comfortably above `2 * seats + 2` or the engine can
    /// exhaust the deck mid-round, which it treats as fatal.
    pub reshuffle_below: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            payout: PayoutMode::Independent,
            reshuffle_below: LOW_WATER_MARK,
        }
    }
}

impl TableOptions {
    /// Sets the payout mode.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{PayoutMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_payout(PayoutMode::Pooled);
    /// assert_eq!(options.payout, PayoutMode::Pooled);
    /// ```
    #[must_use]
    pub const fn with_payout(mut self, payout: PayoutMode) -> Self {
        self.payout = payout;
        self
    }

    /// Sets the deck replacement threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_below(20);
    /// assert_eq!(options.reshuffle_below, 20);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, threshold: usize) -> Self {
        self.reshuffle_below = threshold;
        self
    }
}
