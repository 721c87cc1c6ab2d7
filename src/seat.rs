//! Per-seat player state.

use crate::card::Card;
use crate::hand::{hand_value, is_natural};
use crate::result::Outcome;

/// A seat's status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// No round in progress for this seat.
    Idle,
    /// Waiting to act (or acting).
    Active,
    /// The seat has stood.
    Stand,
    /// The hand went over 21.
    Bust,
    /// Dealt a natural blackjack; no further action this round.
    Blackjack,
}

/// A seat at the table.
///
/// Chips persist across rounds; `bet`, `hand`, `status`, and `result` are
/// per-round and cleared by the round reset.
#[derive(Debug, Clone)]
pub struct Seat {
    /// Display name.
    pub name: String,
    /// Chip balance, in smallest currency units. Never goes negative: bets
    /// are debited up front and only credits happen at settlement.
    pub chips: u64,
    /// Current round wager; zero outside an active bet.
    pub bet: u64,
    /// Cards in deal order. Order is cosmetic, totals ignore it.
    pub hand: Vec<Card>,
    /// Status within the current round.
    pub status: SeatStatus,
    /// Settlement outcome; `None` until the round settles.
    pub result: Option<Outcome>,
}

impl Seat {
    pub(crate) const fn new(name: String, chips: u64) -> Self {
        Self {
            name,
            chips,
            bet: 0,
            hand: Vec::new(),
            status: SeatStatus::Idle,
            result: None,
        }
    }

    /// Hand total with soft-ace reduction.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.hand)
    }

    /// Whether the seat was dealt a natural blackjack.
    #[must_use]
    pub fn has_natural(&self) -> bool {
        is_natural(&self.hand)
    }

    /// Clears per-round state, keeping chips and name.
    pub(crate) fn reset_round(&mut self) {
        self.bet = 0;
        self.hand.clear();
        self.status = SeatStatus::Idle;
        self.result = None;
    }
}
