//! Error types for table operations.

use thiserror::Error;

/// Errors from bet adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only change while the table is taking bets.
    #[error("bets can only change during the betting phase")]
    Phase,
    /// The seat index is out of range.
    #[error("no seat at index {0}")]
    NoSuchSeat(usize),
}

/// Errors that reject the betting-to-dealing transition.
///
/// A rejected deal leaves every seat, the dealer, and the deck untouched;
/// the table stays in the betting phase so the caller can re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Dealing is only legal from the betting phase.
    #[error("dealing is only legal from the betting phase")]
    Phase,
    /// A seat has no wager down.
    #[error("seat {0} has not placed a bet")]
    MissingBet(usize),
    /// A seat wagered more than it holds.
    #[error("seat {seat} bet {bet} with only {chips} chips")]
    BetExceedsChips {
        /// The offending seat index.
        seat: usize,
        /// The wager that was attempted.
        bet: u64,
        /// The seat's chip balance.
        chips: u64,
    },
}

/// Errors from player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit and stand are only legal while seats are acting.
    #[error("hit and stand are only legal during player turns")]
    Phase,
}

/// Errors from round lifecycle calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has not settled yet.
    #[error("the round is still in progress")]
    Phase,
}
