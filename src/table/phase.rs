//! Round phases.

/// Phase of the current round.
///
/// Rounds cycle `Betting -> PlayerTurns -> DealerTurn -> RoundOver` and back
/// to `Betting` via [`crate::Table::next_round`]. Dealing happens atomically
/// inside [`crate::Table::deal`], and the dealer turn runs to completion
/// inside the call that resolves the last seat, so callers observe
/// `DealerTurn` only if they inspect the table from inside that window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting bets for the next deal.
    Betting,
    /// Seats act in order; hit and stand are legal.
    PlayerTurns,
    /// The dealer reveals the hole card and draws to 17.
    DealerTurn,
    /// Settled; awaiting the next-round reset.
    RoundOver,
}
