//! The round engine: phases, seats, dealer, pot.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::DealerHand;
use crate::options::TableOptions;
use crate::result::RoundSummary;
use crate::seat::Seat;

mod actions;
mod bet;
mod dealer;
pub mod phase;
mod settle;

pub use phase::Phase;

/// Maximum number of seats at a table.
pub const MAX_SEATS: usize = 4;

/// A blackjack table running one round at a time.
///
/// The table owns the deck, the dealer, and every seat for the duration of
/// a round. All operations are synchronous and atomic with respect to the
/// round state: the dealer turn and settlement run to completion inside the
/// call that resolves the last acting seat.
///
/// # Example
///
/// ```
/// use bjtable::{Table, TableOptions};
///
/// let mut table = Table::new(2, 500, TableOptions::default(), 42);
/// table.set_bet(0, 25).unwrap();
/// table.set_bet(1, 50).unwrap();
/// table.deal().unwrap();
/// ```
pub struct Table {
    /// The draw pile.
    deck: Deck,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Seats in table order.
    seats: Vec<Seat>,
    /// Phase of the current round.
    phase: Phase,
    /// Shared pot; only ever non-zero in pooled payout mode.
    pot: u64,
    /// One-based round counter.
    round: u32,
    /// Index of the seat currently acting, if any.
    acting: Option<usize>,
    /// Summary of the most recently settled round.
    summary: Option<RoundSummary>,
    /// Table options.
    options: TableOptions,
    /// Random number generator for deck shuffles.
    rng: ChaCha8Rng,
}

impl Table {
    /// Opens a table with `seats` players, each starting with `chips`.
    ///
    /// The table opens in the betting phase of round 1.
    ///
    /// # Panics
    ///
    /// Panics if `seats` is zero or greater than [`MAX_SEATS`].
    #[must_use]
    pub fn new(seats: usize, chips: u64, options: TableOptions, seed: u64) -> Self {
        assert!(
            (1..=MAX_SEATS).contains(&seats),
            "a table seats 1 to {MAX_SEATS} players"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::fresh(&mut rng);
        let seats = (1..=seats)
            .map(|n| Seat::new(format!("Player {n}"), chips))
            .collect();

        Self {
            deck,
            dealer: DealerHand::new(),
            seats,
            phase: Phase::Betting,
            pot: 0,
            round: 1,
            acting: None,
            summary: None,
            options,
            rng,
        }
    }

    /// Returns the phase of the current round.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the one-based round number.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the shared pot. Always zero in independent payout mode.
    #[must_use]
    pub const fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns every seat, in table order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the seat at `index`, if it exists.
    #[must_use]
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Index of the seat currently acting.
    ///
    /// `None` outside player turns, and also once every seat has resolved.
    #[must_use]
    pub const fn acting_seat(&self) -> Option<usize> {
        self.acting
    }

    /// Summary of the most recently settled round.
    ///
    /// Cleared by [`Table::next_round`].
    #[must_use]
    pub const fn last_summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// Replaces the deck so subsequent draws come out in `draws` order.
    ///
    /// Intended for deterministic tests and demos. A loaded deck is still
    /// subject to the low-card replacement policy at the next deal.
    pub fn stack_deck(&mut self, draws: &[Card]) {
        self.deck.load(draws);
    }

    /// Draws the top card.
    ///
    /// The replacement policy guarantees availability; an empty deck here
    /// means the low-water mark was miscalibrated, and that invariant
    /// violation fails loudly rather than producing an undefined card.
    pub(crate) fn draw(&mut self) -> Card {
        self.deck
            .draw()
            .expect("deck exhausted mid-round: replacement policy violated")
    }

    /// Resets per-round state and opens betting for the next round.
    ///
    /// Chips persist; bets, hands, statuses, and results are cleared, the
    /// dealer's hand empties with the hole card face down again, and the
    /// round counter increments. The pot is untouched: only settlement
    /// moves pot chips, so any no-winner carryover rides into this round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the current round has settled.
    pub fn next_round(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::RoundOver {
            return Err(RoundError::Phase);
        }

        for seat in &mut self.seats {
            seat.reset_round();
        }
        self.dealer.clear();
        self.acting = None;
        self.summary = None;
        self.round += 1;
        self.phase = Phase::Betting;

        debug!("round {} open for betting", self.round);
        Ok(())
    }
}
