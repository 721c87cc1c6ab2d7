use log::debug;

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::options::PayoutMode;
use crate::seat::{Seat, SeatStatus};

use super::{Phase, Table};

impl Table {
    fn betting_seat(&mut self, seat: usize) -> Result<&mut Seat, BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::Phase);
        }
        self.seats.get_mut(seat).ok_or(BetError::NoSuchSeat(seat))
    }

    /// Sets a seat's wager outright.
    ///
    /// Oversized wagers are accepted here and rejected by [`Table::deal`],
    /// so a caller can let a player assemble a bet freely and re-prompt on
    /// the deal's validation reason.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or for an unknown seat.
    pub fn set_bet(&mut self, seat: usize, amount: u64) -> Result<(), BetError> {
        self.betting_seat(seat)?.bet = amount;
        Ok(())
    }

    /// Adds a chip denomination to a seat's wager.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or for an unknown seat.
    pub fn add_bet(&mut self, seat: usize, amount: u64) -> Result<(), BetError> {
        let seat = self.betting_seat(seat)?;
        seat.bet = seat.bet.saturating_add(amount);
        Ok(())
    }

    /// Clears a seat's wager back to zero.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or for an unknown seat.
    pub fn clear_bet(&mut self, seat: usize) -> Result<(), BetError> {
        self.betting_seat(seat)?.bet = 0;
        Ok(())
    }

    /// Wagers the seat's entire balance.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or for an unknown seat.
    pub fn all_in(&mut self, seat: usize) -> Result<(), BetError> {
        let seat = self.betting_seat(seat)?;
        seat.bet = seat.chips;
        Ok(())
    }

    /// Validates every wager and deals the round.
    ///
    /// On success each seat's bet is debited (and pooled into the pot in
    /// pooled mode), a low deck is replaced wholesale, and two cards go to
    /// each seat and the dealer in round-robin order: every seat's first
    /// card, the dealer's (face-down) first card, every seat's second card,
    /// the dealer's second card. Seats dealt a natural are marked
    /// [`SeatStatus::Blackjack`] immediately; if that leaves nobody to act,
    /// the dealer turn and settlement run before this call returns.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending seat if any wager is zero or
    /// exceeds that seat's chips. A rejected deal mutates nothing.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Betting {
            return Err(DealError::Phase);
        }

        // Validation first; nothing below mutates until every bet checks out.
        for (index, seat) in self.seats.iter().enumerate() {
            if seat.bet == 0 {
                return Err(DealError::MissingBet(index));
            }
            if seat.bet > seat.chips {
                return Err(DealError::BetExceedsChips {
                    seat: index,
                    bet: seat.bet,
                    chips: seat.chips,
                });
            }
        }

        if self.deck.is_low(self.options.reshuffle_below) {
            debug!("deck at {} cards, replacing before the deal", self.deck.len());
            self.deck = Deck::fresh(&mut self.rng);
        }

        let mut staked = 0;
        for seat in &mut self.seats {
            seat.chips -= seat.bet;
            staked += seat.bet;
            seat.hand.clear();
            seat.result = None;
        }
        if self.options.payout == PayoutMode::Pooled {
            self.pot += staked;
        }

        self.dealer.clear();

        // Round-robin: every seat's first card, then the dealer, twice over.
        for _ in 0..2 {
            let cards: Vec<_> = (0..self.seats.len()).map(|_| self.draw()).collect();
            for (seat, card) in self.seats.iter_mut().zip(cards) {
                seat.hand.push(card);
            }
            let card = self.draw();
            self.dealer.add_card(card);
        }

        for seat in &mut self.seats {
            seat.status = if seat.has_natural() {
                SeatStatus::Blackjack
            } else {
                SeatStatus::Active
            };
        }

        debug!(
            "round {} dealt, dealer shows {}",
            self.round,
            self.dealer.visible_value()
        );

        self.phase = Phase::PlayerTurns;
        self.acting = self.next_active_from(0);
        if self.acting.is_none() {
            // Every seat drew a natural; no decisions left this round.
            self.run_dealer_turn();
        }

        Ok(())
    }
}
