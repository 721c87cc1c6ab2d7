use log::trace;

use crate::card::Card;
use crate::error::ActionError;
use crate::seat::SeatStatus;

use super::{Phase, Table};

impl Table {
    /// Lowest-indexed seat still active, scanning from `start`.
    pub(super) fn next_active_from(&self, start: usize) -> Option<usize> {
        self.seats
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, seat)| seat.status == SeatStatus::Active)
            .map(|(index, _)| index)
    }

    fn acting_index(&self) -> Result<usize, ActionError> {
        if self.phase != Phase::PlayerTurns {
            return Err(ActionError::Phase);
        }
        self.acting.ok_or(ActionError::Phase)
    }

    /// The acting seat draws one card.
    ///
    /// A total over 21 busts the seat; exactly 21 stands it automatically;
    /// anything lower leaves the same seat acting. When the draw ends the
    /// seat's turn and nobody later in table order is still active, the
    /// dealer turn and settlement run before this call returns.
    ///
    /// # Errors
    ///
    /// Returns an error outside player turns.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.acting_index()?;
        let card = self.draw();

        let seat = &mut self.seats[index];
        seat.hand.push(card);

        let value = seat.value();
        trace!("seat {index} hits to {value}");

        if value > 21 {
            seat.status = SeatStatus::Bust;
        } else if value == 21 {
            // Nothing left to gain from another card.
            seat.status = SeatStatus::Stand;
        }

        if self.seats[index].status != SeatStatus::Active {
            self.advance_from(index);
        }

        Ok(card)
    }

    /// The acting seat stands and the turn passes.
    ///
    /// # Errors
    ///
    /// Returns an error outside player turns.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.acting_index()?;

        self.seats[index].status = SeatStatus::Stand;
        trace!("seat {index} stands at {}", self.seats[index].value());

        self.advance_from(index);
        Ok(())
    }

    /// Moves the turn pointer strictly past `index`; runs the dealer once
    /// nobody is left to act.
    fn advance_from(&mut self, index: usize) {
        self.acting = self.next_active_from(index + 1);
        if self.acting.is_none() {
            self.run_dealer_turn();
        }
    }
}
