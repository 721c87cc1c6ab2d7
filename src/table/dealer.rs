use log::debug;

use super::{Phase, Table};

impl Table {
    /// Reveals the hole card, draws to 17, and settles the round.
    ///
    /// The dealer stands on every 17, soft or hard, and the whole turn runs
    /// to completion before control returns to the caller.
    pub(super) fn run_dealer_turn(&mut self) {
        self.phase = Phase::DealerTurn;
        self.dealer.reveal();

        while self.dealer.value() < 17 {
            let card = self.draw();
            self.dealer.add_card(card);
        }

        debug!("dealer finishes at {}", self.dealer.value());
        self.settle();
    }
}
