//! A multi-seat blackjack round engine.
//!
//! The crate provides a [`Table`] type that runs the full round flow for one
//! to four seats against a single dealer: chip betting, dealing, player
//! turns, dealer play, and settlement, with either independent house payouts
//! or a shared pooled pot split among winners.
//!
//! # Example
//!
//! ```
//! use bjtable::{Phase, Table, TableOptions};
//!
//! let mut table = Table::new(1, 500, TableOptions::default(), 42);
//! table.set_bet(0, 25).unwrap();
//! table.deal().unwrap();
//!
//! while table.phase() == Phase::PlayerTurns {
//!     table.stand().unwrap();
//! }
//! assert!(table.last_summary().is_some());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod seat;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, LOW_WATER_MARK};
pub use error::{ActionError, BetError, DealError, RoundError};
pub use hand::{DealerHand, hand_value, is_natural, is_soft};
pub use options::{PayoutMode, TableOptions};
pub use result::{DealerFinal, Outcome, RoundSummary, SeatResult};
pub use seat::{Seat, SeatStatus};
pub use table::{MAX_SEATS, Phase, Table};
