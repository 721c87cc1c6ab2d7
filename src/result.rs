//! Settlement outcomes and round summaries.

/// The dealer's final standing, as consumed by settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerFinal {
    /// Final hand total.
    pub value: u8,
    /// Whether the dealer was dealt a natural blackjack.
    pub natural: bool,
    /// Whether the dealer went over 21.
    pub bust: bool,
}

/// Outcome of one seat at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Beat the dealer (higher total, or dealer bust).
    Win,
    /// Lost the bet (bust, or beaten by the dealer).
    Lose,
    /// Tied the dealer; the bet comes back.
    Push,
    /// Natural blackjack against a non-natural dealer; pays 3:2.
    Blackjack,
}

impl Outcome {
    /// Classifies a seat against the dealer.
    ///
    /// Precedence order: a bust loses outright, matching naturals push, a
    /// dealer natural beats everything else, a seat natural outranks the
    /// dealer, a dealer bust pays the survivors, and remaining totals
    /// compare head to head.
    #[must_use]
    pub fn classify(busted: bool, natural: bool, value: u8, dealer: DealerFinal) -> Self {
        if busted {
            return Self::Lose;
        }
        if natural && dealer.natural {
            return Self::Push;
        }
        if dealer.natural {
            return Self::Lose;
        }
        if natural {
            return Self::Blackjack;
        }
        if dealer.bust {
            return Self::Win;
        }

        match value.cmp(&dealer.value) {
            core::cmp::Ordering::Greater => Self::Win,
            core::cmp::Ordering::Less => Self::Lose,
            core::cmp::Ordering::Equal => Self::Push,
        }
    }
}

/// Settlement detail for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatResult {
    /// Seat index at the table.
    pub seat: usize,
    /// The outcome of the round for this seat.
    pub outcome: Outcome,
    /// The wager that rode on the round.
    pub bet: u64,
    /// Chips credited at settlement, refunds included.
    pub payout: u64,
    /// Final chips minus chips before the bet was debited.
    pub delta: i64,
    /// The seat's final hand total.
    pub value: u8,
}

/// Result of a settled round.
#[derive(Debug, Clone)]
pub struct RoundSummary {
    /// Results per seat, in seat order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final standing.
    pub dealer: DealerFinal,
    /// Pot left undistributed when no seat won (pooled mode only); it
    /// carries into the next round rather than being redistributed.
    pub pot_carryover: u64,
}
