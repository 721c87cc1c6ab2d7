use log::debug;

use crate::options::PayoutMode;
use crate::result::{DealerFinal, Outcome, RoundSummary, SeatResult};
use crate::seat::SeatStatus;

use super::{Phase, Table};

/// Splits `pool` across `weights` by largest remainder.
///
/// Each share starts at its floored proportional cut; the leftover chips go
/// one at a time to the largest remainders, seat order breaking ties. The
/// shares always sum to `pool` exactly, so no chip drifts out of the pot.
fn split_by_weight(pool: u64, weights: &[u64]) -> Vec<u64> {
    let total: u128 = weights.iter().map(|&w| u128::from(w)).sum();
    if total == 0 {
        return vec![0; weights.len()];
    }

    let exact: Vec<u128> = weights.iter().map(|&w| u128::from(pool) * u128::from(w)).collect();
    let mut shares: Vec<u64> = exact.iter().map(|&e| (e / total) as u64).collect();

    let mut leftover = pool - shares.iter().sum::<u64>();
    let mut order: Vec<usize> = (0..weights.len()).filter(|&i| exact[i] % total > 0).collect();
    order.sort_by_key(|&i| core::cmp::Reverse(exact[i] % total));

    for index in order {
        if leftover == 0 {
            break;
        }
        shares[index] += 1;
        leftover -= 1;
    }

    shares
}

impl Table {
    /// Classifies every seat against the dealer, credits payouts, and
    /// records the round summary.
    pub(super) fn settle(&mut self) {
        let dealer = DealerFinal {
            value: self.dealer.value(),
            natural: self.dealer.is_natural(),
            bust: self.dealer.is_bust(),
        };

        let outcomes: Vec<Outcome> = self
            .seats
            .iter()
            .map(|seat| {
                Outcome::classify(
                    seat.status == SeatStatus::Bust,
                    seat.has_natural(),
                    seat.value(),
                    dealer,
                )
            })
            .collect();

        let payouts = match self.options.payout {
            PayoutMode::Independent => self.house_payouts(&outcomes),
            PayoutMode::Pooled => self.pooled_payouts(&outcomes),
        };

        let mut results = Vec::with_capacity(self.seats.len());
        for (index, (&outcome, &payout)) in outcomes.iter().zip(&payouts).enumerate() {
            let seat = &mut self.seats[index];
            seat.chips += payout;
            seat.result = Some(outcome);

            // The bet left pre-debit chips at deal time, so the round's net
            // movement is the payout against it.
            #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in i64")]
            let delta = payout as i64 - seat.bet as i64;

            results.push(SeatResult {
                seat: index,
                outcome,
                bet: seat.bet,
                payout,
                delta,
                value: seat.value(),
            });
        }

        debug!(
            "round {} settled: dealer {}{}, pot carryover {}",
            self.round,
            dealer.value,
            if dealer.bust { " (bust)" } else { "" },
            self.pot
        );

        self.summary = Some(RoundSummary {
            seats: results,
            dealer,
            pot_carryover: self.pot,
        });
        self.phase = Phase::RoundOver;
    }

    /// Independent payouts: the house pays each seat on its own.
    fn house_payouts(&self, outcomes: &[Outcome]) -> Vec<u64> {
        outcomes
            .iter()
            .zip(&self.seats)
            .map(|(outcome, seat)| match outcome {
                Outcome::Push => seat.bet,
                Outcome::Win => seat.bet * 2,
                // 3:2 winnings on top of the returned bet; an odd bet's
                // half-chip rounds down.
                Outcome::Blackjack => seat.bet + seat.bet * 3 / 2,
                Outcome::Lose => 0,
            })
            .collect()
    }

    /// Pooled payouts: pushes come back off the top of the pot, then the
    /// remainder splits among winners, naturals weighted 3:2 over plain
    /// wins. With no winners the remaining pot stays in place and carries
    /// into the next round; it is never redistributed to losing seats.
    fn pooled_payouts(&mut self, outcomes: &[Outcome]) -> Vec<u64> {
        let mut payouts = vec![0; outcomes.len()];

        for (index, outcome) in outcomes.iter().enumerate() {
            if *outcome == Outcome::Push {
                let bet = self.seats[index].bet;
                self.pot -= bet;
                payouts[index] = bet;
            }
        }

        // The 3:2 natural priority, scaled by two to keep integer weights.
        let weights: Vec<u64> = outcomes
            .iter()
            .zip(&self.seats)
            .map(|(outcome, seat)| match outcome {
                Outcome::Blackjack => seat.bet * 3,
                Outcome::Win => seat.bet * 2,
                Outcome::Lose | Outcome::Push => 0,
            })
            .collect();

        if weights.iter().any(|&w| w > 0) {
            let shares = split_by_weight(self.pot, &weights);
            for (payout, share) in payouts.iter_mut().zip(shares) {
                *payout += share;
            }
            self.pot = 0;
        }

        payouts
    }
}
