//! Table integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjtable::{
    ActionError, BetError, Card, DECK_SIZE, DealError, DealerFinal, Deck, Outcome, PayoutMode,
    Phase, RoundError, SeatStatus, Suit, Table, TableOptions, hand_value, is_natural,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn pooled() -> TableOptions {
    TableOptions::default().with_payout(PayoutMode::Pooled)
}

#[test]
fn fresh_deck_holds_every_suit_rank_pair_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::fresh(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(seen.insert((card.suit, card.rank)), "duplicate card drawn");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn hand_totals_reduce_soft_aces() {
    let a = |rank| card(Suit::Hearts, rank);

    assert_eq!(hand_value(&[a(1), a(9)]), 20);
    assert_eq!(hand_value(&[a(1), card(Suit::Spades, 1), a(9)]), 21);
    assert_eq!(hand_value(&[a(13), a(12), a(2)]), 22);
    assert_eq!(
        hand_value(&[a(1), card(Suit::Spades, 1), card(Suit::Clubs, 1), a(8)]),
        21
    );
}

#[test]
fn natural_requires_exactly_two_cards() {
    assert!(is_natural(&[card(Suit::Hearts, 1), card(Suit::Spades, 13)]));
    assert!(!is_natural(&[
        card(Suit::Hearts, 7),
        card(Suit::Spades, 7),
        card(Suit::Clubs, 7),
    ]));
}

#[test]
fn classification_follows_precedence_order() {
    let dealer_18 = DealerFinal {
        value: 18,
        natural: false,
        bust: false,
    };
    let dealer_natural = DealerFinal {
        value: 21,
        natural: true,
        bust: false,
    };
    let dealer_bust = DealerFinal {
        value: 22,
        natural: false,
        bust: true,
    };

    // A bust loses no matter what the dealer does.
    assert_eq!(Outcome::classify(true, false, 25, dealer_bust), Outcome::Lose);
    assert_eq!(Outcome::classify(true, false, 22, dealer_18), Outcome::Lose);

    // Matching naturals push; a lone dealer natural beats a standing 20.
    assert_eq!(
        Outcome::classify(false, true, 21, dealer_natural),
        Outcome::Push
    );
    assert_eq!(
        Outcome::classify(false, false, 20, dealer_natural),
        Outcome::Lose
    );

    // A lone seat natural outranks a made dealer hand.
    assert_eq!(
        Outcome::classify(false, true, 21, dealer_18),
        Outcome::Blackjack
    );

    // A dealer bust pays any surviving total.
    assert_eq!(Outcome::classify(false, false, 12, dealer_bust), Outcome::Win);

    // Head-to-head totals.
    assert_eq!(Outcome::classify(false, false, 19, dealer_18), Outcome::Win);
    assert_eq!(Outcome::classify(false, false, 17, dealer_18), Outcome::Lose);
    assert_eq!(Outcome::classify(false, false, 18, dealer_18), Outcome::Push);
}

#[test]
fn stacked_deck_reproduces_the_deal_sequence() {
    let mut table = Table::new(2, 500, TableOptions::default(), 1);
    table.set_bet(0, 10).unwrap();
    table.set_bet(1, 10).unwrap();

    table.stack_deck(&[
        card(Suit::Hearts, 2),   // seat 0, first card
        card(Suit::Hearts, 3),   // seat 1, first card
        card(Suit::Hearts, 4),   // dealer, face down
        card(Suit::Hearts, 5),   // seat 0, second card
        card(Suit::Hearts, 6),   // seat 1, second card
        card(Suit::Hearts, 7),   // dealer, face up
    ]);
    table.deal().unwrap();

    let ranks = |seat: usize| -> Vec<u8> {
        table.seat(seat).unwrap().hand.iter().map(|c| c.rank).collect()
    };
    assert_eq!(ranks(0), vec![2, 5]);
    assert_eq!(ranks(1), vec![3, 6]);
    assert_eq!(
        table.dealer().cards().iter().map(|c| c.rank).collect::<Vec<_>>(),
        vec![4, 7]
    );

    // The first dealer card stays face down through player turns.
    assert!(table.dealer().is_hidden());
    assert_eq!(table.dealer().visible_value(), 7);
    assert_eq!(table.dealer().value(), 11);
}

#[test]
fn deal_rejects_bad_bets_and_mutates_nothing() {
    let mut table = Table::new(2, 500, pooled(), 3);
    table.set_bet(0, 100).unwrap();

    assert_eq!(table.deal().unwrap_err(), DealError::MissingBet(1));

    table.set_bet(1, 600).unwrap();
    assert_eq!(
        table.deal().unwrap_err(),
        DealError::BetExceedsChips {
            seat: 1,
            bet: 600,
            chips: 500
        }
    );

    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.pot(), 0);
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    for seat in table.seats() {
        assert_eq!(seat.chips, 500);
        assert!(seat.hand.is_empty());
        assert_eq!(seat.status, SeatStatus::Idle);
    }
}

#[test]
fn bet_adjustments_only_during_betting() {
    let mut table = Table::new(1, 500, TableOptions::default(), 4);

    table.add_bet(0, 25).unwrap();
    table.add_bet(0, 25).unwrap();
    assert_eq!(table.seat(0).unwrap().bet, 50);

    table.clear_bet(0).unwrap();
    assert_eq!(table.seat(0).unwrap().bet, 0);

    table.all_in(0).unwrap();
    assert_eq!(table.seat(0).unwrap().bet, 500);

    assert_eq!(table.set_bet(1, 10).unwrap_err(), BetError::NoSuchSeat(1));

    table.set_bet(0, 100).unwrap();

    let mut draws = vec![
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 6),
        card(Suit::Diamonds, 8),
    ];
    draws.extend(std::iter::repeat_n(card(Suit::Clubs, 2), 12));
    table.stack_deck(&draws);

    table.deal().unwrap();
    assert_eq!(table.set_bet(0, 10).unwrap_err(), BetError::Phase);
}

#[test]
fn phase_guards_reject_out_of_turn_calls() {
    let mut table = Table::new(1, 500, TableOptions::default(), 5);

    assert_eq!(table.hit().unwrap_err(), ActionError::Phase);
    assert_eq!(table.stand().unwrap_err(), ActionError::Phase);
    assert_eq!(table.next_round().unwrap_err(), RoundError::Phase);

    table.set_bet(0, 50).unwrap();
    table.deal().unwrap();
    assert_eq!(table.deal().unwrap_err(), DealError::Phase);
}

#[test]
#[should_panic(expected = "a table seats 1 to 4 players")]
fn zero_seats_is_refused() {
    let _ = Table::new(0, 500, TableOptions::default(), 6);
}

#[test]
fn hit_below_21_keeps_the_same_seat_acting() {
    let mut table = Table::new(1, 500, TableOptions::default(), 8);
    table.set_bet(0, 100).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 5),   // seat
        card(Suit::Diamonds, 9), // dealer, down
        card(Suit::Hearts, 6),   // seat: 11
        card(Suit::Clubs, 9),    // dealer: 18
        card(Suit::Hearts, 2),   // hit: 13
        card(Suit::Hearts, 3),   // hit: 16
    ]);
    table.deal().unwrap();

    table.hit().unwrap();
    assert_eq!(table.acting_seat(), Some(0));
    assert_eq!(table.phase(), Phase::PlayerTurns);

    table.hit().unwrap();
    table.stand().unwrap();

    let summary = table.last_summary().unwrap();
    assert_eq!(summary.seats[0].outcome, Outcome::Lose);
    assert_eq!(summary.dealer.value, 18);
}

#[test]
fn hitting_to_exactly_21_stands_automatically() {
    let mut table = Table::new(1, 500, TableOptions::default(), 9);
    table.set_bet(0, 100).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 10),  // seat
        card(Suit::Diamonds, 9), // dealer, down
        card(Suit::Hearts, 6),   // seat: 16
        card(Suit::Clubs, 9),    // dealer: 18
        card(Suit::Hearts, 5),   // hit: 21, auto-stand
    ]);
    table.deal().unwrap();

    table.hit().unwrap();

    // The auto-stand ended the only turn, so the round ran to settlement.
    assert_eq!(table.phase(), Phase::RoundOver);
    assert_eq!(table.seat(0).unwrap().status, SeatStatus::Stand);
    assert_eq!(table.seat(0).unwrap().result, Some(Outcome::Win));
    assert_eq!(table.seat(0).unwrap().chips, 600);
}

#[test]
fn natural_pays_three_to_two_independently() {
    let mut table = Table::new(1, 500, TableOptions::default(), 10);
    table.set_bet(0, 100).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 1),    // seat: Ace
        card(Suit::Diamonds, 10), // dealer, down
        card(Suit::Hearts, 13),   // seat: natural
        card(Suit::Diamonds, 7),  // dealer: 17
    ]);
    table.deal().unwrap();

    // The natural left nobody to act; no hit or stand was required.
    assert_eq!(table.phase(), Phase::RoundOver);
    assert_eq!(table.seat(0).unwrap().status, SeatStatus::Blackjack);

    let summary = table.last_summary().unwrap();
    assert_eq!(summary.seats[0].outcome, Outcome::Blackjack);
    assert_eq!(summary.seats[0].payout, 250);
    assert_eq!(summary.seats[0].delta, 150);
    assert_eq!(table.seat(0).unwrap().chips, 650);
}

#[test]
fn dealer_natural_revealed_at_dealer_turn_beats_a_stand() {
    let mut table = Table::new(1, 500, TableOptions::default(), 11);
    table.set_bet(0, 100).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 10),  // seat
        card(Suit::Diamonds, 1), // dealer, down: Ace
        card(Suit::Hearts, 9),   // seat: 19
        card(Suit::Diamonds, 13), // dealer: natural 21
    ]);
    table.deal().unwrap();

    // No peek: the seat still acts before the natural comes up.
    assert_eq!(table.acting_seat(), Some(0));
    table.stand().unwrap();

    let summary = table.last_summary().unwrap();
    assert!(summary.dealer.natural);
    assert_eq!(summary.seats[0].outcome, Outcome::Lose);
    assert_eq!(summary.seats[0].payout, 0);
    assert!(!table.dealer().is_hidden());
}

#[test]
fn turn_pointer_skips_seats_settled_at_the_deal() {
    let mut table = Table::new(3, 500, TableOptions::default(), 12);
    for seat in 0..3 {
        table.set_bet(seat, 100).unwrap();
    }
    table.stack_deck(&[
        card(Suit::Hearts, 10),   // seat 0
        card(Suit::Spades, 1),    // seat 1: Ace
        card(Suit::Clubs, 9),     // seat 2
        card(Suit::Diamonds, 5),  // dealer, down
        card(Suit::Hearts, 8),    // seat 0: 18
        card(Suit::Spades, 13),   // seat 1: natural
        card(Suit::Diamonds, 9),  // seat 2: 18
        card(Suit::Hearts, 9),    // dealer: 14
        card(Suit::Diamonds, 13), // seat 0 hit: bust
        card(Suit::Clubs, 8),     // dealer draw: 22, bust
    ]);
    table.deal().unwrap();

    // Seat 1's natural took it out of the rotation immediately.
    assert_eq!(table.seat(1).unwrap().status, SeatStatus::Blackjack);
    assert_eq!(table.acting_seat(), Some(0));

    table.hit().unwrap();
    assert_eq!(table.seat(0).unwrap().status, SeatStatus::Bust);
    assert_eq!(table.acting_seat(), Some(2));

    table.stand().unwrap();

    let summary = table.last_summary().unwrap();
    assert!(summary.dealer.bust);
    assert_eq!(summary.seats[0].outcome, Outcome::Lose);
    assert_eq!(summary.seats[1].outcome, Outcome::Blackjack);
    assert_eq!(summary.seats[2].outcome, Outcome::Win);
    assert_eq!(table.seat(0).unwrap().chips, 400);
    assert_eq!(table.seat(1).unwrap().chips, 650);
    assert_eq!(table.seat(2).unwrap().chips, 600);
}

#[test]
fn pooled_push_is_refunded_and_sole_winner_takes_the_rest() {
    let mut table = Table::new(2, 500, pooled(), 13);
    table.set_bet(0, 100).unwrap();
    table.set_bet(1, 200).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 13),   // seat 0
        card(Suit::Spades, 9),    // seat 1
        card(Suit::Diamonds, 11), // dealer, down
        card(Suit::Hearts, 12),   // seat 0: 20
        card(Suit::Spades, 7),    // seat 1: 16
        card(Suit::Diamonds, 10), // dealer: 20
        card(Suit::Spades, 5),    // seat 1 hit: 21
    ]);
    table.deal().unwrap();
    assert_eq!(table.pot(), 300);

    table.stand().unwrap(); // seat 0 at 20
    table.hit().unwrap(); // seat 1 to 21, auto-stand

    let summary = table.last_summary().unwrap();
    assert_eq!(summary.seats[0].outcome, Outcome::Push);
    assert_eq!(summary.seats[0].payout, 100);
    assert_eq!(summary.seats[1].outcome, Outcome::Win);
    assert_eq!(summary.seats[1].payout, 200);
    assert_eq!(summary.pot_carryover, 0);
    assert_eq!(table.pot(), 0);
    assert_eq!(table.seat(0).unwrap().chips, 500);
    assert_eq!(table.seat(1).unwrap().chips, 500);
}

#[test]
fn pooled_split_conserves_the_pot_by_largest_remainder() {
    let mut table = Table::new(3, 500, pooled(), 14);
    for seat in 0..3 {
        table.set_bet(seat, 100).unwrap();
    }
    table.stack_deck(&[
        card(Suit::Hearts, 1),    // seat 0: Ace
        card(Suit::Spades, 13),   // seat 1
        card(Suit::Clubs, 12),    // seat 2
        card(Suit::Diamonds, 10), // dealer, down
        card(Suit::Hearts, 13),   // seat 0: natural
        card(Suit::Spades, 9),    // seat 1: 19
        card(Suit::Clubs, 9),     // seat 2: 19
        card(Suit::Diamonds, 8),  // dealer: 18
    ]);
    table.deal().unwrap();
    assert_eq!(table.pot(), 300);
    assert_eq!(table.acting_seat(), Some(1));

    table.stand().unwrap();
    table.stand().unwrap();

    // Weights 300 : 200 : 200 over a 300-chip pot floor to 128 + 85 + 85;
    // the two leftover chips land on the larger remainders, in seat order.
    let summary = table.last_summary().unwrap();
    assert_eq!(summary.seats[0].payout, 128);
    assert_eq!(summary.seats[1].payout, 86);
    assert_eq!(summary.seats[2].payout, 86);
    assert_eq!(
        summary.seats.iter().map(|s| s.payout).sum::<u64>(),
        300,
        "pot must be conserved exactly"
    );
    assert_eq!(table.pot(), 0);
    assert_eq!(summary.seats[0].delta, 28);
    assert_eq!(summary.seats[1].delta, -14);
}

#[test]
fn pooled_pot_carries_over_when_nobody_wins() {
    let mut table = Table::new(2, 500, pooled(), 15);
    table.set_bet(0, 100).unwrap();
    table.set_bet(1, 100).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 10),   // seat 0
        card(Suit::Spades, 9),    // seat 1
        card(Suit::Diamonds, 13), // dealer, down
        card(Suit::Hearts, 8),    // seat 0: 18
        card(Suit::Spades, 8),    // seat 1: 17
        card(Suit::Diamonds, 12), // dealer: 20
    ]);
    table.deal().unwrap();

    table.stand().unwrap();
    table.stand().unwrap();

    let summary = table.last_summary().unwrap();
    assert_eq!(summary.seats[0].outcome, Outcome::Lose);
    assert_eq!(summary.seats[1].outcome, Outcome::Lose);
    assert_eq!(summary.pot_carryover, 200);
    assert_eq!(table.pot(), 200);

    // The carryover rides into the next round's pot on top of new bets.
    table.next_round().unwrap();
    assert_eq!(table.pot(), 200);
    table.set_bet(0, 50).unwrap();
    table.set_bet(1, 50).unwrap();

    let mut draws = vec![
        card(Suit::Hearts, 10),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 13),
        card(Suit::Hearts, 8),
        card(Suit::Spades, 8),
        card(Suit::Diamonds, 12),
    ];
    draws.extend(std::iter::repeat_n(card(Suit::Clubs, 2), 10));
    table.stack_deck(&draws);

    table.deal().unwrap();
    assert_eq!(table.pot(), 300);
}

#[test]
fn next_round_resets_everything_but_chips_and_pot() {
    let mut table = Table::new(2, 500, pooled(), 16);
    table.set_bet(0, 100).unwrap();
    table.set_bet(1, 100).unwrap();
    table.stack_deck(&[
        card(Suit::Hearts, 10),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 13),
        card(Suit::Hearts, 8),
        card(Suit::Spades, 8),
        card(Suit::Diamonds, 12),
    ]);
    table.deal().unwrap();
    table.stand().unwrap();
    table.stand().unwrap();

    let chips_before: Vec<u64> = table.seats().iter().map(|s| s.chips).collect();
    assert_eq!(table.round(), 1);

    table.next_round().unwrap();

    assert_eq!(table.round(), 2);
    assert_eq!(table.phase(), Phase::Betting);
    assert!(table.last_summary().is_none());
    assert!(table.dealer().is_empty());
    assert!(table.dealer().is_hidden());
    for (seat, chips) in table.seats().iter().zip(chips_before) {
        assert_eq!(seat.chips, chips);
        assert_eq!(seat.bet, 0);
        assert!(seat.hand.is_empty());
        assert_eq!(seat.status, SeatStatus::Idle);
        assert_eq!(seat.result, None);
    }
}

#[test]
fn low_deck_is_replaced_wholesale_before_the_deal() {
    let mut table = Table::new(1, 500, TableOptions::default(), 17);
    table.set_bet(0, 100).unwrap();

    // Ten cards is under the low-water mark, so the deal swaps in a fresh
    // 52-card deck before drawing. Dealing from the old pile would leave 6
    // cards; even a deal whose naturals run the dealer turn immediately
    // cannot pull the fresh deck anywhere near that low.
    table.stack_deck(&[card(Suit::Hearts, 2); 10]);
    table.deal().unwrap();
    assert!(table.cards_remaining() >= DECK_SIZE - 10);
}

#[test]
fn deck_at_the_mark_is_kept() {
    let mut table = Table::new(1, 500, TableOptions::default(), 18);
    table.set_bet(0, 100).unwrap();

    let mut draws = vec![
        card(Suit::Hearts, 10),   // seat
        card(Suit::Diamonds, 10), // dealer, down
        card(Suit::Hearts, 12),   // seat: 20
        card(Suit::Diamonds, 12), // dealer: 20
    ];
    draws.extend(std::iter::repeat_n(card(Suit::Clubs, 2), 11));

    table.stack_deck(&draws);
    table.deal().unwrap();
    assert_eq!(table.cards_remaining(), 11);

    table.stand().unwrap();
    assert_eq!(
        table.last_summary().unwrap().seats[0].outcome,
        Outcome::Push
    );
}
