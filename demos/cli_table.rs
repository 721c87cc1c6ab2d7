//! CLI table demo: 1-4 seats, hot-seat input, independent or pooled payouts.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, DealerHand, MAX_SEATS, Outcome, PayoutMode, Phase, Suit, Table, TableOptions,
};

fn main() {
    env_logger::init();
    println!("Blackjack table demo (type 'q' to quit)");

    let seats = loop {
        if let Some(n) = prompt_number(&format!("Seats (1-{MAX_SEATS}): ")) {
            if (1..=MAX_SEATS as u64).contains(&n) {
                break n as usize;
            }
            println!("Please pick between 1 and {MAX_SEATS}.");
        } else {
            return;
        }
    };

    let pooled = seats > 1 && prompt_line("Pool the bets into a shared pot? (y/n): ") == "y";
    let options = TableOptions::default().with_payout(if pooled {
        PayoutMode::Pooled
    } else {
        PayoutMode::Independent
    });

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(seats, 500, options, seed);

    loop {
        if table.seats().iter().all(|seat| seat.chips == 0) {
            println!("Everyone is out of chips. Game over.");
            break;
        }

        println!("\n--- Round {} ---", table.round());
        if table.pot() > 0 {
            println!("Pot carryover: {}", table.pot());
        }

        for index in 0..seats {
            let chips = table.seat(index).map_or(0, |seat| seat.chips);
            let name = table
                .seat(index)
                .map_or_else(String::new, |seat| seat.name.clone());
            let Some(bet) = prompt_number(&format!("{name} bet (1-{chips}, 'a' for all-in): "))
            else {
                return;
            };

            let result = if bet == u64::MAX {
                table.all_in(index)
            } else {
                table.set_bet(index, bet)
            };
            if let Err(err) = result {
                println!("Bet error: {err}");
            }
        }

        if let Err(err) = table.deal() {
            println!("Deal rejected: {err}");
            continue;
        }

        while table.phase() == Phase::PlayerTurns {
            print_table(&table);

            let Some(acting) = table.acting_seat() else {
                break;
            };
            let name = &table.seats()[acting].name;
            let action = prompt_line(&format!("{name}: [h]it or [s]tand: "));

            let result = match action.as_str() {
                "h" | "hit" => table.hit().map(|_| ()),
                "s" | "stand" => table.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&table);
        if let Some(summary) = table.last_summary() {
            println!("Dealer finishes at {}.", summary.dealer.value);
            for result in &summary.seats {
                let name = &table.seats()[result.seat].name;
                println!(
                    "{name}: {} | payout {} | net {:+}",
                    outcome_label(result.outcome),
                    result.payout,
                    result.delta
                );
            }
            if summary.pot_carryover > 0 {
                println!("No winners; {} chips stay in the pot.", summary.pot_carryover);
            }
        }

        if let Err(err) = table.next_round() {
            println!("Reset error: {err}");
            return;
        }
    }
}

const fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "win",
        Outcome::Lose => "lose",
        Outcome::Push => "push",
        Outcome::Blackjack => "blackjack!",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Reads a number; `u64::MAX` encodes all-in, `None` means quit.
fn prompt_number(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input == "a" || input == "all" {
            return Some(u64::MAX);
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(table: &Table) {
    println!("\nDeck: {} cards remaining", table.cards_remaining());
    if table.pot() > 0 {
        println!("Pot: {}", table.pot());
    }

    let dealer = table.dealer();
    println!(
        "Dealer: {} (showing {})",
        format_dealer(dealer),
        dealer.visible_value()
    );

    let acting = table.acting_seat();
    for (index, seat) in table.seats().iter().enumerate() {
        let marker = if acting == Some(index) { "*" } else { " " };
        println!(
            "{marker} {}: {} | value {} | bet {} | chips {} | {:?}",
            seat.name,
            format_cards(&seat.hand),
            seat.value(),
            seat.bet,
            seat.chips,
            seat.status
        );
    }
    println!();
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hidden() {
        let mut parts = vec!["??".to_string()];
        parts.extend(dealer.cards().iter().skip(1).map(format_card));
        parts.join(" ")
    } else {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Spades => "S",
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{suit}")
}
