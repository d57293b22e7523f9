//! CLI Guandan example.
//!
//! Deals a seeded round and lets you play cards from the first hand against
//! whatever is on the table. Type cards like `3S 3H` or `RJ`, `pass` to clear
//! the table, or `q` to quit.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use gdrs::{Card, Deck, DeckOptions, Hand, classify, parse_cards};

fn main() {
    println!("Guandan CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(DeckOptions::default(), seed);

    let mut hands = match deck.deal() {
        Ok(hands) => hands,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };
    let Some(hand) = hands.first_mut() else {
        println!("No hands were dealt.");
        return;
    };

    let mut table: Vec<Card> = Vec::new();

    while !hand.is_empty() {
        print_table(hand, &table);

        let input = prompt_line("Play> ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            "pass" | "p" => {
                println!("Table cleared.");
                table.clear();
                continue;
            }
            _ => {}
        }

        let cards = match parse_cards(&input) {
            Ok(cards) => cards,
            Err(err) => {
                println!("Could not read cards: {err}");
                continue;
            }
        };

        match hand.play(&cards, &table) {
            Ok(combination) => {
                println!("Played {}.", combination.kind());
                table = combination.cards().to_vec();
            }
            Err(err) => println!("Rejected: {err}."),
        }
    }

    println!("You played every card. Well done.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_owned();
    }
    input.trim().to_lowercase()
}

fn print_table(hand: &Hand, table: &[Card]) {
    if table.is_empty() {
        println!("\nTable: empty (you lead)");
    } else {
        let kind = classify(table).map_or("?", |combination| combination.kind().name());
        println!("\nTable: {} ({kind})", format_cards(table));
    }

    let groups: Vec<String> = hand.groups().iter().map(|group| format_cards(group)).collect();
    println!("Hand ({} cards): {}", hand.len(), groups.join(" | "));
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
