//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjsolo=debug` to see the engine's round events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, Game, GameOptions, GameState, Rank, Suit, TableView};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        if let Some(view) = game.view() {
            print_table(&view);
        }

        let prompt = match game.state() {
            GameState::RoundActive => "[h]it [s]tand [n]ew game [q]uit: ",
            GameState::NotStarted | GameState::RoundOver => "[n]ew game [q]uit: ",
        };

        match prompt_line(prompt).as_str() {
            "h" | "hit" => {
                if game.hit().is_none() {
                    println!("The round is over.");
                }
            }
            "s" | "stand" => {
                if let Some(outcome) = game.stand() {
                    println!("{outcome}");
                } else {
                    println!("The round is over.");
                }
            }
            "n" | "new" => {
                game.new_game();
            }
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(view: &TableView) {
    println!("\nDeck: {} cards remaining", view.cards_remaining);

    let dealer_score = view
        .dealer_score
        .map_or_else(|| "?".to_string(), |score| score.to_string());
    println!(
        "\nDealer: {} (value {dealer_score})",
        format_dealer(&view.dealer)
    );
    println!(
        "You:    {} (value {})",
        format_cards(&view.player),
        view.player_score
    );

    if !view.message.is_empty() {
        println!("\n{}", colorize(view.message, "1"));
    }
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(cards: &[Option<Card>]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };

    let rank = if card.rank.is_face() || card.rank == Rank::Ace {
        colorize(card.rank.label(), color_code)
    } else {
        card.rank.label().to_string()
    };
    let suit = colorize(&card.suit.symbol().to_string(), color_code);
    format!("{rank}{suit}")
}
