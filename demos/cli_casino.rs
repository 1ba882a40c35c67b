//! CLI casino example: blackjack and roulette against one saved bankroll.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use casino_sim::{
    Blackjack, BlackjackSnapshot, Card, Color, FileBalanceStore, Roulette, Suit, TableOptions,
};

fn main() {
    tracing_subscriber::fmt::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let path = std::env::temp_dir().join("casino-sim-balance.json");
    let store = match FileBalanceStore::open(&path) {
        Ok(store) => store,
        Err(err) => {
            println!("Could not open {}: {err}", path.display());
            return;
        }
    };

    let mut blackjack = Blackjack::new(TableOptions::default(), &store, seed);
    let mut roulette = Roulette::new(&store, seed.wrapping_add(1));

    println!("Casino CLI example (type 'q' to quit)");
    println!("Balance is saved to {}", path.display());

    loop {
        println!("\nBalance: {}", blackjack.balance());
        match prompt_line("[b]lackjack, [r]oulette, re[s]et balance, [q]uit: ").as_str() {
            "b" | "blackjack" => play_blackjack(&mut blackjack),
            "r" | "roulette" => play_roulette(&mut roulette),
            "s" | "reset" => {
                blackjack.reset_balance();
                println!("Balance reset.");
            }
            "q" | "quit" => break,
            _ => println!("Unknown choice."),
        }
    }

    if let Err(err) = store.flush() {
        println!("Could not save balance: {err}");
    }
    println!("Goodbye.");
}

fn play_blackjack(table: &mut Blackjack<&FileBalanceStore>) {
    let balance = table.balance();
    let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to skip): ")) else {
        return;
    };

    if bet > 0 {
        if let Err(err) = table.place_bet(bet) {
            println!("Bet error: {err}");
            return;
        }
    } else if table.bet_amount() == 0 {
        return;
    }

    if let Err(err) = table.start_game() {
        println!("Deal error: {err}");
        return;
    }

    while table.state().is_in_progress() {
        let snapshot = table.snapshot();
        print_table(&snapshot);
        println!("{}", format_actions(&snapshot));

        let result = match prompt_line("Action: ").as_str() {
            "h" | "hit" => table.hit().map(|card| println!("You draw {card}.")),
            "s" | "stand" => table.stand().map(|_| ()),
            "d" | "double" => table.double_down().map(|_| ()),
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

    let snapshot = table.snapshot();
    print_table(&snapshot);
    println!("{} Winnings: {}", snapshot.message, snapshot.winnings);
}

fn play_roulette(table: &mut Roulette<&FileBalanceStore>) {
    let balance = table.balance();
    let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to skip): ")) else {
        return;
    };
    if bet == 0 {
        return;
    }

    let color = match prompt_line("Color ([r]ed, [b]lack, [g]reen): ").as_str() {
        "r" | "red" => Color::Red,
        "b" | "black" => Color::Black,
        "g" | "green" => Color::Green,
        _ => {
            println!("Unknown color.");
            return;
        }
    };

    if let Err(err) = table.place_bet(bet, color) {
        println!("Bet error: {err}");
        return;
    }

    match table.spin() {
        Ok(spin) => {
            let label = colorize(&spin.slot.pocket.to_string(), color_code(spin.slot.color));
            println!("The ball lands on {label}. {}", table.message());
            if spin.won {
                println!("Payout: {}", spin.payout);
            }
        }
        Err(err) => println!("Spin error: {err}"),
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &BlackjackSnapshot) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);

    let dealer = snapshot
        .dealer_cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Dealer: {dealer} (value {})", snapshot.dealer_score_label());

    let player = snapshot
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "You:    {player} (value {}) | bet {}",
        snapshot.player_score, snapshot.bet_amount
    );
}

fn format_actions(snapshot: &BlackjackSnapshot) -> String {
    let parts = [
        format_action("hit", "h", snapshot.can_hit()),
        format_action("stand", "s", snapshot.can_stand()),
        format_action("double", "d", snapshot.can_double()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn color_code(color: Color) -> &'static str {
    match color {
        Color::Red => "31",
        Color::Black => "37",
        Color::Green => "32",
    }
}

fn format_card(card: &Card) -> String {
    let (suit, code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    format!("{}{}", card.rank_label(), colorize(suit, code))
}
