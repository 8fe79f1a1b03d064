//! Keypad
//!
//! This example feeds a string of keypad characters through the engine and
//! prints what a host UI would render after each press.
//!
//! Key concepts:
//! - The engine only sees discrete key events
//! - The display and history trace are the only outputs
//! - Results chain into the next operator
//!
//! Run with: cargo run --example keypad -- "2+2=*3="
//! Set RUST_LOG=debug to watch the accumulator.

use chaincalc::{Calculator, Key};

fn main() {
    env_logger::init();

    let input = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join("");
    let input = if input.is_empty() {
        "12.5+7.5=/4=".to_string()
    } else {
        input
    };

    println!("=== Keypad Example ===\n");
    println!("{:>6}  {:>14}  {}", "key", "display", "history");

    let mut calc = Calculator::new();
    for c in input.chars().filter(|c| !c.is_whitespace()) {
        match Key::from_char(c) {
            Some(key) => {
                calc.press(key);
                println!(
                    "{:>6}  {:>14}  {}",
                    key.to_string(),
                    calc.display_value(),
                    calc.history_trace()
                );
            }
            None => println!("{c:>6}  (not a keypad key)"),
        }
    }

    println!("\nPhases visited:");
    for phase in calc.journal().get_path() {
        println!("  {phase}");
    }
    if let Some(span) = calc.journal().duration() {
        println!("Journal span: {span:?}");
    }

    println!("\n=== Example Complete ===");
}
