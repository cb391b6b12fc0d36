//! Parse a number with explicit, typed failures and a match on all three
//! outcome states.
//!
//! Run with `cargo run --example parse_number -- 42`.

use tri_outcome::prelude::*;

#[derive(Debug)]
enum ParseError {
    NotANumber,
    TooBig,
    TooSmall,
}

fn parse(input: &str) -> Outcome<i64, ParseError> {
    result(|ok, err| {
        let number: i64 = match input.trim().parse() {
            Ok(n) => n,
            Err(_) => return err(ParseError::NotANumber),
        };

        if number > 1_000_000 {
            return err(ParseError::TooBig);
        }
        if number < 0 {
            return err(ParseError::TooSmall);
        }

        ok(number)
    })
}

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| "42".to_string());

    parse(&input).match_with(
        |value| println!("The parsed number is {value}"),
        |err| eprintln!("The function returned an error: {err:?}"),
        |msg| println!("A panic was captured: {msg}"),
    );
}
