//! Fallible-transformation pipeline: map tokens into `Result`, filter
//! the failures out, unwrap downstream. The protocol itself has no error
//! channel; this is the usage pattern for partial functions.
//!
//! Run with: cargo run --example parse_numbers

use thiserror::Error;
use xfold::{compose, filter, map, partition, transduce_array};

#[derive(Debug, Error)]
enum TokenError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

fn parse_token(token: &str) -> Result<i64, TokenError> {
    token
        .trim()
        .parse()
        .map_err(|_| TokenError::NotANumber(token.to_string()))
}

fn main() {
    let raw = r#"["12", "forty", " 7", "x9", "30", "5"]"#;
    let tokens: Vec<String> = serde_json::from_str(raw).expect("demo input is valid JSON");

    let pipeline = compose(
        map(|token: String| parse_token(&token)),
        compose(
            filter(|parsed: &Result<i64, TokenError>| match parsed {
                Ok(_) => true,
                Err(err) => {
                    eprintln!("skipping: {err}");
                    false
                }
            }),
            compose(map(|parsed: Result<i64, TokenError>| parsed.unwrap()), partition(2)),
        ),
    );

    let pairs = transduce_array(&pipeline, tokens);
    println!("parsed pairs: {pairs:?}");
}
