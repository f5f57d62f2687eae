//! Simple CLI that reads HTML from stdin and outputs the extraction result
//! as JSON. Useful for running the pipeline over saved pages offline.

use std::io::{self, Read};

use quizwire::extract;

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = extract(&html);
    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}
