//! Terminal grid search visualizer.
//!
//! Run: cargo run --bin pathviz -- --algorithm dijkstra --maze random

use clap::Parser;
use pathviz_demos::{Config, run};

fn main() {
    let config = Config::parse();

    match run(&config) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
