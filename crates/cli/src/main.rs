// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, deals poker tables and ranks the players hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use showdown_eval::Deck;

pub mod table;
use table::{Table, Variant};

#[derive(Debug, Parser)]
struct Cli {
    /// The deck seed, a random seed is used if not given.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of players.
    #[clap(long, short, default_value_t = 9, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// The variants to deal, all variants if not given.
    #[clap(long, short, value_enum)]
    variant: Vec<Variant>,
    /// Number of threads used to evaluate the hands.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=64))]
    threads: u8,
    /// Print the tables as JSON lines.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Dealing with seed {seed}");

    let variants = if cli.variant.is_empty() {
        vec![Variant::Holdem, Variant::Omaha]
    } else {
        cli.variant
    };

    for variant in variants {
        // Each table gets a fresh deck so that a seed replays every table.
        let mut deck = Deck::new(seed);
        let table = Table::deal(&mut deck, variant, cli.players as usize, cli.threads as usize)?;
        info!(
            "Dealt {} players {variant} table, {} cards left",
            table.seats.len(),
            deck.remaining()
        );

        if cli.json {
            println!("{}", serde_json::to_string(&table)?);
        } else {
            println!("\n{table}");
        }
    }

    Ok(())
}
