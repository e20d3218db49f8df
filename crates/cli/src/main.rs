// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocket Odds CLI.
//!
//! Prints the showdown win probabilities of starting hands:
//!
//! ```bash
//! # CSV table for all hands and 2 to 10 players.
//! $ pocketodds --table --trials 5000 > table.csv
//! # The same table as JSON.
//! $ pocketodds --table --json > table.json
//! # 13x13 chart for 6 players.
//! $ pocketodds --players 6
//! # A single hand for all number of players.
//! $ pocketodds --hand AKs --split-pot
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::{
    io::{self, BufWriter, Write},
    time::Instant,
};

use pocketodds_cards::StartingHand;
use pocketodds_sim::{Scoring, SimConfig, Simulator, build_table, build_table_with};

mod chart;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of trials for each hand and number of players.
    #[clap(long, short, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,
    /// Number of parallel tasks, defaults to the number of cores.
    #[clap(long)]
    tasks: Option<usize>,
    /// Seed for a reproducible run.
    #[clap(long)]
    seed: Option<u64>,
    /// Count ties as a share of the pot instead of a loss.
    #[clap(long)]
    split_pot: bool,
    /// Print a chart for this number of players.
    #[clap(long, short, conflicts_with = "hand", value_parser = clap::value_parser!(u8).range(2..=10))]
    players: Option<u8>,
    /// Print the results for a single starting hand (e.g. AA, AKs, 72o).
    #[clap(long)]
    hand: Option<StartingHand>,
    /// Print the table for all hands and 2 to 10 players, the default.
    #[clap(long, conflicts_with_all = ["players", "hand"])]
    table: bool,
    /// Write JSON instead of text.
    #[clap(long)]
    json: bool,
}

impl Cli {
    fn sim_config(&self) -> SimConfig {
        let defaults = SimConfig::default();
        SimConfig {
            trials: self.trials,
            num_tasks: self.tasks.unwrap_or(defaults.num_tasks),
            seed: self.seed,
            scoring: if self.split_pot {
                Scoring::SplitPot
            } else {
                Scoring::StrictWin
            },
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.sim_config();
    info!(
        "Running {} trials per cell with {} tasks",
        config.trials, config.num_tasks
    );

    let sim = Simulator::new(config);
    let now = Instant::now();
    let mut out = BufWriter::new(io::stdout().lock());

    if cli.table || (cli.players.is_none() && cli.hand.is_none()) {
        let table = build_table(&sim)?;
        if cli.json {
            chart::write_json(&mut out, &table)?;
        } else {
            chart::write_csv(&mut out, &table)?;
        }
    } else if let Some(num_players) = cli.players {
        let num_players = num_players as usize;
        if cli.json {
            let table = build_table_with(&sim, num_players..=num_players, |_, _, _| {})?;
            chart::write_json(&mut out, &table)?;
        } else {
            chart::write_chart(&mut out, &sim, num_players)?;
        }
    } else if let Some(hand) = cli.hand {
        if cli.json {
            chart::write_json(&mut out, &chart::hand_results(&sim, hand)?)?;
        } else {
            chart::write_hand(&mut out, &sim, hand)?;
        }
    }

    out.flush()?;
    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from(["pocketodds", "--hand", "AKs", "--split-pot", "-t", "50"])
            .unwrap();
        assert_eq!(cli.hand, Some("AKs".parse().unwrap()));
        assert_eq!(cli.trials, 50);

        let config = cli.sim_config();
        assert_eq!(config.scoring, Scoring::SplitPot);
        assert_eq!(config.trials, 50);
        assert!(config.num_tasks >= 1);

        assert!(Cli::try_parse_from(["pocketodds", "--players", "11"]).is_err());
        assert!(Cli::try_parse_from(["pocketodds", "--players", "1"]).is_err());
        assert!(Cli::try_parse_from(["pocketodds", "--trials", "0"]).is_err());
        assert!(Cli::try_parse_from(["pocketodds", "--hand", "AKx"]).is_err());
        assert!(Cli::try_parse_from(["pocketodds", "--hand", "AA", "--players", "3"]).is_err());
    }

    #[test]
    fn parse_table_args() {
        let cli = Cli::try_parse_from(["pocketodds", "--table", "--json"]).unwrap();
        assert!(cli.table);
        assert!(cli.json);
        assert_eq!(cli.players, None);
        assert_eq!(cli.hand, None);

        let cli = Cli::try_parse_from(["pocketodds", "--players", "4", "--json"]).unwrap();
        assert_eq!(cli.players, Some(4));
        assert!(!cli.table);

        assert!(Cli::try_parse_from(["pocketodds", "--table", "--players", "3"]).is_err());
        assert!(Cli::try_parse_from(["pocketodds", "--table", "--hand", "AKs"]).is_err());
    }
}
