//! Command-line interface for ranking Atlas maps from a static catalog.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_cards, run_rank};

const ARG_CATALOG: &str = "catalog";
const ARG_LAYOUT_WEIGHT: &str = "layout-weight";
const ARG_DENSITY_WEIGHT: &str = "density-weight";
const ARG_BOSS_WEIGHT: &str = "boss-weight";
const ARG_CARD_WEIGHT: &str = "card-weight";
const ARG_CARD_BASELINE: &str = "card-baseline";
const ARG_CARD_BASELINE_COUNT: &str = "card-baseline-count";
const ARG_CARD_MIN_PRICE: &str = "card-min-price";
const ARG_CARD_PRICE_SOURCE: &str = "card-price-source";
const ARG_CARD_VALUE_SOURCE: &str = "card-value-source";
const ARG_CARD_DISPLAY: &str = "card-display";
const ARG_VOIDSTONES: &str = "voidstones";
const ARG_SEARCH: &str = "search";
const ARG_OUTPUT: &str = "output";
const ENV_CATALOG: &str = "ATLAS_CMDS_RANK_CATALOG";

/// Run the Atlas CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Cards(args) => run_cards(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    about = "Rank Atlas maps by layout, density, boss and card value",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print ranked maps and the region search string as JSON.
    Rank(RankArgs),
    /// Print every card with the ranked maps that drop it as JSON.
    Cards(RankArgs),
}

#[cfg(test)]
mod tests;
