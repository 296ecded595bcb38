//! `rank` and `cards` command implementation for the Atlas CLI.

use atlas_core::{
    CardDisplay, Catalog, DEFAULT_CARD_BASELINE, PriceSource, RankParameters, SearchQuery,
    ValueSource, Voidstones,
};
use atlas_fs::{create_utf8_file, open_utf8_file};
use atlas_scorer::{
    CardSource, RatedMap, card_sources, filter_cards, filter_maps, rate_maps, region_search,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Write};

use crate::{
    ARG_BOSS_WEIGHT, ARG_CARD_BASELINE, ARG_CARD_BASELINE_COUNT, ARG_CARD_DISPLAY,
    ARG_CARD_MIN_PRICE, ARG_CARD_PRICE_SOURCE, ARG_CARD_VALUE_SOURCE, ARG_CARD_WEIGHT,
    ARG_CATALOG, ARG_DENSITY_WEIGHT, ARG_LAYOUT_WEIGHT, ARG_OUTPUT, ARG_SEARCH, ARG_VOIDSTONES,
    CliError, ENV_CATALOG,
};

/// CLI arguments shared by the `rank` and `cards` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank every map in a JSON catalog by weighting its authored \
                 layout, density and boss ratings against the value of the \
                 divination cards it drops. Card value is derived from drop \
                 weights relative to a baseline card and current prices.",
    about = "Rank Atlas maps from a catalog"
)]
#[ortho_config(prefix = "ATLAS")]
pub(crate) struct RankArgs {
    /// Path to the JSON catalog of maps and cards.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Multiplier for the layout rating.
    #[arg(long = ARG_LAYOUT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) layout_weight: Option<f64>,
    /// Multiplier for the density rating.
    #[arg(long = ARG_DENSITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) density_weight: Option<f64>,
    /// Multiplier for the boss rating.
    #[arg(long = ARG_BOSS_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) boss_weight: Option<f64>,
    /// Multiplier for the summed card scores.
    #[arg(long = ARG_CARD_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) card_weight: Option<f64>,
    /// Card used as the drop-rate reference.
    #[arg(long = ARG_CARD_BASELINE, value_name = "card")]
    #[serde(default)]
    pub(crate) card_baseline: Option<String>,
    /// Observed baseline drops; negative means one every N maps.
    #[arg(
        long = ARG_CARD_BASELINE_COUNT,
        value_name = "count",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) card_baseline_count: Option<f64>,
    /// Cards priced below this are worth nothing.
    #[arg(long = ARG_CARD_MIN_PRICE, value_name = "chaos")]
    #[serde(default)]
    pub(crate) card_min_price: Option<f64>,
    /// Price market: league or standard.
    #[arg(long = ARG_CARD_PRICE_SOURCE, value_name = "source")]
    #[serde(default)]
    pub(crate) card_price_source: Option<PriceSource>,
    /// Value model: map or kirac.
    #[arg(long = ARG_CARD_VALUE_SOURCE, value_name = "source")]
    #[serde(default)]
    pub(crate) card_value_source: Option<ValueSource>,
    /// Visible cards: all, high, drop or high+drop.
    #[arg(long = ARG_CARD_DISPLAY, value_name = "mode")]
    #[serde(default)]
    pub(crate) card_display: Option<CardDisplay>,
    /// Atlas voidstones held (0-4).
    #[arg(long = ARG_VOIDSTONES, value_name = "count")]
    #[serde(default)]
    pub(crate) voidstones: Option<u8>,
    /// Comma-separated search terms; prefix a term with '-' to exclude it.
    #[arg(long = ARG_SEARCH, value_name = "terms")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved configuration for one ranking run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Ranking parameters with defaults filled in.
    pub(crate) params: RankParameters,
    /// Parsed search query.
    pub(crate) search: SearchQuery,
    /// Optional report destination.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog, ARG_CATALOG)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match atlas_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;

        let defaults = RankParameters::default();
        let voidstones = match args.voidstones {
            Some(count) => Voidstones::new(count)?,
            None => defaults.voidstones,
        };
        let params = RankParameters {
            layout_weight: args.layout_weight.unwrap_or(defaults.layout_weight),
            density_weight: args.density_weight.unwrap_or(defaults.density_weight),
            boss_weight: args.boss_weight.unwrap_or(defaults.boss_weight),
            card_weight: args.card_weight.unwrap_or(defaults.card_weight),
            card_baseline_name: args
                .card_baseline
                .unwrap_or_else(|| DEFAULT_CARD_BASELINE.to_owned()),
            card_baseline_count: args
                .card_baseline_count
                .unwrap_or(defaults.card_baseline_count),
            card_min_price: args.card_min_price.unwrap_or(defaults.card_min_price),
            card_price_source: args.card_price_source.unwrap_or(defaults.card_price_source),
            card_value_source: args.card_value_source.unwrap_or(defaults.card_value_source),
            card_display: args.card_display.unwrap_or(defaults.card_display),
            voidstones,
        };
        let search = args
            .search
            .as_deref()
            .map(SearchQuery::parse)
            .unwrap_or_default();

        Ok(Self {
            catalog,
            params,
            search,
            output: args.output,
        })
    }
}

/// JSON document printed by `atlas rank`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankReport {
    /// Ranked maps that survive the search, best first.
    pub(crate) maps: Vec<RatedMap>,
    /// Quoted shorthand string for the in-game region search box.
    pub(crate) region_search: String,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_cards(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_cards_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let ranked = rank_catalog(&config)?;
    let maps: Vec<RatedMap> = filter_maps(&ranked, &config.search)
        .into_iter()
        .cloned()
        .collect();
    let region_search = region_search(maps.iter().map(|map| map.shorthand.as_str()));
    let report = RankReport {
        maps,
        region_search,
    };
    emit_report(&config, writer, &report)
}

pub(super) fn run_cards_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let ranked = rank_catalog(&config)?;
    let sources = card_sources(&ranked);
    let visible: Vec<&CardSource> = filter_cards(&sources, &config.search);
    emit_report(&config, writer, &visible)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn rank_catalog(config: &RankConfig) -> Result<Vec<RatedMap>, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    Ok(rate_maps(&catalog, &config.params)?)
}

/// Loads a JSON-encoded [`Catalog`] from disk.
pub(super) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

fn emit_report<T: Serialize + ?Sized>(
    config: &RankConfig,
    writer: &mut dyn Write,
    report: &T,
) -> Result<(), CliError> {
    let Some(path) = config.output.as_deref() else {
        return write_report(writer, report);
    };
    let file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file_writer = BufWriter::new(file);
    write_report(&mut file_writer, report)?;
    file_writer.flush().map_err(CliError::WriteOutput)
}

fn write_report<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    report: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
