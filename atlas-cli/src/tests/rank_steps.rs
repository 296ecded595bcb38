//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{CatalogFixture, write_utf8};
use super::*;
use crate::rank::{run_cards_with, run_rank_with};
use atlas_scorer::{CardSource, RatedMap};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde::Deserialize;
use std::cell::RefCell;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedReport {
    maps: Vec<RatedMap>,
    region_search: String,
}

#[derive(Debug)]
struct RankWorld {
    fixture: CatalogFixture,
    include_catalog: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        Self {
            fixture: CatalogFixture::new(),
            include_catalog: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, subcommand: &str) -> Vec<String> {
        let mut argv = vec!["atlas".to_owned(), subcommand.to_owned()];
        if *self.include_catalog.borrow() {
            argv.push(self.fixture.catalog().as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn run(&self, subcommand: &str) {
        let invocation = self.build_command_line(subcommand);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            match cli.command {
                Command::Rank(args) => run_rank_with(args, &mut *buffer),
                Command::Cards(args) => run_cards_with(args, &mut *buffer),
            }
        });
        self.result.replace(Some(outcome));
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn report(&self) -> ParsedReport {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON rank report")
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

#[given("a sample catalog exists on disk")]
fn sample_catalog_exists(#[from(world)] world: &RankWorld) {
    assert!(world.fixture.catalog().is_file());
}

#[given("the catalog contains invalid JSON")]
fn catalog_contains_invalid_json(#[from(world)] world: &RankWorld) {
    write_utf8(world.fixture.catalog(), b"{ not valid json");
}

#[given("I omit the catalog path")]
fn omit_catalog_path(#[from(world)] world: &RankWorld) {
    *world.include_catalog.borrow_mut() = false;
}

#[given("I search for {terms}")]
fn search_for(#[from(world)] world: &RankWorld, terms: String) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_SEARCH}"), terms.trim_matches('"').to_owned()]);
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    world.run("rank");
}

#[when("I run the cards command")]
fn run_cards_command(#[from(world)] world: &RankWorld) {
    world.run("cards");
}

#[then("the command succeeds and prints ranked maps")]
fn command_succeeds_and_prints_maps(#[from(world)] world: &RankWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let report = world.report();
    assert_eq!(report.maps.len(), 3);
    assert_eq!(report.maps.first().map(|map| map.score), Some(100.0));
    assert!(!report.region_search.is_empty());
}

#[then("the region search only selects {shorthand}")]
fn region_search_selects(#[from(world)] world: &RankWorld, shorthand: String) {
    let report = world.report();
    let expected = format!("\"{}\"", shorthand.trim_matches('"'));
    assert_eq!(report.region_search, expected);
}

#[then("the command fails because the catalog JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::ParseCatalog { .. } => {}
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[then("the command fails because the catalog path is missing")]
fn command_fails_missing_catalog(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the card list contains only {name}")]
fn card_list_contains_only(#[from(world)] world: &RankWorld, name: String) {
    let stdout = world.stdout.borrow();
    let sources: Vec<CardSource> = serde_json::from_slice(&stdout).expect("output should be JSON");
    let names: Vec<&str> = sources.iter().map(|source| source.name.as_str()).collect();
    assert_eq!(names, [name.trim_matches('"')]);
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(rank_happy_path, "ranking maps from a catalog");
register_rank_scenario!(rank_with_search, "narrowing the ranking with a search");
register_rank_scenario!(rank_invalid_json, "rejecting invalid catalog JSON");
register_rank_scenario!(rank_missing_catalog, "rejecting missing catalog paths");
register_rank_scenario!(cards_listing, "listing card sources");
