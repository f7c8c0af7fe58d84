use blockfall::config::{Cli, Mode, Settings};
use blockfall::headless;
use clap::Parser;

fn settings(args: &[&str]) -> Settings {
    let cli = Cli::try_parse_from(std::iter::once("blockfall").chain(args.iter().copied())).unwrap();
    Settings::from_cli(cli).unwrap()
}

#[test]
fn headless_run_is_deterministic_for_a_seed() {
    let s = settings(&["headless", "--seed", "99", "--max-pieces", "40"]);
    assert_eq!(s.mode, Mode::Headless { max_pieces: 40 });
    assert_eq!(headless::run(&s), headless::run(&s));
}

#[test]
fn headless_report_serializes_to_json() {
    let s = settings(&["headless", "--seed", "5", "--max-pieces", "10", "--width", "8", "--height", "12"]);
    let report = headless::run(&s);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["seed"], 5);
    assert_eq!(json["snapshot"]["width"], 8);
    assert_eq!(json["snapshot"]["rows"].as_array().unwrap().len(), 12);
    assert_eq!(json["pieces_locked"], report.pieces_locked);
    assert!(json["snapshot"]["next"].get("x").is_none());
}

#[test]
fn headless_stops_at_game_over() {
    let s = settings(&["headless", "--seed", "3", "--max-pieces", "100000", "--height", "6"]);
    let report = headless::run(&s);
    assert!(report.game_over);
    assert!(report.pieces_locked < 100000);
}
