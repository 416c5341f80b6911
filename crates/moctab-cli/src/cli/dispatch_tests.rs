//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Argument parsing per subcommand
//! 2. Global logging flags after the subcommand
//! 3. Params extraction and conversion into command args

use std::path::PathBuf;

use clap::ColorChoice;
use moctab_format::DumpStyle;

use super::*;
use crate::cli::commands::{check_command, dump_command, generate_command};
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;
use crate::logging::{LogFormat, LogLevel};

#[test]
fn generate_collects_inputs_in_order() {
    let m = generate_command()
        .try_get_matches_from(["generate", "b.json", "a.json", "-o", "moc.cpp"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(
        params.inputs,
        [PathBuf::from("b.json"), PathBuf::from("a.json")]
    );
    assert_eq!(params.output, Some(PathBuf::from("moc.cpp")));
    assert!(!params.no_comments);
    assert_eq!(params.wrap, None);
}

#[test]
fn generate_requires_an_input() {
    let result = generate_command().try_get_matches_from(["generate"]);

    assert!(result.is_err());
}

#[test]
fn generate_output_flags_map_to_overrides() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "a.json",
            "--config",
            "moctab.json",
            "--no-comments",
            "--wrap",
            "100",
        ])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.config, Some(PathBuf::from("moctab.json")));
    assert_eq!(args.comments, Some(false));
    assert_eq!(args.wrap, Some(100));
}

#[test]
fn comments_left_to_config_without_flag() {
    let m = generate_command()
        .try_get_matches_from(["generate", "a.json"])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.comments, None);
}

#[test]
fn wrap_must_be_a_number() {
    let result = generate_command().try_get_matches_from(["generate", "a.json", "--wrap", "wide"]);

    assert!(result.is_err());
}

#[test]
fn dump_takes_one_input_and_color() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a.json", "--color", "never"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("a.json"));
    assert_eq!(params.color, ColorChoice::Never);

    let result = dump_command().try_get_matches_from(["dump", "a.json", "b.json"]);
    assert!(result.is_err());
}

#[test]
fn dump_color_defaults_to_auto() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a.json"])
        .unwrap();

    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Auto);
}

#[test]
fn dump_color_choice_selects_style() {
    let always = dump_command()
        .try_get_matches_from(["dump", "a.json", "--color", "always"])
        .unwrap();
    let never = dump_command()
        .try_get_matches_from(["dump", "a.json", "--color", "never"])
        .unwrap();

    let args: DumpArgs = DumpParams::from_matches(&always).into();
    assert_eq!(args.style, DumpStyle::Ansi);
    let args: DumpArgs = DumpParams::from_matches(&never).into();
    assert_eq!(args.style, DumpStyle::Plain);
}

#[test]
fn dump_rejects_unknown_color() {
    let result = dump_command().try_get_matches_from(["dump", "a.json", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn check_accepts_many_inputs() {
    let m = check_command()
        .try_get_matches_from(["check", "a.json", "b.json", "c.json"])
        .unwrap();

    assert_eq!(CheckParams::from_matches(&m).inputs.len(), 3);
}

#[test]
fn log_flags_are_global() {
    let m = build_cli()
        .try_get_matches_from([
            "moctab",
            "check",
            "a.json",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
    let params = LogParams::from_matches(&m);

    assert_eq!(params.level, Some(LogLevel::Debug));
    assert_eq!(params.format, Some(LogFormat::Json));
}

#[test]
fn log_flags_are_optional() {
    let m = build_cli()
        .try_get_matches_from(["moctab", "check", "a.json"])
        .unwrap();
    let params = LogParams::from_matches(&m);

    assert_eq!(params.level, None);
    assert_eq!(params.format, None);
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["moctab"]);

    assert!(result.is_err());
}

#[test]
fn help_lists_output_options() {
    let help = generate_command().render_help().to_string();

    assert!(help.contains("--no-comments"));
    assert!(help.contains("--wrap <N>"));
    assert!(help.contains("--config <FILE>"));
    assert!(help.contains("EXAMPLES:"));
}
