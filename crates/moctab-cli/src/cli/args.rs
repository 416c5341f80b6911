//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ColorChoice, value_parser};

/// One or more class description files (positional).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("CLASS")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Class description JSON file(s), or - for stdin")
}

/// A single class description file (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("CLASS")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Class description JSON file, or - for stdin")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output options file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with output options; flags override its values")
}

/// Drop table comments (--no-comments).
pub fn no_comments_arg() -> Arg {
    Arg::new("no_comments")
        .long("no-comments")
        .action(ArgAction::SetTrue)
        .help("Omit the comments next to table rows")
}

/// String literal wrap column (--wrap).
pub fn wrap_arg() -> Arg {
    Arg::new("wrap")
        .long("wrap")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Column at which the packed string literal is split (default: 72)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorChoice))
        .help("Colorize the listing")
}

/// Log verbosity (--log-level), accepted by every subcommand.
pub fn log_level_arg() -> Arg {
    Arg::new("log_level")
        .long("log-level")
        .value_name("LEVEL")
        .global(true)
        .value_parser(["error", "warn", "info", "debug", "trace"])
        .help("Log verbosity (overridden by MOCTAB_LOG)")
}

/// Log output format (--log-format), accepted by every subcommand.
pub fn log_format_arg() -> Arg {
    Arg::new("log_format")
        .long("log-format")
        .value_name("FORMAT")
        .global(true)
        .value_parser(["auto", "text", "json"])
        .help("Log format (default: MOCTAB_LOG_FORMAT or text)")
}
