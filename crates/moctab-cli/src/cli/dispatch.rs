//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls bridging dispatch to command handlers

use std::path::PathBuf;

use clap::{ArgMatches, ColorChoice};
use moctab_format::DumpStyle;

use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;
use crate::logging::{LogFormat, LogLevel, LogOptions};

pub struct GenerateParams {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_comments: bool,
    pub wrap: Option<usize>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: input_paths(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            no_comments: m.get_flag("no_comments"),
            wrap: m.get_one::<usize>("wrap").copied(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            inputs: p.inputs,
            output: p.output,
            config: p.config,
            // The flag can only switch comments off; the file decides otherwise.
            comments: p.no_comments.then_some(false),
            wrap: p.wrap,
        }
    }
}

pub struct DumpParams {
    pub input: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            color: m
                .get_one::<ColorChoice>("color")
                .copied()
                .unwrap_or_default(),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input,
            style: dump_style(p.color),
        }
    }
}

pub struct CheckParams {
    pub inputs: Vec<PathBuf>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: input_paths(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self { inputs: p.inputs }
    }
}

/// Global logging flags, read from the top-level matches.
pub struct LogParams {
    pub level: Option<LogLevel>,
    pub format: Option<LogFormat>,
}

impl LogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            level: m
                .get_one::<String>("log_level")
                .and_then(|s| LogLevel::parse(s)),
            format: m
                .get_one::<String>("log_format")
                .and_then(|s| LogFormat::parse(s)),
        }
    }
}

impl From<LogParams> for LogOptions {
    fn from(p: LogParams) -> Self {
        LogOptions::from_env().with_overrides(p.level, p.format)
    }
}

fn input_paths(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("inputs")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

/// `auto` paints only when the listing goes to a terminal.
fn dump_style(color: ColorChoice) -> DumpStyle {
    let ansi = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
    };
    if ansi { DumpStyle::Ansi } else { DumpStyle::Plain }
}
