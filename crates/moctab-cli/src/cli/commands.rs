//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("moctab")
        .about("Meta-object table compiler for introspectable C++ classes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_level_arg())
        .arg(log_format_arg())
        .subcommand(generate_command())
        .subcommand(dump_command())
        .subcommand(check_command())
}

/// Generate the meta-object source for one or more classes.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate meta-object source from class descriptions")
        .override_usage(
            "\
  moctab generate <CLASS>... [-o <FILE>]
  moctab generate <CLASS> --config <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  moctab generate counter.json              # print to stdout
  moctab generate a.json b.json -o moc.cpp  # concatenate into one file
  moctab generate counter.json --no-comments --wrap 100"#,
        )
        .arg(inputs_arg())
        .arg(output_file_arg())
        .arg(config_arg())
        .arg(no_comments_arg())
        .arg(wrap_arg())
}

/// Show the decoded data array of one class.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the encoded meta-object table")
        .after_help(
            r#"EXAMPLES:
  moctab dump counter.json
  moctab dump counter.json --color always | less -R"#,
        )
        .arg(input_arg())
        .arg(color_arg())
}

/// Validate class descriptions.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate class descriptions")
        .after_help(
            r#"EXAMPLES:
  moctab check counter.json
  moctab check *.json"#,
        )
        .arg(inputs_arg())
}
