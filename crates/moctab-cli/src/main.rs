mod cli;
mod commands;
mod logging;


use cli::{CheckParams, DumpParams, GenerateParams, LogParams, build_cli};
use commands::CommandError;

fn main() {
    let matches = build_cli().get_matches();

    logging::init(&LogParams::from_matches(&matches).into());

    let result = match matches.subcommand() {
        Some(("generate", m)) => commands::generate::run(GenerateParams::from_matches(m).into()),
        Some(("dump", m)) => commands::dump::run(DumpParams::from_matches(m).into()),
        Some(("check", m)) => commands::check::run(CheckParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        exit_with(err);
    }
}

fn exit_with(err: CommandError) -> ! {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("error: {err}");
    std::process::exit(1);
}
