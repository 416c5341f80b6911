use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use moctab_compiler::generate;
use tracing::info;

use super::CommandError;
use super::loader::{load_config, load_description};

pub struct GenerateArgs {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Overrides the config file when set.
    pub comments: Option<bool>,
    pub wrap: Option<usize>,
}

pub fn run(args: GenerateArgs) -> Result<(), CommandError> {
    let source = render(&args)?;
    write_output(args.output.as_deref(), &source)?;
    info!(classes = args.inputs.len(), bytes = source.len(), "wrote generated source");
    Ok(())
}

/// Generate every input in argument order and concatenate the sources.
pub fn render(args: &GenerateArgs) -> Result<String, CommandError> {
    let config = load_config(args.config.as_deref(), args.comments, args.wrap)?;

    let mut source = String::new();
    for path in &args.inputs {
        let class = load_description(path)?;
        let generated = generate(&class, &config).map_err(|source| CommandError::Generate {
            path: path.clone(),
            source,
        })?;
        source.push_str(&generated.source);
    }
    Ok(source)
}

fn write_output(path: Option<&Path>, source: &str) -> Result<(), CommandError> {
    match path {
        Some(path) => fs::write(path, source).map_err(|source| CommandError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(source.as_bytes())
            .map_err(CommandError::Stdout),
    }
}
