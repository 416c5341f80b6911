use std::path::PathBuf;

use moctab_compiler::emit;
use moctab_format::{DumpStyle, MetaDataView, dump};

use super::CommandError;
use super::loader::load_description;

pub struct DumpArgs {
    pub input: PathBuf,
    pub style: DumpStyle,
}

pub fn run(args: DumpArgs) -> Result<(), CommandError> {
    print!("{}", render(&args)?);
    Ok(())
}

/// Encode the class and decode it back into the sectioned listing.
pub fn render(args: &DumpArgs) -> Result<String, CommandError> {
    let class = load_description(&args.input)?;
    let emitted = emit(&class).map_err(|source| CommandError::Generate {
        path: args.input.clone(),
        source,
    })?;

    let words = emitted.table.values();
    let view = MetaDataView::new(&words).map_err(|source| CommandError::Decode {
        path: args.input.clone(),
        source,
    })?;
    let strings: Vec<&str> = emitted.strings.iter().collect();

    Ok(dump(&view, &strings, args.style))
}
