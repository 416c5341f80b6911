use std::path::PathBuf;

use tracing::info;

use super::CommandError;
use super::loader::load_description;

pub struct CheckArgs {
    pub inputs: Vec<PathBuf>,
}

/// Validate every input, stopping at the first failure.
pub fn run(args: CheckArgs) -> Result<(), CommandError> {
    for path in &args.inputs {
        let class = load_description(path)?;
        info!(
            path = %path.display(),
            class = %class.qualified_name,
            methods = class.method_count(),
            properties = class.properties.len(),
            "description is valid"
        );
    }

    // Silent on success (like cargo check)
    Ok(())
}
