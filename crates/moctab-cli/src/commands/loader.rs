use std::fs;
use std::io::{self, Read};
use std::path::Path;

use moctab_compiler::Config;
use moctab_core::ClassDescription;
use tracing::debug;

use super::CommandError;

/// Read and validate one class description. `-` reads stdin.
pub fn load_description(path: &Path) -> Result<ClassDescription, CommandError> {
    let json = read_input(path)?;
    let class = ClassDescription::from_json(&json).map_err(|source| CommandError::Description {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), class = %class.qualified_name, "loaded description");
    Ok(class)
}

/// Output options from an optional JSON file, then the flag overrides.
pub fn load_config(
    path: Option<&Path>,
    comments: Option<bool>,
    wrap: Option<usize>,
) -> Result<Config, CommandError> {
    let mut config = match path {
        Some(path) => {
            let json = read_input(path)?;
            Config::from_json(&json).map_err(|source| CommandError::Config {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => Config::default(),
    };

    if let Some(comments) = comments {
        config = config.comments(comments);
    }
    if let Some(wrap) = wrap {
        config = config.string_wrap(wrap);
    }
    Ok(config)
}

fn read_input(path: &Path) -> Result<String, CommandError> {
    let read_err = |source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}
