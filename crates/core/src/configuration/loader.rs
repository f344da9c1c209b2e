//! Reading and writing the kaftaconfig file.
//!
//! The file is read and written wholesale; there is no incremental update and
//! no protection against concurrent writers (last writer wins).

use crate::configuration::error::ConfigError;
use crate::configuration::error::ConfigResult;
use kafta_protocol::kaftaconfig_models::KaftaConfig;
use std::path::Path;
use tracing::debug;

/// Loads the kaftaconfig file at `path`, or produces the default structure.
///
/// Returns the loaded configuration together with an `is_new` flag. The flag
/// is `true` when the file does not exist or holds only whitespace, in which
/// case the returned configuration is [`KaftaConfig::default`] and the caller
/// is expected to persist it.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file exists but cannot be read
/// - The file content is not a valid kaftaconfig document
///
/// # Example
///
/// ```rust,no_run
/// use kafta_core::configuration::loader::load_or_default;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (config, is_new) = load_or_default(Path::new("/home/me/.kafta/config"))?;
/// println!("{} contexts (new file: {})", config.contexts.len(), is_new);
/// # Ok(())
/// # }
/// ```
pub fn load_or_default(path: &Path) -> ConfigResult<(KaftaConfig, bool)> {
    if !path.exists() {
        debug!(path = %path.display(), "kaftaconfig file missing, using defaults");
        return Ok((KaftaConfig::default(), true));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "kaftaconfig file empty, using defaults");
        return Ok((KaftaConfig::default(), true));
    }

    let config: KaftaConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        contexts = config.contexts.len(),
        "kaftaconfig loaded"
    );
    Ok((config, false))
}

/// Serializes `config` and overwrites the file at `path`.
pub fn write(config: &KaftaConfig, path: &Path) -> ConfigResult<()> {
    let content = serde_yaml::to_string(config).map_err(|source| ConfigError::YamlSerialize {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, content).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "kaftaconfig written");
    Ok(())
}
