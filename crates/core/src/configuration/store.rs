//! The process-wide configuration and the active-context resolver.

use crate::configuration::error::ConfigError;
use crate::configuration::error::ConfigInitError;
use crate::configuration::error::ConfigResult;
use crate::configuration::loader;
use kafta_protocol::kaftaconfig_models::ConnectionConfig;
use kafta_protocol::kaftaconfig_models::Context;
use kafta_protocol::kaftaconfig_models::KaftaConfig;
use std::fs::OpenOptions;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;

/// Name of the kaftaconfig file inside [`DEFAULT_FOLDER_NAME`].
pub const DEFAULT_FILE_NAME: &str = "config";

/// Folder under the home directory that holds the kaftaconfig file.
pub const DEFAULT_FOLDER_NAME: &str = ".kafta";

/// Runtime configuration, created once at startup.
///
/// Owns the persisted [`KaftaConfig`]; commands borrow it through this
/// struct rather than through any global state.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Enables debug output.
    pub debug_mode: bool,

    /// Name of the running application.
    pub app_name: String,

    /// Context override from the command line. Empty means "use the
    /// current context stored in the file".
    pub active_context: String,

    /// Path of the kaftaconfig file.
    pub kaftaconfig_file: PathBuf,

    /// The persisted configuration. Holds defaults until [`Configuration::ensure_config`] runs.
    pub kafta_data: KaftaConfig,
}

/// Returns the home directory of the current user.
pub fn home_dir() -> Result<PathBuf, ConfigInitError> {
    dirs::home_dir().ok_or(ConfigInitError::HomeDirUnavailable)
}

/// Returns `<home>/.kafta/config`.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_FOLDER_NAME).join(DEFAULT_FILE_NAME)
}

impl Configuration {
    /// Creates the configuration for `app_name`, backed by `~/.kafta/config`.
    ///
    /// The file (and its folder) is created if missing. Any failure here is a
    /// startup precondition the caller cannot recover from.
    pub fn initialize(app_name: &str) -> Result<Self, ConfigInitError> {
        let home = home_dir()?;
        Self::initialize_in(app_name, &home)
    }

    /// Same as [`Configuration::initialize`], rooted at an explicit home directory.
    pub fn initialize_in(app_name: &str, home: &Path) -> Result<Self, ConfigInitError> {
        let config_path = default_config_path(home);

        if let Some(folder) = config_path.parent() {
            std::fs::create_dir_all(folder).map_err(|source| ConfigInitError::CreateDir {
                path: folder.to_path_buf(),
                source,
            })?;
        }

        touch(&config_path).map_err(|source| ConfigInitError::CreateFile {
            path: config_path.clone(),
            source,
        })?;

        Ok(Self {
            debug_mode: false,
            app_name: app_name.to_string(),
            active_context: String::new(),
            kaftaconfig_file: config_path,
            kafta_data: KaftaConfig::default(),
        })
    }

    /// Loads the persisted configuration, writing the default back when the
    /// file was missing or empty.
    pub fn ensure_config(&mut self) -> ConfigResult<()> {
        let (data, is_new) = loader::load_or_default(&self.kaftaconfig_file)?;
        self.kafta_data = data;
        if is_new {
            debug!(path = %self.kaftaconfig_file.display(), "writing default kaftaconfig");
            self.update_config()?;
        }
        Ok(())
    }

    /// Overwrites the kaftaconfig file with the in-memory data.
    pub fn update_config(&self) -> ConfigResult<()> {
        loader::write(&self.kafta_data, &self.kaftaconfig_file)
    }

    /// Name of the context [`Configuration::get_context`] would resolve, if any.
    pub fn resolved_context_name(&self) -> Option<&str> {
        let name = if self.active_context.is_empty() {
            self.kafta_data.current_context.as_str()
        } else {
            self.active_context.as_str()
        };
        (!name.is_empty()).then_some(name)
    }

    /// Returns the active connection profile.
    ///
    /// The `--context` override wins over the persisted current context.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoContextSelected`] when neither names a context
    /// - [`ConfigError::ContextNotFound`] when the name is not a known context
    pub fn get_context(&self) -> ConfigResult<&Context> {
        let name = self
            .resolved_context_name()
            .ok_or(ConfigError::NoContextSelected)?;
        self.kafta_data
            .contexts
            .get(name)
            .ok_or_else(|| ConfigError::ContextNotFound(name.to_string()))
    }

    /// Connection settings shared by all contexts.
    pub fn connection_config(&self) -> &ConnectionConfig {
        &self.kafta_data.connection
    }

    /// The persisted current context name (may be empty).
    pub fn current_context_name(&self) -> &str {
        &self.kafta_data.current_context
    }

    /// All context names, sorted.
    pub fn context_names(&self) -> Vec<&str> {
        self.kafta_data.contexts.keys().map(String::as_str).collect()
    }

    /// Makes `name` the persisted current context.
    pub fn use_context(&mut self, name: &str) -> ConfigResult<()> {
        if !self.kafta_data.contexts.contains_key(name) {
            return Err(ConfigError::ContextNotFound(name.to_string()));
        }
        self.kafta_data.current_context = name.to_string();
        Ok(())
    }

    /// Inserts or replaces the context `name`.
    ///
    /// The first context added to an empty selection becomes current.
    pub fn set_context(&mut self, name: &str, context: Context) {
        self.kafta_data.contexts.insert(name.to_string(), context);
        if self.kafta_data.current_context.is_empty() {
            self.kafta_data.current_context = name.to_string();
        }
    }

    /// Removes the context `name`, clearing the current context if it pointed there.
    pub fn delete_context(&mut self, name: &str) -> ConfigResult<Context> {
        let removed = self
            .kafta_data
            .contexts
            .remove(name)
            .ok_or_else(|| ConfigError::ContextNotFound(name.to_string()))?;
        if self.kafta_data.current_context == name {
            self.kafta_data.current_context.clear();
        }
        Ok(removed)
    }
}

/// Opens `path` append+create+write-only, creating it with mode 0644 when missing.
fn touch(path: &Path) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path).map(drop)
}
