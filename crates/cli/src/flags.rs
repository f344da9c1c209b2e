//! Global flags shared by every subcommand.

use clap::Args;
use kafta_core::configuration::Configuration;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalFlags {
    /// Debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// The name of the kafkaconfig context to use
    #[arg(long, global = true, value_name = "NAME")]
    pub context: Option<String>,

    /// Path to the kafkaconfig file to use for CLI requests.
    #[arg(long, global = true, value_name = "PATH")]
    pub kafkaconfig: Option<PathBuf>,
}

impl GlobalFlags {
    /// Applies the parsed flags; options left out keep the current values.
    pub fn bind(self, config: &mut Configuration) {
        config.debug_mode = self.debug;
        if let Some(context) = self.context {
            config.active_context = context;
        }
        if let Some(path) = self.kafkaconfig {
            config.kaftaconfig_file = path;
        }
    }
}
