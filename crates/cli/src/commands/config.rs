//! `kafta config ...`: inspect and edit contexts in the kafkaconfig file.

use clap::Args;
use clap::Subcommand;
use color_eyre::eyre::eyre;
use colored::Colorize;
use kafta_core::configuration::Configuration;
use kafta_protocol::kaftaconfig_models::Context;
use kafta_protocol::kaftaconfig_models::SchemaRegistryAuth;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the current-context
    CurrentContext,

    /// Describe one or many contexts
    GetContexts,

    /// Set the current-context in the kafkaconfig file
    UseContext {
        /// Name of the context
        name: String,
    },

    /// Set a context entry in the kafkaconfig file
    SetContext(SetContextArgs),

    /// Delete the specified context from the kafkaconfig file
    DeleteContext {
        /// Name of the context
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct SetContextArgs {
    /// Name of the context
    pub name: String,

    /// Comma separated list of seed brokers
    #[arg(long, value_delimiter = ',', value_name = "HOST:PORT")]
    pub bootstrap_servers: Option<Vec<String>>,

    /// Base URL of the schema registry
    #[arg(long, value_name = "URL")]
    pub schema_registry: Option<String>,

    /// Schema registry basic auth user
    #[arg(long, value_name = "USER")]
    pub schema_registry_user: Option<String>,

    /// Schema registry basic auth password
    #[arg(long, value_name = "PASSWORD", requires = "schema_registry_user")]
    pub schema_registry_password: Option<String>,
}

impl SetContextArgs {
    /// Overlays the flags given on the command line onto `context`.
    fn apply_to(self, mut context: Context) -> Context {
        if let Some(servers) = self.bootstrap_servers {
            context.bootstrap_servers = servers;
        }
        if let Some(url) = self.schema_registry {
            context.schema_registry = Some(url);
        }
        if let Some(username) = self.schema_registry_user {
            context.schema_registry_auth = Some(SchemaRegistryAuth {
                username,
                password: self.schema_registry_password.unwrap_or_default(),
            });
        }
        context
    }
}

pub fn run(command: ConfigCommand, config: &mut Configuration) -> color_eyre::Result<()> {
    match command {
        ConfigCommand::CurrentContext => {
            let name = config.current_context_name();
            if name.is_empty() {
                return Err(eyre!("current-context is not set"));
            }
            println!("{name}");
        }
        ConfigCommand::GetContexts => {
            print!("{}", render_contexts(config));
        }
        ConfigCommand::UseContext { name } => {
            config.use_context(&name)?;
            config.update_config()?;
            info!(context = %name, "current context changed");
            println!("Switched to context {}.", name.bold());
        }
        ConfigCommand::SetContext(args) => {
            let name = args.name.clone();
            let existing = config.kafta_data.contexts.get(&name).cloned();
            let created = existing.is_none();
            let context = args.apply_to(existing.unwrap_or_default());
            config.set_context(&name, context);
            config.update_config()?;
            if created {
                println!("Context {} created.", name.bold());
            } else {
                println!("Context {} modified.", name.bold());
            }
        }
        ConfigCommand::DeleteContext { name } => {
            config.delete_context(&name)?;
            config.update_config()?;
            println!("Deleted context {} from {}.", name.bold(), config.kaftaconfig_file.display());
        }
    }
    Ok(())
}

/// Renders the contexts table, marking the current one with `*`.
fn render_contexts(config: &Configuration) -> String {
    let names = config.context_names();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0).max("NAME".len());
    let current = config.current_context_name();

    let mut out = format!(
        "{:<7} {:<width$} {:<30} {}\n",
        "CURRENT", "NAME", "BOOTSTRAP SERVERS", "SCHEMA REGISTRY"
    );
    for (name, context) in &config.kafta_data.contexts {
        let marker = if name == current { "*" } else { "" };
        out.push_str(&format!(
            "{:<7} {:<width$} {:<30} {}\n",
            marker,
            name,
            context.bootstrap_servers.join(","),
            context.schema_registry.as_deref().unwrap_or("")
        ));
    }
    out
}
