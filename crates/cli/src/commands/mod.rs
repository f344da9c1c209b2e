//! Subcommand definitions and dispatch.

pub mod config;
pub mod schema;

use clap::Subcommand;
use kafta_core::configuration::Configuration;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Modify kafkaconfig files
    #[command(subcommand)]
    Config(config::ConfigCommand),

    /// Query the schema registry
    #[command(subcommand)]
    Schema(schema::SchemaCommand),
}

pub async fn run(command: Commands, configuration: &mut Configuration) -> color_eyre::Result<()> {
    match command {
        Commands::Config(command) => config::run(command, configuration),
        Commands::Schema(command) => schema::run(command, configuration).await,
    }
}
