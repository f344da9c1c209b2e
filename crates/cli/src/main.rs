mod commands;
mod flags;
mod logging;

use clap::Parser;
use commands::Commands;
use flags::GlobalFlags;
use kafta_core::configuration::Configuration;

/// Application name recorded in the configuration and the default user agent.
const APP_NAME: &str = "kafta";

#[derive(Debug, Parser)]
#[command(name = "kafta", version)]
#[command(about = "Administration CLI for Kafka clusters and their schema registry", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub flags: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.flags.debug);

    // Without a config file there is nothing to run against.
    let mut configuration = match Configuration::initialize(APP_NAME) {
        Ok(configuration) => configuration,
        Err(err) => {
            tracing::error!(error = %err, "failed to initialize configuration");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    cli.flags.bind(&mut configuration);
    configuration.ensure_config()?;

    commands::run(cli.command, &mut configuration).await
}
