//! `kafta schema ...`: schema registry queries.

use clap::Subcommand;
use kafta_core::configuration::Configuration;
use kafta_core::schema::list_subjects;

#[derive(Debug, Subcommand)]
pub enum SchemaCommand {
    /// List subjects registered in the schema registry
    #[command(visible_alias = "list")]
    Subjects {
        /// Print the subjects as a JSON array
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: SchemaCommand, config: &Configuration) -> color_eyre::Result<()> {
    match command {
        SchemaCommand::Subjects { json } => {
            let subjects = list_subjects(config).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&subjects)?);
            } else {
                for subject in subjects {
                    println!("{subject}");
                }
            }
        }
    }
    Ok(())
}
