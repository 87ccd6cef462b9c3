//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "generate", "wipe").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Uri { .. } => "uri",
        Commands::Show { .. } => "show",
        Commands::Wipe { store: Some(_) } => "wipe.store",
        Commands::Wipe { store: None } => "wipe.root",
    }
}
