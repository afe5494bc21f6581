use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => commands::report::handle(args, flags).await,
        Commands::Sessions(args) => commands::sessions::handle(args, flags).await,
        Commands::Schema => commands::schema::handle(flags),
    }
}
