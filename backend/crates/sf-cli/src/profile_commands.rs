use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print the profile of the session identity
    Show,
    /// Edit and save the profile; with no changes the edit is cancelled
    Edit {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        /// Empty string clears the contact number
        #[arg(long)]
        contact: Option<String>,
        /// New password; ends the session on success
        #[arg(long)]
        password: Option<String>,
        /// Replacement profile image file
        #[arg(long)]
        picture: Option<PathBuf>,
    },
}
