use crate::{profile_commands::ProfileCommands, session_commands::SessionCommands};

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register a new account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        contact: Option<String>,
        /// Profile image file
        #[arg(long)]
        picture: Option<PathBuf>,
    },

    /// Session identity operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Profile operations (require a session)
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}
