use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Remember the signed-in identity
    Set {
        /// Account email
        email: String,
    },
    /// Print the current identity
    Show,
    /// Sign out
    Clear,
}
