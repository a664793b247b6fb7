//! sf - Storefront account CLI
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! sf register --first-name Ann --last-name Lee --email a@x.com \
//!     --password 'Secret123!' --confirm-password 'Secret123!'
//!
//! # Sign in locally, then view and edit the profile
//! sf session set a@x.com
//! sf profile show --pretty
//! sf profile edit --contact 555-0100 --picture me.png
//! ```

mod cli;
mod commands;
mod profile_commands;
mod session_commands;

use crate::{
    cli::Cli, commands::Commands, profile_commands::ProfileCommands,
    session_commands::SessionCommands,
};

use sf_cli::{
    CliClientResult, Client, ClientError, EditableField, ProfileEditor, REGISTERED_MESSAGE,
    RegistrationForm, SessionContext, read_attachment,
};

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let Cli {
        command,
        server,
        pretty,
    } = Cli::parse();

    match run(command, server).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, server: Option<String>) -> CliClientResult<Value> {
    match command {
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
            confirm_password,
            contact,
            picture,
        } => {
            let mut form = RegistrationForm {
                first_name,
                last_name,
                email,
                password,
                confirm_password,
                contact_number: contact,
                profile_image: None,
            };
            if let Some(path) = picture {
                let (mime, bytes) = read_attachment(&path)?;
                form.attach_image(mime, &bytes)?;
            }

            // Local checks before looking for a server
            form.validate()?;

            let client = connect(server)?;
            let ack = form.submit(&client).await?;

            Ok(json!({
                "success": true,
                "id": ack.id,
                "email": ack.email,
                "message": REGISTERED_MESSAGE,
            }))
        }

        Commands::Session { action } => {
            let mut session = load_session()?;
            match action {
                SessionCommands::Set { email } => session.establish(&email)?,
                SessionCommands::Show => {}
                SessionCommands::Clear => session.clear()?,
            }
            Ok(json!({ "email": session.identity() }))
        }

        Commands::Profile { action } => {
            let session = load_session()?;
            let client = connect(server)?;
            let mut editor = ProfileEditor::new(client, session);

            if let Err(e) = editor.load().await {
                report_messages(&mut editor);
                return Err(e);
            }

            match action {
                ProfileCommands::Show => Ok(json!({ "profile": editor.record() })),
                ProfileCommands::Edit {
                    first_name,
                    last_name,
                    contact,
                    password,
                    picture,
                } => {
                    editor.begin_edit()?;

                    let changes = [
                        (EditableField::FirstName, first_name),
                        (EditableField::LastName, last_name),
                        (EditableField::ContactNumber, contact),
                        (EditableField::Password, password),
                    ];
                    let mut changed = false;
                    for (field, value) in changes {
                        if let Some(value) = value {
                            editor.set_field(field, &value)?;
                            changed = true;
                        }
                    }
                    if let Some(path) = picture {
                        let (mime, bytes) = read_attachment(&path)?;
                        editor.attach_image(mime, &bytes)?;
                        changed = true;
                    }

                    if !changed {
                        editor.cancel()?;
                        return Ok(json!({
                            "state": editor.state().name(),
                            "message": "No changes",
                        }));
                    }

                    if let Err(e) = editor.save().await {
                        report_messages(&mut editor);
                        return Err(e);
                    }

                    Ok(json!({
                        "state": editor.state().name(),
                        "notices": editor.drain_notices(),
                        "profile": editor.record(),
                    }))
                }
            }
        }
    }
}

fn load_session() -> CliClientResult<SessionContext> {
    let dir = sf_config::Config::config_dir()
        .map_err(|e| ClientError::session(format!("Cannot locate config directory: {}", e)))?;
    SessionContext::load_from(&dir)
}

/// Explicit flag > port file > error
fn connect(server: Option<String>) -> CliClientResult<Client> {
    server
        .or_else(discover_server_url)
        .map(|url| Client::new(&url))
        .ok_or_else(|| ClientError::transport("No running sf-server found"))
}

fn report_messages<B: sf_cli::ProfileBackend>(editor: &mut ProfileEditor<B>) {
    for notice in editor.drain_notices() {
        eprintln!("{}", notice);
    }
    if let Some(message) = editor.inline_message() {
        eprintln!("{}", message);
    }
}

/// Read `server.json` written by sf-server, skipping files whose PID is dead
fn discover_server_url() -> Option<String> {
    let port_path = sf_config::PortFileInfo::path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".sf/server.json".to_string());

    match sf_config::PortFileInfo::read_live() {
        Ok(Some(info)) => Some(info.url()),
        Ok(None) => {
            eprintln!("No running sf-server found (checked {}).", port_path);
            eprintln!("Start the server with `cargo run -p sf-server`, or pass");
            eprintln!("  sf --server http://127.0.0.1:8000 <command>");
            None
        }
        Err(e) => {
            eprintln!("Error reading port file ({}): {}", port_path, e);
            None
        }
    }
}
