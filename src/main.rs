mod api;
mod auth;
mod cli;
mod commands;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let Cli { token, command } = Cli::parse();
    let token_override = token.as_deref();

    match command {
        Commands::SetToken { token } => commands::token::run(&token).await,
        Commands::Interactive => commands::interactive::run(token_override).await,
        Commands::UploadAnon { file, name } => commands::upload::anonymous(&file, name).await,
        Commands::UploadAuth {
            file,
            parent_id,
            name,
        } => commands::upload::authenticated(&file, &parent_id, name, token_override).await,
        Commands::UploadLoc {
            file,
            location_id,
            name,
        } => commands::upload::to_location(&file, &location_id, name).await,
        Commands::UploadNote { file, note, name } => {
            commands::upload::with_note(&file, &note, name).await
        }
        Commands::BulkUpload { parent_id, files } => {
            commands::bulk::upload(&parent_id, &files, token_override).await
        }
        Commands::Locations => commands::account::locations().await,
        Commands::Account => commands::account::account(token_override).await,
        Commands::GetRoot => commands::fs::root(token_override).await,
        Commands::GetDir { id } => commands::fs::directory(&id, token_override).await,
        Commands::CreateDir { name, parent_id } => {
            commands::fs::create(&name, &parent_id, token_override).await
        }
        Commands::RenameDir { id, name } | Commands::RenameFile { id, name } => {
            commands::fs::rename(&id, &name, token_override).await
        }
        Commands::MoveDir { id, parent_id } | Commands::MoveFile { id, parent_id } => {
            commands::fs::move_entry(&id, &parent_id, token_override).await
        }
        Commands::AddNoteFile { id, note } => {
            commands::fs::add_note(&id, &note, token_override).await
        }
        Commands::DeleteDir { id } => commands::fs::delete(&id, token_override).await,
        Commands::BulkDelete { ids } => commands::bulk::delete(&ids, token_override).await,
    }
}
