//! Interactive menu over the same operations as the direct commands.
//!
//! Prompting is the only menu-specific code; every selection ends up in the
//! same client mappers the one-shot commands use.

use anyhow::Result;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::output;

const MENU: [&str; 11] = [
    "Upload file (anonymous)",
    "Upload file to a directory",
    "Upload file to a storage location",
    "Upload file with a note",
    "Bulk upload to a directory",
    "List storage locations",
    "Show account details",
    "Browse a directory (blank id for root)",
    "Create a directory",
    "Delete a directory",
    "Quit",
];

pub async fn run(token_override: Option<&str>) -> Result<()> {
    loop {
        println!();
        let selection = Select::new()
            .with_prompt("Stashbox")
            .items(&MENU)
            .default(0)
            .interact()?;

        let result = match selection {
            0 => upload_anonymous().await,
            1 => upload_to_directory(token_override).await,
            2 => upload_to_location().await,
            3 => upload_with_note().await,
            4 => bulk_upload(token_override).await,
            5 => super::account::locations().await,
            6 => super::account::account(token_override).await,
            7 => browse(token_override).await,
            8 => create_directory(token_override).await,
            9 => delete_directory(token_override).await,
            _ => break,
        };

        // Keep the loop alive on operation errors; only Quit leaves it.
        if let Err(e) = result {
            output::print_error(&format!("{:#}", e));
        }
    }
    Ok(())
}

async fn upload_anonymous() -> Result<()> {
    let file = prompt_path()?;
    let name = prompt_optional("Destination name (blank for base name)")?;

    let pb = spinner("Uploading...");
    let result = super::upload::request_anonymous(&file, name).await;
    pb.finish_and_clear();

    result?.print();
    Ok(())
}

async fn upload_to_directory(token_override: Option<&str>) -> Result<()> {
    let file = prompt_path()?;
    let parent_id = prompt("Directory id")?;
    let name = prompt_optional("Destination name (blank for base name)")?;

    let pb = spinner("Uploading...");
    let result = super::upload::request_authenticated(&file, &parent_id, name, token_override).await;
    pb.finish_and_clear();

    result?.print();
    Ok(())
}

async fn upload_to_location() -> Result<()> {
    let file = prompt_path()?;
    let location_id = prompt("Storage location id")?;
    let name = prompt_optional("Destination name (blank for base name)")?;

    let pb = spinner("Uploading...");
    let result = super::upload::request_to_location(&file, &location_id, name).await;
    pb.finish_and_clear();

    result?.print();
    Ok(())
}

async fn upload_with_note() -> Result<()> {
    let file = prompt_path()?;
    let note = prompt("Note text")?;
    let name = prompt_optional("Destination name (blank for base name)")?;

    let pb = spinner("Uploading...");
    let result = super::upload::request_with_note(&file, &note, name).await;
    pb.finish_and_clear();

    result?.print();
    Ok(())
}

async fn bulk_upload(token_override: Option<&str>) -> Result<()> {
    let parent_id = prompt("Directory id")?;
    let paths: String = prompt("Local file paths (space-separated)")?;
    let files: Vec<PathBuf> = paths.split_whitespace().map(PathBuf::from).collect();
    if files.is_empty() {
        output::print_warning("no files given");
        return Ok(());
    }
    super::bulk::upload(&parent_id, &files, token_override).await
}

async fn browse(token_override: Option<&str>) -> Result<()> {
    match prompt_optional("Directory id (blank for root)")? {
        Some(id) => super::fs::directory(&id, token_override).await,
        None => super::fs::root(token_override).await,
    }
}

async fn create_directory(token_override: Option<&str>) -> Result<()> {
    let name = prompt("Directory name")?;
    let parent_id = prompt("Parent directory id")?;
    super::fs::create(&name, &parent_id, token_override).await
}

async fn delete_directory(token_override: Option<&str>) -> Result<()> {
    let id = prompt("Directory id")?;
    super::fs::delete(&id, token_override).await
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(label).interact_text()?)
}

fn prompt_optional(label: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn prompt_path() -> Result<PathBuf> {
    prompt("Local file path").map(PathBuf::from)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
