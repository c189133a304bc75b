//! Single-file upload commands.
//!
//! Each command has a `request_*` form returning the raw response, so the
//! interactive menu can reuse the exact same mappers while owning its own
//! progress display.

use anyhow::Result;
use std::path::Path;

use crate::api::upload::destination_name;
use crate::api::ApiResponse;

pub async fn anonymous(file: &Path, name: Option<String>) -> Result<()> {
    request_anonymous(file, name).await?.print();
    Ok(())
}

pub async fn request_anonymous(file: &Path, name: Option<String>) -> Result<ApiResponse> {
    let client = super::anonymous_client()?;
    let name = name.unwrap_or_else(|| destination_name(file));
    client.upload_anonymous(file, &name).await
}

pub async fn authenticated(
    file: &Path,
    parent_id: &str,
    name: Option<String>,
    token_override: Option<&str>,
) -> Result<()> {
    request_authenticated(file, parent_id, name, token_override)
        .await?
        .print();
    Ok(())
}

pub async fn request_authenticated(
    file: &Path,
    parent_id: &str,
    name: Option<String>,
    token_override: Option<&str>,
) -> Result<ApiResponse> {
    let client = super::authed_client(token_override)?;
    let name = name.unwrap_or_else(|| destination_name(file));
    client.upload_to_directory(file, parent_id, &name).await
}

pub async fn to_location(file: &Path, location_id: &str, name: Option<String>) -> Result<()> {
    request_to_location(file, location_id, name).await?.print();
    Ok(())
}

pub async fn request_to_location(
    file: &Path,
    location_id: &str,
    name: Option<String>,
) -> Result<ApiResponse> {
    let client = super::anonymous_client()?;
    let name = name.unwrap_or_else(|| destination_name(file));
    client.upload_to_location(file, &name, location_id).await
}

pub async fn with_note(file: &Path, note: &str, name: Option<String>) -> Result<()> {
    request_with_note(file, note, name).await?.print();
    Ok(())
}

pub async fn request_with_note(
    file: &Path,
    note: &str,
    name: Option<String>,
) -> Result<ApiResponse> {
    let client = super::anonymous_client()?;
    let name = name.unwrap_or_else(|| destination_name(file));
    client.upload_with_note(file, &name, note).await
}
