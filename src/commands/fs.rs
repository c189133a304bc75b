use anyhow::Result;

pub async fn root(token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.root().await?.print();
    Ok(())
}

pub async fn directory(id: &str, token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.directory(id).await?.print();
    Ok(())
}

pub async fn create(name: &str, parent_id: &str, token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.create_directory(name, parent_id).await?.print();
    Ok(())
}

/// Shared by rename-dir and rename-file; the API endpoint is the same
pub async fn rename(id: &str, name: &str, token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.rename_entry(id, name).await?.print();
    Ok(())
}

/// Shared by move-dir and move-file
pub async fn move_entry(id: &str, parent_id: &str, token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.move_entry(id, parent_id).await?.print();
    Ok(())
}

pub async fn add_note(id: &str, note: &str, token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.set_note(id, note).await?.print();
    Ok(())
}

pub async fn delete(id: &str, token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.delete_entry(id).await?.print();
    Ok(())
}
