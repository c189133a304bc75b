use anyhow::Result;

pub async fn locations() -> Result<()> {
    let client = super::anonymous_client()?;
    client.locations().await?.print();
    Ok(())
}

pub async fn account(token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    client.account().await?.print();
    Ok(())
}
