pub mod account;
pub mod bulk;
pub mod fs;
pub mod interactive;
pub mod token;
pub mod upload;

use anyhow::Result;

use crate::api::StorageClient;
use crate::auth;

/// Resolve the credential for this invocation and build a client with it
pub(crate) fn authed_client(token_override: Option<&str>) -> Result<StorageClient> {
    let token = auth::resolve(token_override)?;
    StorageClient::new(Some(token))
}

/// Build a client for operations that need no credential
pub(crate) fn anonymous_client() -> Result<StorageClient> {
    StorageClient::new(None)
}
