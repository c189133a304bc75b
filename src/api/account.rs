use anyhow::Result;
use reqwest::Method;

use super::client::{ApiResponse, StorageClient};

impl StorageClient {
    /// List the available storage locations (no auth required)
    pub async fn locations(&self) -> Result<ApiResponse> {
        let url = self.api_url("locations");
        self.send(self.request(Method::GET, &url)).await
    }

    /// Fetch account details for the authenticated user
    pub async fn account(&self) -> Result<ApiResponse> {
        let url = self.api_url("account");
        self.send(self.request(Method::GET, &url)).await
    }
}
