//! Stashbox HTTP client
//!
//! One client struct serves both hosts: the raw upload host and the JSON
//! API host. Response bodies are opaque to the client; they are carried back
//! as bytes and rendered without inspection.

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use url::Url;

use crate::output;

const API_BASE: &str = "https://stashbox.app/api";
const UPLOAD_BASE: &str = "https://up.stashbox.app";

/// Raw response: status plus unparsed body bytes
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Print the body as the server sent it (pretty-printed when JSON).
    /// The status is deliberately not branched on: error payloads render
    /// exactly like success payloads.
    pub fn print(&self) {
        output::print_body(&self.body);
    }
}

pub struct StorageClient {
    client: Client,
    token: Option<String>,
    api_base: String,
    upload_base: String,
}

impl StorageClient {
    /// Create a client, honoring `SBX_API_URL` / `SBX_UPLOAD_URL` overrides
    pub fn new(token: Option<String>) -> Result<Self> {
        let api_base =
            std::env::var("SBX_API_URL").unwrap_or_else(|_| API_BASE.to_string());
        let upload_base =
            std::env::var("SBX_UPLOAD_URL").unwrap_or_else(|_| UPLOAD_BASE.to_string());
        Self::with_bases(token, &api_base, &upload_base)
    }

    /// Create a client against explicit base URLs
    pub fn with_bases(token: Option<String>, api_base: &str, upload_base: &str) -> Result<Self> {
        Url::parse(api_base).with_context(|| format!("Invalid API base URL: {}", api_base))?;
        Url::parse(upload_base)
            .with_context(|| format!("Invalid upload base URL: {}", upload_base))?;

        let client = Client::builder()
            .user_agent(concat!("sbx/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
            upload_base: upload_base.trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL under the JSON API host. `path` must already be encoded.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Build a URL under the upload host from raw path segments and query
    /// pairs. Every caller-supplied value is percent-encoded here.
    pub fn upload_url(&self, segments: &[&str], query: &[(&str, &str)]) -> String {
        let mut url = self.upload_base.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Start a request, attaching the bearer token when one is held
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Issue the request and collect the response without interpreting it
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await.context("Request failed")?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;
        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
