//! Directory and file operations under `/api/fs`.
//!
//! The server assigns opaque ids to filesystem entries; the client only
//! forwards them. Request bodies are serde-derived, never hand-assembled.

use anyhow::Result;
use reqwest::Method;
use serde::Serialize;

use super::client::{ApiResponse, StorageClient};

#[derive(Serialize)]
struct CreateDirectoryBody<'a> {
    name: &'a str,
    #[serde(rename = "parentId")]
    parent_id: &'a str,
}

#[derive(Serialize)]
struct RenameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct MoveBody<'a> {
    #[serde(rename = "parentId")]
    parent_id: &'a str,
}

#[derive(Serialize)]
struct NoteBody<'a> {
    note: &'a str,
}

impl StorageClient {
    fn fs_url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => self.api_url(&format!("fs/{}", urlencoding::encode(id))),
            None => self.api_url("fs"),
        }
    }

    /// Fetch the root directory listing
    pub async fn root(&self) -> Result<ApiResponse> {
        let url = self.fs_url(None);
        self.send(self.request(Method::GET, &url)).await
    }

    /// Fetch one directory by id
    pub async fn directory(&self, id: &str) -> Result<ApiResponse> {
        let url = self.fs_url(Some(id));
        self.send(self.request(Method::GET, &url)).await
    }

    /// Create a directory under `parent_id`
    pub async fn create_directory(&self, name: &str, parent_id: &str) -> Result<ApiResponse> {
        let url = self.fs_url(None);
        let body = CreateDirectoryBody { name, parent_id };
        self.send(self.request(Method::POST, &url).json(&body)).await
    }

    /// Rename a directory or file
    pub async fn rename_entry(&self, id: &str, name: &str) -> Result<ApiResponse> {
        let url = self.fs_url(Some(id));
        let body = RenameBody { name };
        self.send(self.request(Method::PATCH, &url).json(&body)).await
    }

    /// Move a directory or file under a new parent
    pub async fn move_entry(&self, id: &str, parent_id: &str) -> Result<ApiResponse> {
        let url = self.fs_url(Some(id));
        let body = MoveBody { parent_id };
        self.send(self.request(Method::PUT, &url).json(&body)).await
    }

    /// Attach a note to a file
    pub async fn set_note(&self, id: &str, note: &str) -> Result<ApiResponse> {
        let url = self.fs_url(Some(id));
        let body = NoteBody { note };
        self.send(self.request(Method::PUT, &url).json(&body)).await
    }

    /// Delete a directory by id
    pub async fn delete_entry(&self, id: &str) -> Result<ApiResponse> {
        let url = self.fs_url(Some(id));
        self.send(self.request(Method::DELETE, &url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_directory_body() {
        let body = CreateDirectoryBody {
            name: "Movies",
            parent_id: "root123",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Movies","parentId":"root123"}"#
        );
    }

    #[test]
    fn test_rename_body() {
        let body = RenameBody { name: "renamed.txt" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"renamed.txt"}"#
        );
    }

    #[test]
    fn test_move_body_uses_camel_case() {
        let body = MoveBody { parent_id: "dir9" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"parentId":"dir9"}"#
        );
    }

    #[test]
    fn test_note_body() {
        let body = NoteBody { note: "quarterly report" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"note":"quarterly report"}"#
        );
    }

    #[test]
    fn test_fs_url_encodes_id() {
        let client = StorageClient::with_bases(
            None,
            "https://stashbox.app/api",
            "https://up.stashbox.app",
        )
        .unwrap();
        assert_eq!(client.fs_url(None), "https://stashbox.app/api/fs");
        assert_eq!(
            client.fs_url(Some("dir/with slash")),
            "https://stashbox.app/api/fs/dir%2Fwith%20slash"
        );
    }
}
