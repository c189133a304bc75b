//! Raw file uploads against the upload host.
//!
//! Each operation maps to one `PUT` with the file contents streamed as the
//! request body. The source path is checked before any request is built, so
//! a missing file never reaches the network.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Body, Method};
use std::path::Path;
use tokio::fs::File;

use super::client::{ApiResponse, StorageClient};
use crate::error::SbxError;

impl StorageClient {
    /// Anonymous upload: `PUT /{fileName}`
    pub async fn upload_anonymous(&self, source: &Path, file_name: &str) -> Result<ApiResponse> {
        require(file_name, "destination file name")?;
        let url = self.upload_url(&[file_name], &[]);
        self.put_file(&url, source).await
    }

    /// Authenticated upload into a directory: `PUT /{parentId}/{fileName}`
    pub async fn upload_to_directory(
        &self,
        source: &Path,
        parent_id: &str,
        file_name: &str,
    ) -> Result<ApiResponse> {
        require(file_name, "destination file name")?;
        let url = self.upload_url(&[parent_id, file_name], &[]);
        self.put_file(&url, source).await
    }

    /// Upload to a storage location: `PUT /{fileName}?locationId={id}`
    pub async fn upload_to_location(
        &self,
        source: &Path,
        file_name: &str,
        location_id: &str,
    ) -> Result<ApiResponse> {
        require(file_name, "destination file name")?;
        let url = self.upload_url(&[file_name], &[("locationId", location_id)]);
        self.put_file(&url, source).await
    }

    /// Upload with an attached note: `PUT /{fileName}?note={base64}`
    pub async fn upload_with_note(
        &self,
        source: &Path,
        file_name: &str,
        note: &str,
    ) -> Result<ApiResponse> {
        require(file_name, "destination file name")?;
        let url = self.upload_url(&[file_name], &[("note", &encode_note(note))]);
        self.put_file(&url, source).await
    }

    async fn put_file(&self, url: &str, source: &Path) -> Result<ApiResponse> {
        ensure_source_file(source)?;
        let file = File::open(source)
            .await
            .with_context(|| format!("Failed to open {}", source.display()))?;
        let request = self.request(Method::PUT, url).body(Body::from(file));
        self.send(request).await
    }
}

/// Check that `path` names an existing regular file
pub fn ensure_source_file(path: &Path) -> Result<(), SbxError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SbxError::FileNotFound(path.to_path_buf()))
    }
}

/// Notes travel base64-encoded in the query string (standard alphabet,
/// padded); percent-encoding of the result happens during URL building.
pub fn encode_note(note: &str) -> String {
    BASE64.encode(note)
}

/// Derive the remote name for a local file from its base name
pub fn destination_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn require(value: &str, what: &str) -> Result<(), SbxError> {
    if value.is_empty() {
        Err(SbxError::InvalidArgument(format!("{} must not be empty", what)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_encode_note() {
        assert_eq!(encode_note("hello world"), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_missing_source_is_file_not_found() {
        let err = ensure_source_file(Path::new("/no/such/file.bin")).unwrap_err();
        assert!(matches!(err, SbxError::FileNotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_source_file(dir.path()).unwrap_err();
        assert!(matches!(err, SbxError::FileNotFound(_)));
    }

    #[test]
    fn test_existing_source_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(ensure_source_file(file.path()).is_ok());
    }

    #[test]
    fn test_destination_name_is_base_name() {
        assert_eq!(
            destination_name(&PathBuf::from("/tmp/photos/cat.jpg")),
            "cat.jpg"
        );
    }

    #[test]
    fn test_empty_destination_rejected() {
        assert!(require("", "destination file name").is_err());
        assert!(require("a.txt", "destination file name").is_ok());
    }

    #[tokio::test]
    async fn test_missing_source_fails_before_any_request() {
        // The hosts are unroutable; a FileNotFound (not a transport error)
        // proves the check runs before any request is built.
        let client = StorageClient::with_bases(
            None,
            "https://stashbox.invalid/api",
            "https://stashbox.invalid",
        )
        .unwrap();

        let err = client
            .upload_anonymous(Path::new("/no/such/file.bin"), "file.bin")
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbxError>(),
            Some(SbxError::FileNotFound(_))
        ));
    }
}
