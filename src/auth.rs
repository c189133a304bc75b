use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::SbxError;

/// Where the active token came from, for confirmation output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenSource {
    Override,
    ConfigFile,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Override => write!(f, "--token / SBX_TOKEN override"),
            TokenSource::ConfigFile => write!(f, "config file"),
        }
    }
}

#[derive(Debug)]
pub struct TokenResult {
    pub token: String,
    pub source: TokenSource,
}

/// Resolve the account token for one invocation.
///
/// A non-empty explicit override always wins; otherwise the persisted token
/// is used. Neither present is fatal for authenticated operations.
pub fn resolve(explicit: Option<&str>) -> Result<String> {
    resolve_with_source(explicit).map(|r| r.token)
}

pub fn resolve_with_source(explicit: Option<&str>) -> Result<TokenResult> {
    let config = Config::load().context("Failed to load config file")?;
    resolve_from(explicit, config.get_token())
}

fn resolve_from(explicit: Option<&str>, stored: Option<&str>) -> Result<TokenResult> {
    if let Some(token) = explicit {
        if !token.is_empty() {
            return Ok(TokenResult {
                token: token.to_string(),
                source: TokenSource::Override,
            });
        }
    }

    if let Some(token) = stored {
        if !token.is_empty() {
            return Ok(TokenResult {
                token: token.to_string(),
                source: TokenSource::ConfigFile,
            });
        }
    }

    Err(SbxError::MissingCredential.into())
}

/// Persist the token to the config file, overwriting any previous value
pub fn store_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(SbxError::InvalidArgument("token must not be empty".into()).into());
    }

    let mut config = Config::load().context("Failed to load config")?;
    config.set_token(token);
    config.save().context("Failed to save config file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins_over_stored() {
        let result = resolve_from(Some("flag-tok"), Some("stored-tok")).unwrap();
        assert_eq!(result.token, "flag-tok");
        assert_eq!(result.source, TokenSource::Override);
    }

    #[test]
    fn test_stored_used_when_no_explicit() {
        let result = resolve_from(None, Some("stored-tok")).unwrap();
        assert_eq!(result.token, "stored-tok");
        assert_eq!(result.source, TokenSource::ConfigFile);
    }

    #[test]
    fn test_empty_explicit_falls_back() {
        let result = resolve_from(Some(""), Some("stored-tok")).unwrap();
        assert_eq!(result.token, "stored-tok");
    }

    #[test]
    fn test_neither_is_missing_credential() {
        let err = resolve_from(Some(""), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbxError>(),
            Some(SbxError::MissingCredential)
        ));
    }

    #[test]
    fn test_store_rejects_empty_token() {
        let err = store_token("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbxError>(),
            Some(SbxError::InvalidArgument(_))
        ));
    }
}
