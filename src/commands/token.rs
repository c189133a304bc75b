use anyhow::Result;

use crate::auth;
use crate::config::Config;
use crate::output;

pub async fn run(token: &str) -> Result<()> {
    auth::store_token(token)?;

    let path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "the config file".to_string());
    output::print_success(&format!("Token {} stored in {}", mask_token(token), path));
    Ok(())
}

fn mask_token(token: &str) -> String {
    if token.len() <= 12 {
        return "*".repeat(token.len());
    }
    format!("{}...{}", &token[..8], &token[token.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_token() {
        assert_eq!(mask_token("abc123"), "******");
    }

    #[test]
    fn test_mask_long_token() {
        assert_eq!(mask_token("abcdefghijklmnop"), "abcdefgh...mnop");
    }
}
