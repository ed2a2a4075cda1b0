use anyhow::{Context, Result};
use clap::Args;

const BASE64_KEY_PREFIX: &str = "base64:";

/**
    Application key shared by the encrypt, decrypt and ecb commands.

    Accepts Laravel's `base64:<key>` form or raw text. Key length is checked
    by the library when the cipher is keyed.
*/
#[derive(Args)]
pub struct KeyArgs {
    /// Application key, as `base64:<...>` or raw text.
    #[arg(short, long, env = "APP_KEY", hide_env_values = true)]
    key: String,
}

impl KeyArgs {
    pub fn bytes(&self) -> Result<Vec<u8>> {
        parse_key(&self.key)
    }
}

pub fn parse_key(key: &str) -> Result<Vec<u8>> {
    let key = key.trim();
    match key.strip_prefix(BASE64_KEY_PREFIX) {
        Some(encoded) => data_encoding::BASE64
            .decode(encoded.as_bytes())
            .context("failed to decode base64 application key"),
        None => Ok(key.as_bytes().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_prefix() {
        let key = parse_key("base64:AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=").unwrap();
        assert_eq!(key, (0u8..32).collect::<Vec<_>>());
    }

    #[test]
    fn raw_key_is_used_verbatim() {
        let key = parse_key("0123456789abcdef0123456789abcdef").unwrap();
        assert_eq!(key, b"0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let key = parse_key("  base64:AAAAAAAAAAAAAAAAAAAAAA==\n").unwrap();
        assert_eq!(key, vec![0u8; 16]);
    }

    #[test]
    fn invalid_base64_fails() {
        assert!(parse_key("base64:not base64!").is_err());
    }
}
