use anyhow::{Context, Result};
use clap::Args;

use crate::config::KeyArgs;

/**
    Encrypt with AES-ECB/PKCS#7 and print the ciphertext as base64.
*/
#[derive(Args)]
pub struct EcbCommand {
    #[command(flatten)]
    key: KeyArgs,

    /// Plaintext to encrypt.
    plaintext: String,
}

impl EcbCommand {
    pub fn run(self) -> Result<()> {
        let key = self.key.bytes()?;
        let ciphertext =
            helpers::ecb_encrypt(&self.plaintext, &key).context("failed to encrypt plaintext")?;
        println!("{ciphertext}");
        Ok(())
    }
}
