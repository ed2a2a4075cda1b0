use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/**
    Verify an RSA PKCS#1 v1.5 / SHA-256 signature over a message.
*/
#[derive(Args)]
pub struct VerifyCommand {
    /// PEM file holding the SPKI public key (`-----BEGIN PUBLIC KEY-----`).
    #[arg(short, long)]
    public_key: PathBuf,

    /// Base64-encoded signature.
    #[arg(short, long)]
    signature: String,

    /// Signed message.
    message: String,
}

impl VerifyCommand {
    pub fn run(self) -> Result<()> {
        let pem = std::fs::read_to_string(&self.public_key)
            .with_context(|| format!("failed to read {}", self.public_key.display()))?;
        log::info!("Verifying with public key {}", self.public_key.display());

        helpers::verify_signature(&pem, &self.signature, &self.message)
            .context("signature is NOT valid")?;

        println!("signature is valid");
        Ok(())
    }
}
