use anyhow::{Context, Result};
use clap::Args;

use crate::config::KeyArgs;

/**
    Encrypt a value into a Laravel-compatible ticket.
*/
#[derive(Args)]
pub struct EncryptCommand {
    #[command(flatten)]
    key: KeyArgs,

    /// Skip scalar serialization (Laravel's encryptString).
    #[arg(long)]
    raw: bool,

    /// Value to encrypt.
    value: String,
}

impl EncryptCommand {
    pub fn run(self) -> Result<()> {
        let encrypter =
            helpers::Encrypter::new(self.key.bytes()?).context("failed to load application key")?;
        log::info!("Encrypting with {}", encrypter.cipher_name());

        let ticket = if self.raw {
            encrypter.encrypt_string(&self.value)
        } else {
            encrypter.encrypt(&self.value)
        }
        .context("failed to encrypt value")?;

        println!("{ticket}");
        Ok(())
    }
}
