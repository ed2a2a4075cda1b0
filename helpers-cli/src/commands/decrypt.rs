use anyhow::{Context, Result};
use clap::Args;

use crate::config::KeyArgs;

/**
    Decrypt a Laravel-compatible ticket.
*/
#[derive(Args)]
pub struct DecryptCommand {
    #[command(flatten)]
    key: KeyArgs,

    /// Ticket was produced without scalar serialization (Laravel's encryptString).
    #[arg(long)]
    raw: bool,

    /// Base64-encoded ticket.
    ticket: String,
}

impl DecryptCommand {
    pub fn run(self) -> Result<()> {
        let encrypter =
            helpers::Encrypter::new(self.key.bytes()?).context("failed to load application key")?;

        let value = if self.raw {
            encrypter.decrypt_string(&self.ticket)
        } else {
            encrypter.decrypt(&self.ticket)
        }
        .context("failed to decrypt ticket")?;

        println!("{value}");
        Ok(())
    }
}
