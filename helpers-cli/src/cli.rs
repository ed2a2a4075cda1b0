use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    DecryptCommand, EcbCommand, EncryptCommand, HmacCommand, NowCommand, RandomCommand,
    VerifyCommand,
};

/**
    Crypto helpers command-line tool.
*/
#[derive(Parser)]
#[command(name = "helpers")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a value into a Laravel-compatible ticket.
    Encrypt(EncryptCommand),
    /// Decrypt a Laravel-compatible ticket.
    Decrypt(DecryptCommand),
    /// Encrypt with AES-ECB/PKCS#7 and print base64.
    Ecb(EcbCommand),
    /// Compute a hex HMAC-SHA256.
    Hmac(HmacCommand),
    /// Verify an RSA PKCS#1 v1.5 / SHA-256 signature.
    Verify(VerifyCommand),
    /// Print a random alphanumeric string.
    Random(RandomCommand),
    /// Print the current time as Y-m-d H:i:s.
    Now(NowCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Encrypt(cmd) => cmd.run(),
            Command::Decrypt(cmd) => cmd.run(),
            Command::Ecb(cmd) => cmd.run(),
            Command::Hmac(cmd) => cmd.run(),
            Command::Verify(cmd) => cmd.run(),
            Command::Random(cmd) => cmd.run(),
            Command::Now(cmd) => cmd.run(),
        }
    }
}
