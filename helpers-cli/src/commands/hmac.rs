use anyhow::Result;
use clap::Args;

/**
    Compute HMAC-SHA256 of a message and print it as lowercase hex.
*/
#[derive(Args)]
pub struct HmacCommand {
    /// Shared secret.
    #[arg(short, long)]
    secret: String,

    /// Message to authenticate.
    message: String,
}

impl HmacCommand {
    pub fn run(self) -> Result<()> {
        println!("{}", helpers::compute_hmac_sha256(&self.message, &self.secret));
        Ok(())
    }
}
