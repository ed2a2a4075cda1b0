use anyhow::{Result, bail};
use clap::Args;

/**
    Print a random string over `[A-Za-z0-9]`.
*/
#[derive(Args)]
pub struct RandomCommand {
    /// Number of characters.
    #[arg(default_value_t = 32)]
    length: usize,

    /// Print a random 16-byte IV as hex instead.
    #[arg(long, conflicts_with = "length")]
    iv: bool,
}

impl RandomCommand {
    pub fn run(self) -> Result<()> {
        if self.iv {
            println!("{}", hex::encode(helpers::generate_iv()?));
            return Ok(());
        }
        if self.length == 0 {
            bail!("length must be at least 1");
        }
        println!("{}", helpers::random_string(self.length));
        Ok(())
    }
}
