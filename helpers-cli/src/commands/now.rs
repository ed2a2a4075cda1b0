use anyhow::Result;
use chrono::{Local, Utc};
use clap::Args;

/**
    Print the current time as `Y-m-d H:i:s`.
*/
#[derive(Args)]
pub struct NowCommand {
    /// Use UTC instead of the local time zone.
    #[arg(long)]
    utc: bool,
}

impl NowCommand {
    pub fn run(self) -> Result<()> {
        let now = if self.utc {
            helpers::to_date_time_string(&Utc::now())
        } else {
            helpers::to_date_time_string(&Local::now())
        };
        println!("{now}");
        Ok(())
    }
}
