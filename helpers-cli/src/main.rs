mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    // A missing .env file is not an error; APP_KEY may come from the environment
    let _ = dotenvy::dotenv();

    env_logger::init();

    Cli::parse().run()
}
