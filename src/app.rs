use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::{config, config::Config, logging};

mod dogs;
mod run;
mod show;
mod stats;

/// A small in-memory bank, driven from the command line
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct App {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[clap(long, short, parse(from_occurrences), global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a session, reading actions from standard input
    Run(run::Run),

    /// List the configured accounts
    Show(show::Show),

    /// Print figures across all accounts
    Stats(stats::Stats),

    /// Julia and Kate's dog study
    Dogs(dogs::Dogs),
}

/// Where the starting accounts come from
#[derive(Debug, Parser)]
pub struct Source {
    /// Read accounts from this YAML file instead of the saved configuration
    #[clap(long, short)]
    accounts: Option<PathBuf>,
}

impl Source {
    pub fn load(&self) -> anyhow::Result<Config> {
        match &self.accounts {
            Some(path) => config::from_path(path)
                .with_context(|| format!("failed to load accounts from {}", path.display())),
            None => config::load().context("failed to load the saved configuration"),
        }
    }
}

impl App {
    pub fn from_cli() -> Self {
        Self::parse()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        logging::set_up(self.verbose).context("invalid log filter")?;

        match self.command {
            Command::Run(run) => run.run().await,
            Command::Show(show) => show.run(),
            Command::Stats(stats) => stats.run(),
            Command::Dogs(dogs) => {
                dogs.run();
                Ok(())
            }
        }
    }
}
