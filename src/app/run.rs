use anyhow::Context;
use bankist_lib::{Action, Session};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{instrument, Level};

use crate::{app::Source, render::Terminal};

const USAGE: &str = "\
commands:
  login <username> <pin>
  transfer <username> <amount>
  loan <amount>
  close <username> <pin>
  sort
  quit";

#[derive(Debug, Parser)]
pub struct Run {
    #[clap(flatten)]
    pub source: Source,
}

impl Run {
    #[instrument(skip(self))]
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.source.load()?;
        let terminal = Terminal::new(config.currency()?);
        let mut store = config.into_store();

        tracing::event!(Level::INFO, accounts = store.len(), "bank opened");

        let mut session = Session::new(&mut store, terminal);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", USAGE);

        while let Some(line) = lines.next_line().await.context("failed to read input")? {
            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "exit" => break,
                "help" => println!("{}", USAGE),
                _ => match line.parse::<Action>() {
                    Ok(action) => {
                        // rejections leave the display untouched and are
                        // logged by the session
                        let _ = session.dispatch(&action);
                    }
                    Err(e) => println!("{}", e),
                },
            }
        }

        Ok(())
    }
}
