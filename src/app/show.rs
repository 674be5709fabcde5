use clap::Parser;

use crate::{app::Source, render::Terminal};

#[derive(Debug, Parser)]
pub struct Show {
    #[clap(flatten)]
    source: Source,
}

impl Show {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.source.load()?;
        let terminal = Terminal::new(config.currency()?);

        for account in &config.into_store() {
            println!(
                "{:<6} {:<26} {:>16}  {}%",
                account.username,
                account.owner,
                terminal.money(account.balance()),
                account.interest_rate
            );
        }

        Ok(())
    }
}
