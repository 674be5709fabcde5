use bankist_lib::insights;
use clap::Parser;

use crate::{app::Source, render::Terminal};

#[derive(Debug, Parser)]
pub struct Stats {
    #[clap(flatten)]
    source: Source,

    /// Deposits above this amount are called out as large
    #[clap(long, default_value = "1500")]
    large: i64,

    /// Also describe every movement
    #[clap(long)]
    describe: bool,
}

impl Stats {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.source.load()?;
        let terminal = Terminal::new(config.currency()?);
        let store = config.into_store();

        println!("Bank total: {}", terminal.money(insights::bank_total(&store)));
        println!("Owners: {}", insights::sorted_owners(&store).join(", "));

        for account in &store {
            let movements = &account.movements;
            println!();
            println!("{} ({})", account.owner, account.username);

            if let Some(max) = insights::max_movement(movements) {
                println!("  largest movement: {}", terminal.money(max));
            }
            match insights::first_withdrawal(movements) {
                Some(withdrawal) => println!("  first withdrawal: {}", terminal.money(withdrawal)),
                None => println!("  no withdrawals"),
            }
            println!(
                "  deposits in USD: {:.2}",
                insights::deposits_converted(movements, insights::EURO_TO_USD)
            );
            println!(
                "  large deposits: {}",
                if insights::any_deposit_above(movements, self.large) {
                    "yes"
                } else {
                    "no"
                }
            );
            println!(
                "  only deposits: {}",
                if insights::all_deposits(movements) {
                    "yes"
                } else {
                    "no"
                }
            );

            if self.describe {
                for description in insights::describe_movements(movements) {
                    println!("  {}", description);
                }
            }
        }

        Ok(())
    }
}
