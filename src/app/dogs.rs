use bankist_lib::dogs;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
pub struct Dogs {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report whether each dog is an adult or a puppy
    Check {
        /// Julia's ages, comma separated. The first and last two are cats
        #[clap(long, value_delimiter = ',', required = true)]
        julia: Vec<u32>,

        /// Kate's ages, comma separated
        #[clap(long, value_delimiter = ',', required = true)]
        kate: Vec<u32>,
    },

    /// The average human age of the adult dogs
    Average {
        #[clap(required = true)]
        ages: Vec<u32>,
    },
}

impl Dogs {
    pub fn run(&self) {
        match &self.command {
            Command::Check { julia, kate } => {
                for report in dogs::check_dogs(julia, kate) {
                    println!("{}", report);
                }
            }
            Command::Average { ages } => {
                println!("{:.2}", dogs::calc_average_human_age(ages));
            }
        }
    }
}
