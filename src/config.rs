use std::{fs::File, io, path::Path};

use bankist_lib::{seed, Account, AccountStore};
use rusty_money::iso::{self, Currency};
use serde::{Deserialize, Serialize};

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config")]
    Load(#[from] confy::ConfyError),

    #[error("failed to open accounts file")]
    Io(#[from] io::Error),

    #[error("failed to parse accounts file")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),
}

/// The bank's starting accounts and the currency they are held in
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_currency")]
    pub currency: String,

    pub accounts: Vec<Account>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            accounts: seed::accounts(),
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Config {
    pub fn currency(&self) -> Result<&'static Currency, Error> {
        iso::find(&self.currency).ok_or_else(|| Error::UnknownCurrency(self.currency.clone()))
    }

    pub fn into_store(self) -> AccountStore {
        AccountStore::new(self.accounts)
    }
}

/// Load the saved configuration, writing the defaults on first use
pub fn load() -> Result<Config, Error> {
    Ok(confy::load(BIN_NAME, "config")?)
}

pub fn from_path(path: &Path) -> Result<Config, Error> {
    Ok(serde_yaml::from_reader(File::open(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_yaml() {
        let raw = r#"
        currency: GBP

        accounts:
        - owner: Jonas Schmedtmann
          movements: [200, 450, -400]
          interest_rate: 1.2
          pin: 1111

        - owner: Sarah Smith
          movements: []
          interest_rate: 1
          pin: 4444
        "#;

        let config: Config = serde_yaml::from_str(raw).unwrap();
        assert_eq!(config.currency().unwrap().iso_alpha_code, "GBP");

        let store = config.into_store();
        assert_eq!(store.find("js").unwrap().balance(), 250);
        assert_eq!(store.find("ss").unwrap().pin, 4444);
    }

    #[test]
    fn currency_defaults_to_euro() {
        let raw = r#"
        accounts: []
        "#;

        let config: Config = serde_yaml::from_str(raw).unwrap();
        assert_eq!(config.currency().unwrap().iso_alpha_code, "EUR");
    }

    #[test]
    fn unknown_currency() {
        let config = Config {
            currency: "XYZ".to_string(),
            accounts: Vec::new(),
        };
        assert!(matches!(config.currency(), Err(Error::UnknownCurrency(code)) if code == "XYZ"));
    }

    #[test]
    fn default_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("username"));

        let config: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.into_store(), AccountStore::new(seed::accounts()));
    }
}
