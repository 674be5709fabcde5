use serde::{Deserialize, Serialize};

/// A bank account and its full movement history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The full name of the account holder
    pub owner: String,

    /// Signed amounts in the order they were booked. Deposits are positive,
    /// withdrawals negative.
    pub movements: Vec<i64>,

    /// The interest paid on each deposit, as a percentage
    pub interest_rate: f64,

    /// The numeric credential used to log in and to close the account
    pub pin: u32,

    /// The short login name, derived from the owner's initials
    ///
    /// This is never read from configuration. It is attached when the account
    /// is placed into an [`AccountStore`](crate::AccountStore).
    #[serde(skip)]
    pub username: String,
}

impl Account {
    /// Create an account with its username already derived
    pub fn new(owner: impl Into<String>, movements: Vec<i64>, interest_rate: f64, pin: u32) -> Self {
        let mut account = Self {
            owner: owner.into(),
            movements,
            interest_rate,
            pin,
            username: String::new(),
        };
        account.assign_username();
        account
    }

    /// Attach the username derived from the owner's name.
    ///
    /// Running this more than once has no further effect.
    pub fn assign_username(&mut self) {
        self.username = derive_username(&self.owner);
    }

    /// The sum of all movements
    #[must_use]
    pub fn balance(&self) -> i64 {
        crate::ledger::balance(&self.movements)
    }

    /// The first word of the owner's name
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.owner.split(' ').next().unwrap_or_default()
    }
}

/// Build a login name from the first letter of each word of a name.
///
/// ```
/// assert_eq!(bankist_lib::derive_username("Steven Thomas Williams"), "stw");
/// ```
#[must_use]
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split(' ')
        .filter_map(|name| name.chars().next())
        .collect()
}

/// Whether a movement put money into the account or took it out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// A positive movement
    Deposit,

    /// Any movement that is not positive
    Withdrawal,
}

impl MovementKind {
    /// Classify a single movement
    #[must_use]
    pub fn of(amount: i64) -> Self {
        if amount > 0 {
            Self::Deposit
        } else {
            Self::Withdrawal
        }
    }

    /// The lowercase label shown next to a movement
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}
