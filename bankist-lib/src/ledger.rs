//! Derived figures for a list of movements

use crate::Account;

/// The figures shown alongside an account's movements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The sum of all movements
    pub balance: i64,

    /// The sum of all deposits
    pub total_in: i64,

    /// The sum of all withdrawals, as a positive number
    pub total_out: i64,

    /// The interest earned across all qualifying deposits
    pub interest: f64,
}

impl Summary {
    /// Compute the summary for an account
    #[must_use]
    pub fn of(account: &Account) -> Self {
        let movements = &account.movements;
        Self {
            balance: balance(movements),
            total_in: total_in(movements),
            total_out: total_out(movements),
            interest: interest(movements, account.interest_rate),
        }
    }
}

/// The sum of all movements
#[must_use]
pub fn balance(movements: &[i64]) -> i64 {
    movements.iter().fold(0, |acc, movement| acc + movement)
}

/// The sum of all positive movements
#[must_use]
pub fn total_in(movements: &[i64]) -> i64 {
    movements.iter().filter(|movement| **movement > 0).sum()
}

/// The absolute sum of all negative movements
#[must_use]
pub fn total_out(movements: &[i64]) -> i64 {
    movements
        .iter()
        .filter(|movement| **movement < 0)
        .sum::<i64>()
        .abs()
}

/// Interest paid on each deposit at `rate` percent.
///
/// Contributions below one unit are not paid.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn interest(movements: &[i64], rate: f64) -> f64 {
    movements
        .iter()
        .filter(|movement| **movement > 0)
        .map(|deposit| *deposit as f64 * rate / 100.0)
        .filter(|interest| *interest >= 1.0)
        .sum()
}
