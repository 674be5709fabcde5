//! Ad-hoc queries over movements and across the whole bank

use crate::{AccountStore, MovementKind};

/// The euro to US dollar rate used by the reports
pub const EURO_TO_USD: f64 = 1.1;

/// The sum of every movement of every account
#[must_use]
pub fn bank_total(store: &AccountStore) -> i64 {
    store
        .iter()
        .flat_map(|account| account.movements.iter())
        .sum()
}

/// The largest movement, if there are any
#[must_use]
pub fn max_movement(movements: &[i64]) -> Option<i64> {
    movements.iter().copied().max()
}

/// The earliest withdrawal, if there is one
#[must_use]
pub fn first_withdrawal(movements: &[i64]) -> Option<i64> {
    movements.iter().copied().find(|movement| *movement < 0)
}

/// Whether any single deposit exceeds `threshold`
#[must_use]
pub fn any_deposit_above(movements: &[i64], threshold: i64) -> bool {
    movements.iter().any(|movement| *movement > threshold)
}

/// Whether every movement is a deposit
#[must_use]
pub fn all_deposits(movements: &[i64]) -> bool {
    movements.iter().all(|movement| *movement > 0)
}

/// The sum of all deposits, converted at `rate`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn deposits_converted(movements: &[i64], rate: f64) -> f64 {
    movements
        .iter()
        .filter(|movement| **movement > 0)
        .map(|deposit| *deposit as f64 * rate)
        .sum()
}

/// Every movement converted at `rate`, truncated towards zero
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn convert_movements(movements: &[i64], rate: f64) -> Vec<i64> {
    movements
        .iter()
        .map(|movement| (*movement as f64 * rate).trunc() as i64)
        .collect()
}

/// A sentence describing each movement
#[must_use]
pub fn describe_movements(movements: &[i64]) -> Vec<String> {
    movements
        .iter()
        .enumerate()
        .map(|(i, movement)| match MovementKind::of(*movement) {
            MovementKind::Deposit => format!("Movement {}: You deposited {}", i + 1, movement),
            MovementKind::Withdrawal => {
                format!("Movement {}: You withdrew {}", i + 1, movement.abs())
            }
        })
        .collect()
}

/// The owners' names in alphabetical order
#[must_use]
pub fn sorted_owners(store: &AccountStore) -> Vec<&str> {
    let mut owners: Vec<&str> = store.iter().map(|account| account.owner.as_str()).collect();
    owners.sort_unstable();
    owners
}
