//! The accounts a fresh bank starts with

use crate::Account;

/// The four demo accounts
#[must_use]
pub fn accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            vec![200, 450, -400, 3000, -650, -130, 70, 1300],
            1.2,
            1111,
        ),
        Account::new(
            "Jessica Davis",
            vec![5000, 3400, -150, -790, -3210, -1000, 8500, -30],
            1.5,
            2222,
        ),
        Account::new(
            "Steven Thomas Williams",
            vec![200, -200, 340, -300, -20, 50, 400, -460],
            0.7,
            3333,
        ),
        Account::new("Sarah Smith", vec![430, 1000, 700, 50, 90], 1.0, 4444),
    ]
}
