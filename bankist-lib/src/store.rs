use crate::Account;

/// The ordered set of accounts known to the bank.
///
/// Usernames are derived from initials, so two owners may share one. Every
/// lookup returns the first matching account.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create a store, attaching a username to every account
    #[must_use]
    pub fn new(mut accounts: Vec<Account>) -> Self {
        for account in &mut accounts {
            account.assign_username();
        }
        Self { accounts }
    }

    /// Find an account by username
    #[must_use]
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username == username)
    }

    /// Find an account by the owner's full name
    #[must_use]
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner == owner)
    }

    /// The index of the first account with the given username
    #[must_use]
    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.username == username)
    }

    /// Append a movement to an account's history.
    ///
    /// Returns `false` if no account has the given username.
    pub fn push_movement(&mut self, username: &str, amount: i64) -> bool {
        match self
            .accounts
            .iter_mut()
            .find(|account| account.username == username)
        {
            Some(account) => {
                account.movements.push(amount);
                true
            }
            None => false,
        }
    }

    /// Remove the first account whose username and pin both match
    pub fn remove(&mut self, username: &str, pin: u32) -> Option<Account> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.username == username && account.pin == pin)?;
        Some(self.accounts.remove(index))
    }

    /// Iterate over the accounts in order
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// The number of accounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a AccountStore {
    type Item = &'a Account;

    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}
