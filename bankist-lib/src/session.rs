//! The login session and the actions a logged-in user can take

use tracing::{instrument, Level};

use crate::{input, ledger, Account, AccountStore, Action, Presentation, View};

/// Whether anybody is logged in, and as whom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// No account is active
    LoggedOut,

    /// The account with this username is active
    LoggedIn(String),
}

/// The reason an action was not carried out.
///
/// A rejected action changes nothing: the store, the session state and the
/// presentation are all left as they were. Rejections are never shown to the
/// user; they exist so that callers can log them.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Rejection {
    /// The action needs a logged-in account
    #[error("no account is logged in")]
    NotLoggedIn,

    /// The username and pin don't identify an account (or not the current
    /// one, when closing)
    #[error("username or pin is incorrect")]
    InvalidCredentials,

    /// The amount is not a positive whole number
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    /// There is no account to transfer to
    #[error("no account with username '{0}'")]
    UnknownRecipient(String),

    /// The recipient is the logged-in account
    #[error("cannot transfer to the same account")]
    SelfTransfer,

    /// The balance is lower than the transfer amount
    #[error("balance of {balance} cannot cover a transfer of {amount}")]
    InsufficientFunds {
        /// The current balance
        balance: i64,
        /// The requested amount
        amount: i64,
    },

    /// No single movement is at least a tenth of the requested loan
    #[error("no movement covers 10% of a loan of {0}")]
    LoanNotCovered(i64),

    /// Booking the amount would take an account's totals out of range
    #[error("a movement of {0} does not fit in the account")]
    Overflow(i64),
}

/// A user session against an [`AccountStore`].
///
/// Every action that changes an account is followed by a full re-render of
/// the logged-in account.
#[derive(Debug)]
pub struct Session<'a, P> {
    store: &'a mut AccountStore,
    presentation: P,
    current: Option<String>,
    sorted: bool,
}

impl<'a, P: Presentation> Session<'a, P> {
    /// Start a logged-out session
    pub fn new(store: &'a mut AccountStore, presentation: P) -> Self {
        Self {
            store,
            presentation,
            current: None,
            sorted: false,
        }
    }

    /// The current state of the session
    #[must_use]
    pub fn state(&self) -> State {
        self.current
            .as_ref()
            .map_or(State::LoggedOut, |username| State::LoggedIn(username.clone()))
    }

    /// The logged-in account, if any
    #[must_use]
    pub fn account(&self) -> Option<&Account> {
        self.store.find(self.current.as_deref()?)
    }

    /// What would currently be displayed for the logged-in account
    #[must_use]
    pub fn view(&self) -> Option<View> {
        self.account().map(|account| View::of(account, self.sorted))
    }

    /// Whether the movement list is shown in sorted order
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The accounts this session operates on
    #[must_use]
    pub fn store(&self) -> &AccountStore {
        &*self.store
    }

    /// The presentation this session renders into
    #[must_use]
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Carry out an action.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the action did nothing.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), Rejection> {
        let result = match action {
            Action::Login { username, pin } => self.login(username, pin),
            Action::Transfer { to, amount } => self.transfer(to, amount),
            Action::Loan { amount } => self.request_loan(amount),
            Action::Close { username, pin } => self.close(username, pin),
            Action::Sort => self.toggle_sort(),
        };

        match &result {
            Ok(()) => tracing::event!(Level::INFO, action = action.name(), "applied"),
            Err(reason) => {
                tracing::event!(Level::DEBUG, action = action.name(), %reason, "ignored");
            }
        }

        result
    }

    /// Log in with a username and pin.
    ///
    /// A failed attempt leaves any existing session in place.
    ///
    /// # Errors
    ///
    /// [`Rejection::InvalidCredentials`] if no account has this username, or
    /// its pin differs.
    #[instrument(skip(self, pin))]
    pub fn login(&mut self, username: &str, pin: &str) -> Result<(), Rejection> {
        let account = self
            .store
            .find(username)
            .filter(|account| input::matches_pin(pin, account.pin))
            .ok_or(Rejection::InvalidCredentials)?;

        let message = format!("Welcome Back {}", account.first_name());
        self.current = Some(account.username.clone());
        self.sorted = false;

        self.presentation.welcome(&message);
        self.presentation.set_visible(true);
        self.update_ui();

        Ok(())
    }

    /// Transfer money from the logged-in account to another account
    ///
    /// # Errors
    ///
    /// The transfer is rejected unless the amount is positive, the recipient
    /// exists and is not the logged-in account, and the balance covers the
    /// amount.
    #[instrument(skip(self))]
    pub fn transfer(&mut self, to: &str, amount: &str) -> Result<(), Rejection> {
        let sender = self.account().ok_or(Rejection::NotLoggedIn)?;
        let amount = positive_amount(amount)?;

        let receiver = self
            .store
            .find(to)
            .ok_or_else(|| Rejection::UnknownRecipient(to.to_string()))?;

        if receiver.username == sender.username {
            return Err(Rejection::SelfTransfer);
        }

        let balance = sender.balance();
        if balance < amount {
            return Err(Rejection::InsufficientFunds { balance, amount });
        }

        if !fits_debit(sender, amount) || !fits_credit(receiver, amount) {
            return Err(Rejection::Overflow(amount));
        }

        let sender = sender.username.clone();
        let receiver = receiver.username.clone();
        self.store.push_movement(&sender, -amount);
        self.store.push_movement(&receiver, amount);

        tracing::event!(Level::DEBUG, %sender, %receiver, amount, "transferred");

        self.update_ui();
        Ok(())
    }

    /// Grant a loan to the logged-in account.
    ///
    /// A loan is granted only if some movement on the account is at least a
    /// tenth of the amount requested.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the amount is not positive, or no movement
    /// is large enough.
    #[instrument(skip(self))]
    pub fn request_loan(&mut self, amount: &str) -> Result<(), Rejection> {
        let account = self.account().ok_or(Rejection::NotLoggedIn)?;
        let amount = positive_amount(amount)?;

        let covered = account
            .movements
            .iter()
            .any(|movement| i128::from(*movement) * 10 >= i128::from(amount));
        if !covered {
            return Err(Rejection::LoanNotCovered(amount));
        }

        if !fits_credit(account, amount) {
            return Err(Rejection::Overflow(amount));
        }

        let username = account.username.clone();
        self.store.push_movement(&username, amount);

        self.update_ui();
        Ok(())
    }

    /// Close the logged-in account and log out.
    ///
    /// # Errors
    ///
    /// [`Rejection::InvalidCredentials`] unless the username and pin are
    /// exactly those of the logged-in account.
    #[instrument(skip(self, pin))]
    pub fn close(&mut self, username: &str, pin: &str) -> Result<(), Rejection> {
        let account = self.account().ok_or(Rejection::NotLoggedIn)?;

        if account.username != username || !input::matches_pin(pin, account.pin) {
            return Err(Rejection::InvalidCredentials);
        }

        let pin = account.pin;
        self.store.remove(username, pin);
        self.current = None;
        self.sorted = false;

        self.presentation.set_visible(false);
        Ok(())
    }

    /// Flip between booking order and sorted order for the movement list
    ///
    /// # Errors
    ///
    /// [`Rejection::NotLoggedIn`] if there is nothing to sort.
    pub fn toggle_sort(&mut self) -> Result<(), Rejection> {
        if self.current.is_none() {
            return Err(Rejection::NotLoggedIn);
        }

        self.sorted = !self.sorted;
        self.update_ui();
        Ok(())
    }

    fn update_ui(&mut self) {
        if let Some(view) = self.view() {
            self.presentation.render(&view);
        }
    }
}

/// Whether depositing `amount` keeps the balance and incoming total in range
fn fits_credit(account: &Account, amount: i64) -> bool {
    account.balance().checked_add(amount).is_some()
        && ledger::total_in(&account.movements)
            .checked_add(amount)
            .is_some()
}

/// Whether withdrawing `amount` keeps the outgoing total in range
fn fits_debit(account: &Account, amount: i64) -> bool {
    ledger::total_out(&account.movements)
        .checked_add(amount)
        .is_some()
}

fn positive_amount(field: &str) -> Result<i64, Rejection> {
    input::amount(field)
        .filter(|amount| *amount > 0)
        .ok_or_else(|| Rejection::InvalidAmount(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[derive(Debug, Default)]
    struct Recorder {
        welcomes: Vec<String>,
        views: Vec<View>,
        visible: bool,
    }

    impl Presentation for Recorder {
        fn welcome(&mut self, message: &str) {
            self.welcomes.push(message.to_string());
        }

        fn render(&mut self, view: &View) {
            self.views.push(view.clone());
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn store() -> AccountStore {
        AccountStore::new(seed::accounts())
    }

    fn logged_in<'a>(store: &'a mut AccountStore, username: &str, pin: &str) -> Session<'a, Recorder> {
        let mut session = Session::new(store, Recorder::default());
        session.login(username, pin).unwrap();
        session
    }

    fn balance(session: &Session<Recorder>, username: &str) -> i64 {
        session.store().find(username).unwrap().balance()
    }

    #[test]
    fn login() {
        let mut store = store();
        let mut session = Session::new(&mut store, Recorder::default());
        assert_eq!(session.state(), State::LoggedOut);

        session.login("js", "1111").unwrap();

        assert_eq!(session.state(), State::LoggedIn("js".to_string()));
        assert_eq!(session.presentation().welcomes, vec!["Welcome Back Jonas"]);
        assert!(session.presentation().visible);
        assert_eq!(session.presentation().views.len(), 1);
        assert_eq!(session.presentation().views[0].summary.balance, 3840);
    }

    #[test]
    fn login_coerces_pin() {
        let mut store = store();
        let mut session = Session::new(&mut store, Recorder::default());
        assert_eq!(session.login("jd", " 2222.0 "), Ok(()));
    }

    #[test]
    fn failed_login_is_silent() {
        let mut store = store();
        let mut session = Session::new(&mut store, Recorder::default());

        assert_eq!(session.login("js", "2222"), Err(Rejection::InvalidCredentials));
        assert_eq!(session.login("nobody", "1111"), Err(Rejection::InvalidCredentials));
        assert_eq!(session.login("js", ""), Err(Rejection::InvalidCredentials));

        assert_eq!(session.state(), State::LoggedOut);
        assert!(session.presentation().welcomes.is_empty());
        assert!(session.presentation().views.is_empty());
        assert!(!session.presentation().visible);
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let mut store = store();
        let mut session = logged_in(&mut store, "js", "1111");

        assert!(session.login("jd", "0000").is_err());
        assert_eq!(session.state(), State::LoggedIn("js".to_string()));
    }

    #[test]
    fn logged_out_actions_are_rejected() {
        let mut store = store();
        let mut session = Session::new(&mut store, Recorder::default());

        assert_eq!(session.transfer("jd", "100"), Err(Rejection::NotLoggedIn));
        assert_eq!(session.request_loan("100"), Err(Rejection::NotLoggedIn));
        assert_eq!(session.close("js", "1111"), Err(Rejection::NotLoggedIn));
        assert_eq!(session.toggle_sort(), Err(Rejection::NotLoggedIn));
        assert!(session.presentation().views.is_empty());
    }

    #[test]
    fn transfer_moves_money() {
        let mut store = store();
        let mut session = logged_in(&mut store, "js", "1111");
        let total = balance(&session, "js") + balance(&session, "jd");

        session.transfer("jd", "100").unwrap();

        assert_eq!(balance(&session, "js"), 3740);
        assert_eq!(balance(&session, "jd"), 11720 + 100);
        assert_eq!(balance(&session, "js") + balance(&session, "jd"), total);
        assert_eq!(session.account().unwrap().movements.last(), Some(&-100));
        assert_eq!(session.store().find("jd").unwrap().movements.last(), Some(&100));

        let views = &session.presentation().views;
        assert_eq!(views.len(), 2);
        assert_eq!(views[1].summary.balance, 3740);
        assert_eq!(views[1].rows[0].amount, -100);
    }

    #[test]
    fn transfer_of_whole_balance() {
        let mut store = store();
        let mut session = logged_in(&mut store, "ss", "4444");

        session.transfer("stw", "2270").unwrap();
        assert_eq!(balance(&session, "ss"), 0);
    }

    #[test]
    fn invalid_transfers_change_nothing() {
        let mut store = store();
        let mut session = logged_in(&mut store, "js", "1111");
        let before = session.store().clone();

        assert_eq!(
            session.transfer("jd", "0"),
            Err(Rejection::InvalidAmount("0".to_string()))
        );
        assert_eq!(
            session.transfer("jd", "-5"),
            Err(Rejection::InvalidAmount("-5".to_string()))
        );
        assert_eq!(
            session.transfer("jd", ""),
            Err(Rejection::InvalidAmount(String::new()))
        );
        assert_eq!(
            session.transfer("zz", "100"),
            Err(Rejection::UnknownRecipient("zz".to_string()))
        );
        assert_eq!(session.transfer("js", "100"), Err(Rejection::SelfTransfer));
        assert_eq!(
            session.transfer("jd", "3841"),
            Err(Rejection::InsufficientFunds {
                balance: 3840,
                amount: 3841
            })
        );

        assert_eq!(session.store(), &before);
        assert_eq!(session.presentation().views.len(), 1);
    }

    #[test]
    fn loan_needs_a_large_enough_movement() {
        let mut store = store();
        let mut session = logged_in(&mut store, "js", "1111");

        // the largest movement is 3000
        assert_eq!(session.request_loan("30001"), Err(Rejection::LoanNotCovered(30001)));
        assert_eq!(balance(&session, "js"), 3840);

        session.request_loan("30000").unwrap();
        assert_eq!(balance(&session, "js"), 33840);
        assert_eq!(session.account().unwrap().movements.last(), Some(&30000));
        assert_eq!(session.presentation().views.len(), 2);
    }

    #[test]
    fn loan_amount_must_be_positive() {
        let mut store = store();
        let mut session = logged_in(&mut store, "js", "1111");

        assert!(matches!(session.request_loan("0"), Err(Rejection::InvalidAmount(_))));
        assert!(matches!(session.request_loan("1.5"), Err(Rejection::InvalidAmount(_))));
        assert!(matches!(session.request_loan("lots"), Err(Rejection::InvalidAmount(_))));
    }

    #[test]
    fn loan_that_would_overflow_is_rejected() {
        let mut store = AccountStore::new(vec![Account::new(
            "Rich Person",
            vec![i64::MAX - 10],
            1.0,
            1,
        )]);
        let mut session = logged_in(&mut store, "rp", "1");

        assert_eq!(session.request_loan("100"), Err(Rejection::Overflow(100)));
        assert_eq!(session.account().unwrap().movements, vec![i64::MAX - 10]);
        assert_eq!(session.presentation().views.len(), 1);

        session.request_loan("10").unwrap();
        assert_eq!(balance(&session, "rp"), i64::MAX);
    }

    #[test]
    fn repeated_loans_stop_before_overflow() {
        let mut store = store();
        let mut session = logged_in(&mut store, "js", "1111");

        let mut granted = 0;
        loop {
            let largest = *session.account().unwrap().movements.iter().max().unwrap();
            let amount = largest.saturating_mul(10).min(1 << 53);
            if session.request_loan(&amount.to_string()).is_err() {
                break;
            }
            granted += 1;
            assert!(granted < 10_000);
        }

        let account = session.account().unwrap();
        assert_eq!(account.balance(), account.movements.iter().sum::<i64>());
    }

    #[test]
    fn transfer_that_would_overflow_is_rejected() {
        let mut store = AccountStore::new(vec![
            Account::new("Sarah Smith", vec![1000], 1.0, 4444),
            Account::new("Rich Person", vec![i64::MAX - 10], 1.0, 1),
        ]);
        let mut session = logged_in(&mut store, "ss", "4444");
        let before = session.store().clone();

        assert_eq!(session.transfer("rp", "100"), Err(Rejection::Overflow(100)));
        assert_eq!(session.store(), &before);

        session.transfer("rp", "10").unwrap();
        assert_eq!(balance(&session, "rp"), i64::MAX);
        assert_eq!(balance(&session, "ss"), 990);
    }

    #[test]
    fn close_removes_the_account() {
        let mut store = store();
        let mut session = logged_in(&mut store, "jd", "2222");

        session.close("jd", "2222").unwrap();

        assert_eq!(session.state(), State::LoggedOut);
        assert!(!session.presentation().visible);
        assert!(session.store().find("jd").is_none());
        let usernames: Vec<_> = session
            .store()
            .iter()
            .map(|account| account.username.as_str())
            .collect();
        assert_eq!(usernames, vec!["js", "stw", "ss"]);
    }

    #[test]
    fn close_with_wrong_credentials_is_a_no_op() {
        let mut store = store();
        let mut session = logged_in(&mut store, "jd", "2222");

        assert_eq!(session.close("jd", "1111"), Err(Rejection::InvalidCredentials));
        assert_eq!(session.close("js", "1111"), Err(Rejection::InvalidCredentials));

        assert_eq!(session.state(), State::LoggedIn("jd".to_string()));
        assert!(session.presentation().visible);
        assert_eq!(session.store().len(), 4);
    }

    #[test]
    fn closed_account_cannot_log_in() {
        let mut store = store();
        let mut session = logged_in(&mut store, "ss", "4444");
        session.close("ss", "4444").unwrap();

        assert_eq!(session.login("ss", "4444"), Err(Rejection::InvalidCredentials));
    }

    #[test]
    fn sort_toggles_presentation_only() {
        let mut store = store();
        let mut session = logged_in(&mut store, "ss", "4444");
        let movements = session.account().unwrap().movements.clone();

        session.toggle_sort().unwrap();
        assert!(session.is_sorted());
        let sorted: Vec<_> = session.presentation().views[1]
            .rows
            .iter()
            .map(|row| row.amount)
            .collect();
        assert_eq!(sorted, vec![1000, 700, 430, 90, 50]);

        session.toggle_sort().unwrap();
        assert!(!session.is_sorted());
        assert_eq!(session.account().unwrap().movements, movements);
    }

    #[test]
    fn login_resets_sort() {
        let mut store = store();
        let mut session = logged_in(&mut store, "ss", "4444");
        session.toggle_sort().unwrap();

        session.login("js", "1111").unwrap();
        assert!(!session.is_sorted());
    }

    #[test]
    fn dispatch() {
        let mut store = store();
        let mut session = Session::new(&mut store, Recorder::default());

        for line in ["login stw 3333", "transfer ss 5", "loan 4000", "sort"] {
            session.dispatch(&line.parse().unwrap()).unwrap();
        }

        assert_eq!(balance(&session, "stw"), 10 - 5 + 4000);
        assert_eq!(balance(&session, "ss"), 2270 + 5);
        assert!(session.is_sorted());
    }

    #[test]
    fn rendered_balance_matches_movements() {
        let mut store = store();
        let mut session = logged_in(&mut store, "jd", "2222");

        for line in ["transfer js 500", "loan 800", "transfer ss 9999999", "sort"] {
            let _ = session.dispatch(&line.parse().unwrap());
            let account = session.account().unwrap();
            let view = session.presentation().views.last().unwrap();
            assert_eq!(view.summary.balance, account.movements.iter().sum::<i64>());
        }
    }
}
