use crate::{Account, MovementKind, Summary};

/// The display surface a [`Session`](crate::Session) renders into.
///
/// Implementations are pure sinks. Nothing they do feeds back into the
/// session.
pub trait Presentation {
    /// Show the greeting for a freshly logged-in user
    fn welcome(&mut self, message: &str);

    /// Replace the displayed balance, summary and movement list
    fn render(&mut self, view: &View);

    /// Show or hide the account panel
    fn set_visible(&mut self, visible: bool);
}

/// A single line of the movement list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRow {
    /// One-based position of the movement in booking (or sorted) order
    pub number: usize,

    /// Deposit or withdrawal
    pub kind: MovementKind,

    /// The signed amount
    pub amount: i64,
}

/// Everything shown for the logged-in account
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Balance, incoming, outgoing and interest figures
    pub summary: Summary,

    /// The movement list, top row first.
    ///
    /// The most recent movement is at the top. When sorted, the largest
    /// movement is at the top instead.
    pub rows: Vec<MovementRow>,
}

impl View {
    /// Build the view of an account
    #[must_use]
    pub fn of(account: &Account, sorted: bool) -> Self {
        Self {
            summary: Summary::of(account),
            rows: rows(&account.movements, sorted),
        }
    }
}

fn rows(movements: &[i64], sorted: bool) -> Vec<MovementRow> {
    let mut movements = movements.to_vec();
    if sorted {
        movements.sort_unstable();
    }

    movements
        .into_iter()
        .enumerate()
        .map(|(i, amount)| MovementRow {
            number: i + 1,
            kind: MovementKind::of(amount),
            amount,
        })
        .rev()
        .collect()
}
