use bankist_lib::{MovementRow, Presentation, Summary, View};
use rusty_money::{iso::Currency, Money};

/// Renders a session to standard output
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    currency: &'static Currency,
    visible: bool,
}

impl Terminal {
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            visible: false,
        }
    }

    pub fn money(&self, amount: i64) -> String {
        Money::from_major(amount, self.currency).to_string()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn fractional_money(&self, amount: f64) -> String {
        let minor = amount * 10_f64.powi(self.currency.exponent as i32);
        Money::from_minor(minor.round() as i64, self.currency).to_string()
    }

    pub fn movement(&self, row: &MovementRow) -> String {
        format!(
            "{:>4} {:<10} {:>16}",
            row.number,
            row.kind.label(),
            self.money(row.amount)
        )
    }

    pub fn summary(&self, summary: &Summary) -> String {
        format!(
            "In {}  Out {}  Interest {}",
            self.money(summary.total_in),
            self.money(summary.total_out),
            self.fractional_money(summary.interest)
        )
    }
}

impl Presentation for Terminal {
    fn welcome(&mut self, message: &str) {
        println!("{}", message);
    }

    fn render(&mut self, view: &View) {
        if !self.visible {
            return;
        }

        println!("Current balance: {}", self.money(view.summary.balance));
        for row in &view.rows {
            println!("{}", self.movement(row));
        }
        println!("{}", self.summary(&view.summary));
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible && !visible {
            println!("Logged out.");
        }
        self.visible = visible;
    }
}
