//! A library for driving a small in-memory bank: accounts, their movements,
//! and a login session that renders into an injected presentation layer.

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod account;
pub use account::{derive_username, Account, MovementKind};
pub mod action;
#[doc(inline)]
pub use action::Action;
pub mod dogs;
pub mod input;
pub mod insights;
pub mod ledger;
#[doc(inline)]
pub use ledger::Summary;
mod presentation;
pub use presentation::{MovementRow, Presentation, View};
pub mod seed;
pub mod session;
#[doc(inline)]
pub use session::{Rejection, Session, State};
mod store;
pub use store::AccountStore;
