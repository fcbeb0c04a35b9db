//! Account traits and structs
use rust_decimal::Decimal;

pub(crate) mod action;
pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod credentials;
pub(crate) mod state;

pub use action::Action;
pub use bank_account::BankAccount;
pub use state::{AuthState, Outcome, MAX_PASSWORD_RETRIES};

/// Represent observable account information, for display only
pub trait Account {
    /// cash that can still be withdrawn
    fn balance(&self) -> Decimal;
    /// wrong passwords counted since account opening or last unlock
    fn password_retries(&self) -> u32;
    /// state that answers next action
    fn state(&self) -> AuthState;

    /// is account waiting for reset code
    fn is_suspended(&self) -> bool {
        self.state() == AuthState::Suspended
    }
}
