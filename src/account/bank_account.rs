use super::balance::Balance;
use super::credentials::Credentials;
use super::state::{AuthState, Outcome, Transition};
use super::{Account, Action};
use crate::amount::Amount;
use rust_decimal::Decimal;

/// Mutable account fields every state handler works on
#[derive(Debug, Clone)]
pub(crate) struct AccountData {
    pub balance: Balance,
    pub credentials: Credentials,
    pub password_retries: u32,
}

impl AccountData {
    pub fn new(
        cash_balance: Amount,
        password: impl Into<String>,
        reset_code: impl Into<String>,
    ) -> Self {
        Self {
            balance: Balance::new(cash_balance),
            credentials: Credentials::new(password, reset_code),
            password_retries: 0,
        }
    }
}

/// Bank account which answers actions according to its current [`AuthState`]
///
/// Every action takes `&mut self`, so at most one action is in flight per
/// account. Share it between tasks only behind a lock or inside a single
/// owning task.
#[derive(Debug, Clone)]
pub struct BankAccount {
    data: AccountData,
    state: AuthState,
}

impl BankAccount {
    /// Open logged out account with zero failed logins
    pub fn new(
        cash_balance: Amount,
        password: impl Into<String>,
        reset_code: impl Into<String>,
    ) -> Self {
        Self {
            data: AccountData::new(cash_balance, password, reset_code),
            state: AuthState::LoggedOut,
        }
    }

    /// Try to authenticate with `password`
    pub fn login(&mut self, password: &str) -> Outcome {
        let t = self.state.login(&mut self.data, password);
        self.switch("login", t)
    }

    /// End logged in session
    pub fn logout(&mut self) -> Outcome {
        let t = self.state.logout();
        self.switch("logout", t)
    }

    /// Lift suspension with `reset_code`
    pub fn unlock(&mut self, reset_code: &str) -> Outcome {
        let t = self.state.unlock(&mut self.data, reset_code);
        self.switch("unlock", t)
    }

    /// Take `amount` out of account
    ///
    /// Withdraw bigger than balance is ignored, check [`Account::balance`] to
    /// find out if money was taken.
    pub fn withdraw_money(&mut self, amount: Amount) -> Outcome {
        let t = self.state.withdraw_money(&mut self.data, &amount);
        self.switch("withdraw", t)
    }

    /// Run single action, same as calling matching method
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Login(password) => self.login(&password),
            Action::Logout => self.logout(),
            Action::Unlock(reset_code) => self.unlock(&reset_code),
            Action::Withdraw(amount) => self.withdraw_money(amount),
        }
    }

    fn switch(&mut self, action: &'static str, t: Transition) -> Outcome {
        if t.next != self.state {
            tracing::debug!(action, from = %self.state, to = %t.next, "state changed");
        }
        self.state = t.next;
        t.outcome
    }
}

impl Account for BankAccount {
    fn balance(&self) -> Decimal {
        self.data.balance.cash()
    }

    fn password_retries(&self) -> u32 {
        self.data.password_retries
    }

    fn state(&self) -> AuthState {
        self.state
    }
}
