//! Authentication states and the handler of every (state, action) pair

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bank_account::AccountData;
use crate::amount::Amount;

/// Number of wrong passwords in a row that suspends an account
pub const MAX_PASSWORD_RETRIES: u32 = 3;

/// Represent one of states in which account can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthState {
    /// initial state, only login does something
    LoggedOut,
    /// password was accepted, money can be withdrawn
    LoggedIn,
    /// too many wrong passwords, only unlock does something
    Suspended,
}

/// Outcome of an action, returned instead of errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Outcome {
    LoggedIn,
    LoggedOut,
    Suspended,
    /// wrong password that did not suspend account
    Error,
}

impl From<AuthState> for Outcome {
    fn from(state: AuthState) -> Self {
        match state {
            AuthState::LoggedOut => Outcome::LoggedOut,
            AuthState::LoggedIn => Outcome::LoggedIn,
            AuthState::Suspended => Outcome::Suspended,
        }
    }
}

impl AuthState {
    /// state name for display/logging
    pub fn name(&self) -> &'static str {
        match self {
            AuthState::LoggedOut => "LoggedOut",
            AuthState::LoggedIn => "LoggedIn",
            AuthState::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::LoggedIn => "LoggedIn",
            Outcome::LoggedOut => "LoggedOut",
            Outcome::Suspended => "Suspended",
            Outcome::Error => "Error",
        };
        f.write_str(s)
    }
}

/// What handler decided: code for the caller and state account moves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition {
    pub outcome: Outcome,
    pub next: AuthState,
}

impl Transition {
    /// self-loop reporting the current state
    fn stay(state: AuthState) -> Self {
        Self {
            outcome: state.into(),
            next: state,
        }
    }

    /// move to `next` and report it
    fn enter(next: AuthState) -> Self {
        Self {
            outcome: next.into(),
            next,
        }
    }
}

// Dispatch by active state. Handlers only touch `AccountData`, the caller
// stores `Transition::next`.
impl AuthState {
    pub(crate) fn login(self, data: &mut AccountData, password: &str) -> Transition {
        match self {
            AuthState::LoggedOut => logged_out::login(data, password),
            AuthState::LoggedIn => logged_in::login(),
            AuthState::Suspended => suspended::login(),
        }
    }

    pub(crate) fn logout(self) -> Transition {
        match self {
            AuthState::LoggedOut => logged_out::logout(),
            AuthState::LoggedIn => logged_in::logout(),
            AuthState::Suspended => suspended::logout(),
        }
    }

    pub(crate) fn unlock(self, data: &mut AccountData, reset_code: &str) -> Transition {
        match self {
            AuthState::LoggedOut => logged_out::unlock(),
            AuthState::LoggedIn => logged_in::unlock(),
            AuthState::Suspended => suspended::unlock(data, reset_code),
        }
    }

    pub(crate) fn withdraw_money(self, data: &mut AccountData, amount: &Amount) -> Transition {
        match self {
            AuthState::LoggedOut => logged_out::withdraw_money(),
            AuthState::LoggedIn => logged_in::withdraw_money(data, amount),
            AuthState::Suspended => suspended::withdraw_money(),
        }
    }
}

mod logged_out {
    use super::{AuthState, Outcome, Transition, MAX_PASSWORD_RETRIES};
    use crate::account::bank_account::AccountData;

    const HERE: AuthState = AuthState::LoggedOut;

    pub fn login(data: &mut AccountData, password: &str) -> Transition {
        if data.credentials.password_matches(password) {
            // retries are left as they are, only unlock clears them
            return Transition::enter(AuthState::LoggedIn);
        }

        data.password_retries += 1;
        if data.password_retries >= MAX_PASSWORD_RETRIES {
            tracing::info!(
                retries = data.password_retries,
                "too many wrong passwords, suspending account"
            );
            return Transition::enter(AuthState::Suspended);
        }

        tracing::debug!(retries = data.password_retries, "wrong password");
        Transition {
            outcome: Outcome::Error,
            next: HERE,
        }
    }

    pub fn logout() -> Transition {
        Transition::stay(HERE)
    }

    pub fn unlock() -> Transition {
        Transition::stay(HERE)
    }

    pub fn withdraw_money() -> Transition {
        Transition::stay(HERE)
    }
}

mod logged_in {
    use super::{AuthState, Transition};
    use crate::{account::bank_account::AccountData, amount::Amount};

    const HERE: AuthState = AuthState::LoggedIn;

    pub fn login() -> Transition {
        Transition::stay(HERE)
    }

    pub fn logout() -> Transition {
        Transition::enter(AuthState::LoggedOut)
    }

    pub fn unlock() -> Transition {
        Transition::stay(HERE)
    }

    pub fn withdraw_money(data: &mut AccountData, amount: &Amount) -> Transition {
        if let Err(e) = data.balance.try_withdraw(amount) {
            // rejected withdraw is visible only as unchanged balance
            tracing::debug!(%amount, balance = %data.balance.cash(), "{e}");
        }
        Transition::stay(HERE)
    }
}

mod suspended {
    use super::{AuthState, Transition};
    use crate::account::bank_account::AccountData;

    const HERE: AuthState = AuthState::Suspended;

    pub fn login() -> Transition {
        Transition::stay(HERE)
    }

    pub fn logout() -> Transition {
        Transition::stay(HERE)
    }

    pub fn unlock(data: &mut AccountData, reset_code: &str) -> Transition {
        if !data.credentials.reset_code_matches(reset_code) {
            tracing::debug!("wrong reset code");
            return Transition::stay(HERE);
        }

        data.password_retries = 0;
        tracing::info!("account unlocked");
        Transition::enter(AuthState::LoggedOut)
    }

    pub fn withdraw_money() -> Transition {
        Transition::stay(HERE)
    }
}
