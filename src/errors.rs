//! Possible errors

use crate::amount::ParseAmountErr;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("not enough funds available for this operation")]
    NotEnoughAvailableFunds,
}

/// Group errors that occurs when raw script row can't become an action
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionErr {
    #[error("action `{0}` requires an argument")]
    MissingArgument(&'static str),
    #[error("withdraw amount error")]
    Amount(#[from] ParseAmountErr),
}
