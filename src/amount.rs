//! Protect before using negative amount for balances and withdraws.

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represent non-negative financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount of that is guarantee to be non-negative
    pub fn new(num: u64, scale: u32) -> Amount {
        let inner = Decimal::from_i128_with_scale(num.into(), scale);
        Self(inner)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount is negative")]
/// represent error when operation want to use negative amount of money
pub struct NegativeAmountErr;

/// Error returned when text can't be read as [`Amount`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAmountErr {
    /// not a decimal number
    #[error("malformed amount `{0}`")]
    Malformed(String),
    /// decimal number below zero
    #[error(transparent)]
    Negative(#[from] NegativeAmountErr),
}

impl TryFrom<Decimal> for Amount {
    type Error = NegativeAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(NegativeAmountErr)
        } else {
            Ok(Self(value))
        }
    }
}

impl FromStr for Amount {
    type Err = ParseAmountErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dec = Decimal::from_str(s.trim()).map_err(|_| ParseAmountErr::Malformed(s.into()))?;
        Ok(Amount::try_from(dec)?)
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
