use crate::{amount::Amount, errors::BalanceErr};
use rust_decimal::Decimal;

/// Represents current cash balance of account
#[derive(Debug, Clone, Default)]
pub struct Balance {
    // never below zero, only withdraws change it
    cash: Decimal,
}

impl Balance {
    pub fn new(initial: Amount) -> Self {
        Self {
            cash: initial.into(),
        }
    }

    pub fn try_withdraw(&mut self, amount: &Amount) -> Result<(), BalanceErr> {
        if self.cash < **amount {
            return Err(BalanceErr::NotEnoughAvailableFunds);
        }

        self.cash -= **amount;
        debug_assert!(self.cash >= Decimal::ZERO);
        Ok(())
    }

    pub fn cash(&self) -> Decimal {
        self.cash
    }
}
