use crate::{
    amount::Amount,
    csv::{RawAction, RawActionType},
    errors::ActionErr,
};

/// Single thing a user can ask an account to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// authenticate with password
    Login(String),
    /// end session
    Logout,
    /// recover from suspension with reset code
    Unlock(String),
    /// take money out
    Withdraw(Amount),
}

impl TryFrom<RawAction> for Action {
    type Error = ActionErr;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let arg = raw.argument.filter(|a| !a.is_empty());
        let action = match raw.action {
            RawActionType::Login => {
                Action::Login(arg.ok_or(ActionErr::MissingArgument("login"))?)
            }
            RawActionType::Logout => Action::Logout,
            RawActionType::Unlock => {
                Action::Unlock(arg.ok_or(ActionErr::MissingArgument("unlock"))?)
            }
            RawActionType::Withdraw => {
                let amount = arg.ok_or(ActionErr::MissingArgument("withdraw"))?;
                Action::Withdraw(amount.parse()?)
            }
        };
        Ok(action)
    }
}
