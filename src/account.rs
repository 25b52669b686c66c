use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification label of an [`Account`]. Carries no behavior: every kind
/// withdraws the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Checking,
    Savings,
    Payroll,
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Checking => write!(f, "checking"),
            AccountKind::Savings => write!(f, "savings"),
            AccountKind::Payroll => write!(f, "payroll"),
        }
    }
}

/// A bank account: an identity, an immutable kind and a balance in signed
/// minor units.
///
/// The balance is written only by [`Account::withdraw`].
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    kind: AccountKind,
    balance: i64,
}

impl Account {
    pub fn new(kind: AccountKind, initial_balance: i64) -> Self {
        Self::with_id(Uuid::new_v4(), kind, initial_balance)
    }

    pub fn with_id(id: Uuid, kind: AccountKind, initial_balance: i64) -> Self {
        Self {
            id,
            kind,
            balance: initial_balance,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Applies the debit unconditionally. The sufficient-funds precondition
    /// lives in [`WithdrawalGuard`](crate::WithdrawalGuard) so it stays
    /// replaceable from the outside; calling this directly can drive the
    /// balance negative.
    pub fn withdraw(&mut self, amount: i64) {
        self.balance -= amount;

        tracing::info!(
            account_id = %self.id,
            kind = %self.kind,
            amount,
            balance = self.balance,
            "withdrawal applied"
        );
    }
}
