use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::{Account, AccountKind};
use crate::error::WithdrawalError;

/// How a withdrawal attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Approved,
    Rejected { reason: String },
}

/// Record of a single withdrawal attempt, published to every configured
/// [`AuditHandler`] whether the attempt was approved or rejected.
///
/// `balance` is the resulting balance for an approved attempt and the
/// observed (unchanged) balance for a rejected one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub kind: AccountKind,
    pub amount: i64,
    pub balance: i64,
    pub outcome: Outcome,
    pub occurred_on: DateTime<Utc>,
}

impl WithdrawalRecord {
    pub(crate) fn approved(account: &Account, amount: i64) -> Self {
        Self::build(account, amount, Outcome::Approved)
    }

    pub(crate) fn rejected(account: &Account, amount: i64, error: &WithdrawalError) -> Self {
        Self::build(
            account,
            amount,
            Outcome::Rejected {
                reason: error.to_string(),
            },
        )
    }

    fn build(account: &Account, amount: i64, outcome: Outcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: *account.id(),
            kind: account.kind(),
            amount,
            balance: account.balance(),
            outcome,
            occurred_on: Utc::now(),
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// A sink for [`WithdrawalRecord`]s. Implementors perform side effects only
/// and must handle their own errors without panicking.
pub trait AuditHandler {
    fn handle(&self, record: &WithdrawalRecord);

    /// The name of the audit handler. By default, this is the type name of
    /// the handler; it is used to identify the handler being run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Mirrors every attempt into the ambient `tracing` subscriber: approved
/// attempts at info level, rejected attempts at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditHandler;

impl AuditHandler for TracingAuditHandler {
    fn handle(&self, record: &WithdrawalRecord) {
        match &record.outcome {
            Outcome::Approved => tracing::info!(
                account_id = %record.account_id,
                kind = %record.kind,
                amount = record.amount,
                balance = record.balance,
                "withdrawal approved"
            ),
            Outcome::Rejected { reason } => tracing::error!(
                account_id = %record.account_id,
                kind = %record.kind,
                amount = record.amount,
                balance = record.balance,
                reason = reason.as_str(),
                "withdrawal rejected"
            ),
        }
    }
}
