pub use crate::account::{Account, AccountKind};
pub use crate::audit::{AuditHandler, Outcome, TracingAuditHandler, WithdrawalRecord};
pub use crate::error::WithdrawalError;
pub use crate::guard::WithdrawalGuard;

mod account;
mod audit;
mod error;
mod guard;
