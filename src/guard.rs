use crate::account::Account;
use crate::audit::{AuditHandler, WithdrawalRecord};
use crate::error::WithdrawalError;

/// Intercepts withdrawal attempts: evaluates the sufficient-funds
/// precondition against the account, and either delegates to
/// [`Account::withdraw`] or short-circuits with a rejection. Either way the
/// attempt is published to every configured [`AuditHandler`].
///
/// The guard keeps no state across calls; each call is a one-shot decision.
#[derive(Default)]
pub struct WithdrawalGuard {
    handlers: Vec<Box<dyn AuditHandler>>,
}

impl WithdrawalGuard {
    pub fn new() -> Self {
        Self { handlers: vec![] }
    }

    /// Set audit handlers list
    pub fn with_handlers(mut self, handlers: Vec<Box<dyn AuditHandler>>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Add a single audit handler
    pub fn add_handler(mut self, handler: impl AuditHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Validates the requested amount against the account state, and applies
    /// the debit only when validation succeeds. Holding `&mut Account` for
    /// the whole call keeps the check and the mutation free of interleaving.
    ///
    /// A rejection is a business outcome, not a fault: it is returned as the
    /// error variant and reported to the handlers, never panicked on.
    #[tracing::instrument(skip_all, fields(account_id = %account.id()), err)]
    pub fn withdraw(
        &self,
        account: &mut Account,
        amount: i64,
    ) -> Result<WithdrawalRecord, WithdrawalError> {
        match Self::validate(account, amount) {
            Ok(()) => {
                account.withdraw(amount);
                let record = WithdrawalRecord::approved(account, amount);
                self.publish(&record);
                Ok(record)
            }
            Err(error) => {
                let record = WithdrawalRecord::rejected(account, amount, &error);
                self.publish(&record);
                Err(error)
            }
        }
    }

    /// The precondition. Non-positive amounts are rejected before the
    /// balance is even looked at, so a negative "withdrawal" can never
    /// credit an account.
    fn validate(account: &Account, amount: i64) -> Result<(), WithdrawalError> {
        match amount {
            amount if amount <= 0 => Err(WithdrawalError::InvalidAmount(amount)),
            amount if account.balance() < amount => Err(WithdrawalError::InsufficientFunds {
                requested: amount,
                balance: account.balance(),
            }),
            _ => Ok(()),
        }
    }

    fn publish(&self, record: &WithdrawalRecord) {
        for handler in self.handlers.iter() {
            handler.handle(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountKind;

    #[test]
    fn invalid_amount_wins_over_insufficient_funds() {
        let account = Account::new(AccountKind::Checking, 0);

        let result = WithdrawalGuard::validate(&account, -50);

        assert_eq!(result, Err(WithdrawalError::InvalidAmount(-50)));
    }

    #[test]
    fn validate_passes_exact_balance() {
        let account = Account::new(AccountKind::Savings, 300);

        assert_eq!(WithdrawalGuard::validate(&account, 300), Ok(()));
    }

    #[test]
    fn validate_rejects_over_balance() {
        let account = Account::new(AccountKind::Savings, 300);

        assert_eq!(
            WithdrawalGuard::validate(&account, 301),
            Err(WithdrawalError::InsufficientFunds {
                requested: 301,
                balance: 300
            })
        );
    }
}
