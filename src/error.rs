use thiserror::Error;

/// Business rejections raised by the withdrawal guard. These are expected,
/// recoverable outcomes: the process never aborts over them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawalError {
    #[error("insufficient funds: requested {requested} with balance {balance}")]
    InsufficientFunds { requested: i64, balance: i64 },

    #[error("invalid withdrawal amount: {0}")]
    InvalidAmount(i64),
}
