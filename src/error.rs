// ⚠️ Validation Errors - the single rejection kind for account operations
//
// Every balance-changing operation validates first and mutates second.
// When a check fails the caller gets one of these and the balance is untouched.

use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("deposit amount must be positive (got {amount})")]
    NonPositiveDeposit { amount: f64 },

    #[error("withdrawal amount must not be negative (got {amount})")]
    NegativeWithdrawal { amount: f64 },

    #[error("amount must be a finite number (got {amount})")]
    NonFiniteAmount { amount: f64 },

    #[error("insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("overdraft limit exceeded: requested {requested:.2}, available {available:.2}")]
    OverdraftLimitExceeded { requested: f64, available: f64 },

    #[error("balance of {balance:.2} cannot absorb {amount} without overflowing")]
    BalanceOverflow { balance: f64, amount: f64 },

    #[error("opening balance must not be negative (got {balance})")]
    NegativeOpeningBalance { balance: f64 },

    #[error("opening balance {balance:.2} is below the overdraft floor of -{limit:.2}")]
    OpeningBalanceBelowOverdraft { balance: f64, limit: f64 },

    #[error("interest rate must be a non-negative finite number (got {rate})")]
    InvalidInterestRate { rate: f64 },

    #[error("overdraft limit must be a non-negative finite number (got {limit})")]
    InvalidOverdraftLimit { limit: f64 },
}

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Checks shared by every `deposit` implementation
pub fn validate_deposit(amount: f64) -> ValidationResult {
    if !amount.is_finite() {
        return Err(ValidationError::NonFiniteAmount { amount });
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveDeposit { amount });
    }
    Ok(())
}

/// Checks shared by every `withdraw` implementation, before the variant's own limit
pub fn validate_withdrawal(amount: f64) -> ValidationResult {
    if !amount.is_finite() {
        return Err(ValidationError::NonFiniteAmount { amount });
    }
    if amount < 0.0 {
        return Err(ValidationError::NegativeWithdrawal { amount });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
