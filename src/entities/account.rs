// 💳 Account Contract - the capability set every account variant supports
//
// "Identity persists, balance changes - but only through validated operations"
//
// - Account is a trait, not a base struct: it cannot be instantiated on its own
// - deposit / withdraw / balance are the whole public surface for money movement
// - Shared fields live in `Holding`, embedded by each variant (composition)
// - UUID provides stable identity; opened_at records when the account was created

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{validate_deposit, ValidationError, ValidationResult};

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountType {
    /// Interest-bearing, never overdrawn
    Savings,

    /// Everyday account with an overdraft facility
    Current,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Current => "Current",
        }
    }
}

// ============================================================================
// ACCOUNT CONTRACT
// ============================================================================

/// Operations every account variant must provide.
///
/// `withdraw` has no default: each variant owns its withdrawal policy.
/// All mutating operations validate before they touch the balance, so a
/// rejected call leaves the account exactly as it was.
pub trait Account {
    /// Stable identity - never changes
    fn id(&self) -> Uuid;

    fn owner(&self) -> &str;

    /// Current balance (read-only; there is no setter)
    fn balance(&self) -> f64;

    fn opened_at(&self) -> DateTime<Utc>;

    fn account_type(&self) -> AccountType;

    /// Add `amount` to the balance. `amount` must be positive and finite.
    fn deposit(&mut self, amount: f64) -> ValidationResult;

    /// Remove `amount` from the balance, subject to the variant's limit.
    fn withdraw(&mut self, amount: f64) -> ValidationResult;

    /// Human-readable summary, e.g. `Alice's account | Balance: 1122.00`
    fn describe(&self) -> String {
        format!("{}'s account | Balance: {:.2}", self.owner(), self.balance())
    }
}

// ============================================================================
// HOLDING (shared state)
// ============================================================================

/// State common to every variant. Only the entities module can reach `balance`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Holding {
    pub(crate) id: Uuid,
    pub(crate) owner: String,
    pub(crate) balance: f64,
    pub(crate) opened_at: DateTime<Utc>,
}

impl Holding {
    pub(crate) fn open(owner: String, balance: f64) -> Self {
        let holding = Holding {
            id: Uuid::new_v4(),
            owner,
            balance,
            opened_at: Utc::now(),
        };

        tracing::debug!(
            account = %holding.id,
            owner = %holding.owner,
            balance = holding.balance,
            "Account opened"
        );

        holding
    }

    /// Deposit contract shared by all variants
    pub(crate) fn deposit(&mut self, amount: f64) -> ValidationResult {
        validate_deposit(amount).map_err(|err| self.reject("deposit", err))?;
        let next = self.checked_add(amount).map_err(|err| self.reject("deposit", err))?;

        self.balance = next;
        tracing::debug!(
            account = %self.id,
            owner = %self.owner,
            amount,
            balance = self.balance,
            "Deposit applied"
        );
        Ok(())
    }

    /// Apply an already-validated withdrawal, never dropping below `floor`
    pub(crate) fn debit(&mut self, amount: f64, floor: f64) {
        self.balance = (self.balance - amount).max(floor);
        tracing::debug!(
            account = %self.id,
            owner = %self.owner,
            amount,
            balance = self.balance,
            "Withdrawal applied"
        );
    }

    pub(crate) fn credit_interest(&mut self, interest: f64) -> ValidationResult {
        let next = self
            .checked_add(interest)
            .map_err(|err| self.reject("apply_interest", err))?;

        self.balance = next;
        tracing::debug!(
            account = %self.id,
            owner = %self.owner,
            interest,
            balance = self.balance,
            "Interest applied"
        );
        Ok(())
    }

    /// Candidate balance after adding `amount`; rejected if it leaves f64 range
    fn checked_add(&self, amount: f64) -> ValidationResult<f64> {
        let next = self.balance + amount;
        if !next.is_finite() {
            return Err(ValidationError::BalanceOverflow {
                balance: self.balance,
                amount,
            });
        }
        Ok(next)
    }

    /// Log a rejected operation and hand the error back to the caller
    pub(crate) fn reject(&self, operation: &'static str, err: ValidationError) -> ValidationError {
        tracing::warn!(
            account = %self.id,
            owner = %self.owner,
            operation,
            balance = self.balance,
            error = %err,
            "Operation rejected"
        );
        err
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_as_str() {
        assert_eq!(AccountType::Savings.as_str(), "Savings");
        assert_eq!(AccountType::Current.as_str(), "Current");
    }

    #[test]
    fn test_holding_open() {
        let holding = Holding::open("Alice".to_string(), 1000.0);

        assert_eq!(holding.owner, "Alice");
        assert_eq!(holding.balance, 1000.0);
        assert!(holding.opened_at <= Utc::now());
    }

    #[test]
    fn test_holdings_have_distinct_ids() {
        let a = Holding::open("Alice".to_string(), 0.0);
        let b = Holding::open("Alice".to_string(), 0.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_holding_deposit_rejects_before_mutating() {
        let mut holding = Holding::open("Alice".to_string(), 100.0);

        assert!(holding.deposit(-20.0).is_err());
        assert_eq!(holding.balance, 100.0);

        holding.deposit(20.0).unwrap();
        assert_eq!(holding.balance, 120.0);
    }

    #[test]
    fn test_holding_deposit_overflow_rejected() {
        let mut holding = Holding::open("Alice".to_string(), f64::MAX);

        let err = holding.deposit(f64::MAX).unwrap_err();
        assert!(matches!(err, ValidationError::BalanceOverflow { .. }));
        assert_eq!(holding.balance, f64::MAX);
    }

    #[test]
    fn test_holding_credit_interest_overflow_rejected() {
        let mut holding = Holding::open("Alice".to_string(), f64::MAX);

        assert!(holding.credit_interest(f64::INFINITY).is_err());
        assert!(holding.credit_interest(f64::MAX).is_err());
        assert_eq!(holding.balance, f64::MAX);

        holding.credit_interest(0.0).unwrap();
        assert_eq!(holding.balance, f64::MAX);
    }

    #[test]
    fn test_holding_debit_respects_floor() {
        let mut holding = Holding::open("Bob".to_string(), 0.1);

        // 0.1 - (0.1 + 0.2) rounds just below -0.2 without the floor
        holding.debit(0.1 + 0.2, -0.2);
        assert_eq!(holding.balance, -0.2);
    }
}
