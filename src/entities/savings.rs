// 🏦 Savings Account - interest-bearing, never overdrawn
//
// Invariant: balance >= 0 at all times.
// apply_interest compounds: two calls at r != one call at 2r.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::account::{Account, AccountType, Holding};
use crate::config::{LedgerConfig, DEFAULT_INTEREST_RATE};
use crate::error::{validate_withdrawal, ValidationError, ValidationResult};

#[derive(Debug, Clone, Serialize)]
pub struct SavingsAccount {
    #[serde(flatten)]
    holding: Holding,

    /// Fraction credited per `apply_interest` call (0.02 = 2%)
    interest_rate: f64,
}

impl SavingsAccount {
    /// Open with the default 2% interest rate
    pub fn new(owner: impl Into<String>, balance: f64) -> ValidationResult<Self> {
        Self::with_interest_rate(owner, balance, DEFAULT_INTEREST_RATE)
    }

    pub fn with_interest_rate(
        owner: impl Into<String>,
        balance: f64,
        interest_rate: f64,
    ) -> ValidationResult<Self> {
        if !balance.is_finite() {
            return Err(ValidationError::NonFiniteAmount { amount: balance });
        }
        if balance < 0.0 {
            return Err(ValidationError::NegativeOpeningBalance { balance });
        }
        if !interest_rate.is_finite() || interest_rate < 0.0 {
            return Err(ValidationError::InvalidInterestRate {
                rate: interest_rate,
            });
        }

        Ok(SavingsAccount {
            holding: Holding::open(owner.into(), balance),
            interest_rate,
        })
    }

    /// Open using the configured default interest rate
    pub fn from_config(
        owner: impl Into<String>,
        balance: f64,
        config: &LedgerConfig,
    ) -> ValidationResult<Self> {
        Self::with_interest_rate(owner, balance, config.default_interest_rate)
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Credit `balance * interest_rate` and return the amount credited.
    /// Rejected, with the balance unchanged, if the result would overflow.
    pub fn apply_interest(&mut self) -> ValidationResult<f64> {
        let interest = self.holding.balance * self.interest_rate;
        self.holding.credit_interest(interest)?;
        Ok(interest)
    }
}

impl Account for SavingsAccount {
    fn id(&self) -> Uuid {
        self.holding.id
    }

    fn owner(&self) -> &str {
        &self.holding.owner
    }

    fn balance(&self) -> f64 {
        self.holding.balance
    }

    fn opened_at(&self) -> DateTime<Utc> {
        self.holding.opened_at
    }

    fn account_type(&self) -> AccountType {
        AccountType::Savings
    }

    fn deposit(&mut self, amount: f64) -> ValidationResult {
        self.holding.deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> ValidationResult {
        validate_withdrawal(amount).map_err(|err| self.holding.reject("withdraw", err))?;

        let available = self.holding.balance;
        if amount > available {
            return Err(self.holding.reject(
                "withdraw",
                ValidationError::InsufficientFunds {
                    requested: amount,
                    available,
                },
            ));
        }

        self.holding.debit(amount, 0.0);
        Ok(())
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// TESTS
// ============================================================================
