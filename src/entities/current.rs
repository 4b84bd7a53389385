// 💳 Current Account - everyday account with an overdraft facility
//
// Invariant: balance >= -overdraft_limit at all times.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::account::{Account, AccountType, Holding};
use crate::config::{LedgerConfig, DEFAULT_OVERDRAFT_LIMIT};
use crate::error::{validate_withdrawal, ValidationError, ValidationResult};

#[derive(Debug, Clone, Serialize)]
pub struct CurrentAccount {
    #[serde(flatten)]
    holding: Holding,

    /// Maximum amount the balance may go below zero
    overdraft_limit: f64,
}

impl CurrentAccount {
    /// Open with the default 500.00 overdraft limit
    pub fn new(owner: impl Into<String>, balance: f64) -> ValidationResult<Self> {
        Self::with_overdraft_limit(owner, balance, DEFAULT_OVERDRAFT_LIMIT)
    }

    pub fn with_overdraft_limit(
        owner: impl Into<String>,
        balance: f64,
        overdraft_limit: f64,
    ) -> ValidationResult<Self> {
        if !overdraft_limit.is_finite() || overdraft_limit < 0.0 {
            return Err(ValidationError::InvalidOverdraftLimit {
                limit: overdraft_limit,
            });
        }
        if !balance.is_finite() {
            return Err(ValidationError::NonFiniteAmount { amount: balance });
        }
        if balance < -overdraft_limit {
            return Err(ValidationError::OpeningBalanceBelowOverdraft {
                balance,
                limit: overdraft_limit,
            });
        }

        Ok(CurrentAccount {
            holding: Holding::open(owner.into(), balance),
            overdraft_limit,
        })
    }

    /// Open using the configured default overdraft limit
    pub fn from_config(
        owner: impl Into<String>,
        balance: f64,
        config: &LedgerConfig,
    ) -> ValidationResult<Self> {
        Self::with_overdraft_limit(owner, balance, config.default_overdraft_limit)
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    /// Largest withdrawal that would currently succeed
    pub fn available_funds(&self) -> f64 {
        self.holding.balance + self.overdraft_limit
    }

    pub fn is_overdrawn(&self) -> bool {
        self.holding.balance < 0.0
    }
}

impl Account for CurrentAccount {
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
        AccountType::Current
    }

    fn deposit(&mut self, amount: f64) -> ValidationResult {
        self.holding.deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> ValidationResult {
        validate_withdrawal(amount).map_err(|err| self.holding.reject("withdraw", err))?;

        let available = self.available_funds();
        if amount > available {
            return Err(self.holding.reject(
                "withdraw",
                ValidationError::OverdraftLimitExceeded {
                    requested: amount,
                    available,
                },
            ));
        }

        self.holding.debit(amount, -self.overdraft_limit);
        Ok(())
    }
}

impl fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// TESTS
// ============================================================================
