// 🔀 Account Kind - one type for a mixed list of accounts
//
// Dispatch is a plain `match`; variant-only operations stay reachable
// through as_savings / as_current.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::account::{Account, AccountType};
use super::current::CurrentAccount;
use super::savings::SavingsAccount;
use crate::error::ValidationResult;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum AccountKind {
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl AccountKind {
    fn as_account(&self) -> &dyn Account {
        match self {
            AccountKind::Savings(account) => account,
            AccountKind::Current(account) => account,
        }
    }

    fn as_account_mut(&mut self) -> &mut dyn Account {
        match self {
            AccountKind::Savings(account) => account,
            AccountKind::Current(account) => account,
        }
    }

    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        match self {
            AccountKind::Savings(account) => Some(account),
            AccountKind::Current(_) => None,
        }
    }

    pub fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        match self {
            AccountKind::Savings(account) => Some(account),
            AccountKind::Current(_) => None,
        }
    }

    pub fn as_current(&self) -> Option<&CurrentAccount> {
        match self {
            AccountKind::Current(account) => Some(account),
            AccountKind::Savings(_) => None,
        }
    }

    pub fn as_current_mut(&mut self) -> Option<&mut CurrentAccount> {
        match self {
            AccountKind::Current(account) => Some(account),
            AccountKind::Savings(_) => None,
        }
    }
}

impl Account for AccountKind {
    fn id(&self) -> Uuid {
        self.as_account().id()
    }

    fn owner(&self) -> &str {
        self.as_account().owner()
    }

    fn balance(&self) -> f64 {
        self.as_account().balance()
    }

    fn opened_at(&self) -> DateTime<Utc> {
        self.as_account().opened_at()
    }

    fn account_type(&self) -> AccountType {
        self.as_account().account_type()
    }

    fn deposit(&mut self, amount: f64) -> ValidationResult {
        self.as_account_mut().deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> ValidationResult {
        self.as_account_mut().withdraw(amount)
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings(account) => fmt::Display::fmt(account, f),
            AccountKind::Current(account) => fmt::Display::fmt(account, f),
        }
    }
}

impl From<SavingsAccount> for AccountKind {
    fn from(account: SavingsAccount) -> Self {
        AccountKind::Savings(account)
    }
}

impl From<CurrentAccount> for AccountKind {
    fn from(account: CurrentAccount) -> Self {
        AccountKind::Current(account)
    }
}

/// One describe line per account, in the order given
pub fn statement(accounts: &[AccountKind]) -> Vec<String> {
    accounts.iter().map(|account| account.describe()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
