// Account Ledger - Core Library
// Exposes the account contract, its variants, and config for the demo binary and tests

pub mod error;
pub mod config;
pub mod entities;
pub mod demo;

// Re-export commonly used types
pub use error::{ValidationError, ValidationResult};
pub use config::LedgerConfig;
pub use entities::{
    Account, AccountType, AccountKind,
    SavingsAccount, CurrentAccount,
    statement,
};
pub use demo::run_scenario;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
