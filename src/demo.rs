// 🎬 Demo Scenario - the scripted walkthrough printed by the binary
//
// Alice opens savings with 1000.00, Bob opens current with 500.00.
// Bob's withdrawal of 700 only succeeds because of the overdraft facility.

use crate::config::LedgerConfig;
use crate::entities::{Account, AccountKind, CurrentAccount, SavingsAccount};
use crate::error::ValidationResult;

/// Run the scripted deposit / withdraw / interest sequence.
/// Returns the accounts in display order: savings first, then current.
pub fn run_scenario(config: &LedgerConfig) -> ValidationResult<Vec<AccountKind>> {
    let mut savings = SavingsAccount::from_config("Alice", 1000.0, config)?;
    let mut current = CurrentAccount::from_config("Bob", 500.0, config)?;

    savings.deposit(200.0)?;
    current.deposit(300.0)?;

    savings.withdraw(100.0)?;
    current.withdraw(700.0)?;

    savings.apply_interest()?;

    Ok(vec![savings.into(), current.into()])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::statement;
    use crate::error::ValidationError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_savings_walkthrough() {
        let mut alice = SavingsAccount::new("Alice", 1000.0).unwrap();

        alice.deposit(200.0).unwrap();
        assert_eq!(alice.balance(), 1200.0);

        alice.withdraw(100.0).unwrap();
        assert_eq!(alice.balance(), 1100.0);

        alice.apply_interest().unwrap();
        assert!(approx_eq(alice.balance(), 1122.0));
    }

    #[test]
    fn test_current_walkthrough() {
        let mut bob = CurrentAccount::with_overdraft_limit("Bob", 500.0, 500.0).unwrap();

        bob.deposit(300.0).unwrap();
        assert_eq!(bob.balance(), 800.0);

        // 700 <= 800 + 500
        bob.withdraw(700.0).unwrap();
        assert_eq!(bob.balance(), 100.0);
    }

    #[test]
    fn test_current_withdrawal_beyond_overdraft_fails() {
        let mut bob = CurrentAccount::new("Bob", 100.0).unwrap();

        let err = bob.withdraw(601.0).unwrap_err();
        assert!(matches!(err, ValidationError::OverdraftLimitExceeded { .. }));
        assert_eq!(bob.balance(), 100.0);
    }

    #[test]
    fn test_run_scenario_output() {
        let accounts = run_scenario(&LedgerConfig::default()).unwrap();

        assert_eq!(
            statement(&accounts),
            vec![
                "Alice's account | Balance: 1122.00".to_string(),
                "Bob's account | Balance: 100.00".to_string(),
            ]
        );
    }

    #[test]
    fn test_run_scenario_with_custom_config() {
        let config = LedgerConfig {
            default_interest_rate: 0.1,
            default_overdraft_limit: 0.0,
        };

        // 700 <= 800, so Bob needs no overdraft here
        let accounts = run_scenario(&config).unwrap();
        assert!(approx_eq(accounts[0].balance(), 1210.0));
        assert_eq!(accounts[1].as_current().unwrap().overdraft_limit(), 0.0);
    }
}
