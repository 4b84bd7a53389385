// Account Entities
// "Identity persists, balance changes through validated operations only"
//
// - account: the shared contract (trait) and the private Holding state
// - savings / current: the two withdrawal policies
// - kind: enum over both, for mixed collections

pub mod account;
pub mod savings;
pub mod current;
pub mod kind;

pub use account::{Account, AccountType};
pub use savings::SavingsAccount;
pub use current::CurrentAccount;
pub use kind::{statement, AccountKind};
