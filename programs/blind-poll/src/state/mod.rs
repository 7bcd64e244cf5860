pub mod registry;
pub mod poll;
pub mod submission;

pub use registry::*;
pub use poll::*;
pub use submission::*;

// Accounts that may not exist yet are passed unchecked, read with `try_load`
// and written back with `store`.
pub use reward_ledger::state::{store, try_load};
