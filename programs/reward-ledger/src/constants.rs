// PDA Seeds for deterministic address generation

/// Seed for the Ledger PDA: ["ledger"]
/// One ledger per deployment. The PDA is also the mint authority.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed for the reward mint PDA: ["reward_mint", ledger.key()]
pub const REWARD_MINT_SEED: &[u8] = b"reward_mint";

/// Rewards are counted in whole units
pub const REWARD_DECIMALS: u8 = 0;

/// Seed for Allowance PDAs: ["allowance", owner, spender]
/// One record per (owner, spender) pair
pub const ALLOWANCE_SEED: &[u8] = b"allowance";

/// SPL delegation the ledger PDA holds over an owner's reward account.
/// Per-spender limits live in Allowance records, not in the token account.
pub const LEDGER_DELEGATION: u64 = u64::MAX;
