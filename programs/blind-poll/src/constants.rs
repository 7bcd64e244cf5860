// PDA Seeds for deterministic address generation

/// Seed for the Registry PDA: ["registry"]
/// The registry PDA is also the spender that draws down creators' allowances
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for CreatorIndex PDAs: ["creator", creator.key()]
/// One index per creator, pointing at the last poll they opened
pub const CREATOR_SEED: &[u8] = b"creator";

/// Seed for Poll PDAs: ["poll", poll_id]
/// Poll ids are global, so the creator is not part of the seed
pub const POLL_SEED: &[u8] = b"poll";

/// Seed for SealedSubmission PDAs: ["sealed", poll.key(), submitter.key()]
/// This ensures one sealed answer per submitter per poll
pub const SEALED_SEED: &[u8] = b"sealed";

/// Seed for RevealedAnswer PDAs: ["answer", poll.key(), reveal_index]
pub const ANSWER_SEED: &[u8] = b"answer";

// Payload limits. Payloads are opaque; only their size is bounded.
// Keep in sync with the #[max_len] attributes in state.

pub const MAX_SUBJECT_LEN: usize = 128;
pub const MAX_QUESTIONS_LEN: usize = 768;
pub const MAX_ANSWER_LEN: usize = 256;

/// Returned by `query_last_poll_id` for principals that never opened a poll
pub const NO_POLL_ID: u64 = 0;

/// Size of a Keccak-256 commitment
pub const COMMITMENT_LEN: usize = 32;
