use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::COMMITMENT_LEN;

/// A participant's sealed answer. One per submitter per poll, never deleted.
#[account]
#[derive(InitSpace, Default)]
pub struct SealedSubmission {
    pub poll_id: u64,

    pub submitter: Pubkey,

    /// keccak256 of the encoded answer
    pub commitment: [u8; COMMITMENT_LEN],

    /// Set once the matching plaintext has been revealed and paid
    pub revealed: bool,

    pub submitted_at: i64,

    pub bump: u8,
}

impl SealedSubmission {
    /// `init_if_needed` hands back a zeroed account for first-time submitters
    pub fn is_recorded(&self) -> bool {
        self.submitter != Pubkey::default()
    }
}

/// A revealed answer, stored at its reveal-order index
#[account]
#[derive(InitSpace)]
pub struct RevealedAnswer {
    pub poll_id: u64,

    /// 0-based position in reveal order
    pub index: u64,

    pub revealer: Pubkey,

    #[max_len(256)] // MAX_ANSWER_LEN
    pub plaintext: Vec<u8>,

    pub bump: u8,
}

/// Commitment for an encoded answer
pub fn commitment_of(plaintext: &[u8]) -> [u8; COMMITMENT_LEN] {
    keccak::hash(plaintext).to_bytes()
}
