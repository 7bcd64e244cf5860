use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub reward_per_answer: u64,
    pub max_answers: u64,
    /// Registry allowance over the creator's rewards after the grant
    pub allowance: u64,
}

#[event]
pub struct SealedAnswerSubmitted {
    pub poll_id: u64,
    pub submitter: Pubkey,
    pub sealed_count: u64,
}

#[event]
pub struct PollClosed {
    pub poll_id: u64,
    pub sealed_count: u64,
}

#[event]
pub struct AnswerRevealed {
    pub poll_id: u64,
    pub revealer: Pubkey,
    pub index: u64,
    pub reward: u64,
}
