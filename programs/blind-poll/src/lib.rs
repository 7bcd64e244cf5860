#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

// Import our modules
pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod instructions;

// Import instruction handlers
use instructions::*;
use state::PollDetails;

declare_id!("GLkWWA6P7NDLuEYpkZAwXn4S6jRWzZjLGe6qTiLmVTbt");

#[program]
pub mod blind_poll {
    use super::*;

    /// Create the registry PDA and bind it to the reward mint
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        ctx.accounts.initialize_registry(&ctx.bumps)
    }

    /// Open a poll and grant the registry an allowance for its rewards
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        subject: Vec<u8>,
        reward_per_answer: u64,
        max_answers: u64,
        questions: Vec<u8>,
    ) -> Result<u64> {
        ctx.accounts
            .create_poll(subject, reward_per_answer, max_answers, questions, &ctx.bumps)
    }

    /// Commit to an answer while the poll is open
    pub fn submit_sealed_answer(
        ctx: Context<SubmitSealedAnswer>,
        poll_id: u64,
        commitment: [u8; 32],
    ) -> Result<()> {
        ctx.accounts
            .submit_sealed_answer(poll_id, commitment, &ctx.bumps)
    }

    // Close a poll (creator only)
    pub fn close_poll(ctx: Context<ClosePoll>, poll_id: u64) -> Result<bool> {
        ctx.accounts.close_poll(poll_id)
    }

    /// Reveal a sealed answer after close and collect the reward
    pub fn reveal_answer(
        ctx: Context<RevealAnswer>,
        poll_id: u64,
        answer_index: u64,
        commitment: [u8; 32],
        plaintext: Vec<u8>,
    ) -> Result<()> {
        ctx.accounts
            .reveal_answer(poll_id, answer_index, commitment, plaintext, &ctx.bumps)
    }

    pub fn query_last_poll_id(ctx: Context<QueryLastPollId>, _principal: Pubkey) -> Result<u64> {
        ctx.accounts.last_poll_id()
    }

    pub fn query_poll_by_id(ctx: Context<QueryPoll>, _poll_id: u64) -> Result<Option<PollDetails>> {
        ctx.accounts.poll_details()
    }

    pub fn query_answer_count_sealed(ctx: Context<QueryPoll>, _poll_id: u64) -> Result<Option<u64>> {
        ctx.accounts.sealed_count()
    }

    pub fn query_answer_count_revealed(
        ctx: Context<QueryPoll>,
        _poll_id: u64,
    ) -> Result<Option<u64>> {
        ctx.accounts.revealed_count()
    }

    pub fn query_answer_by_index(
        ctx: Context<QueryAnswer>,
        _poll_id: u64,
        index: u64,
    ) -> Result<Option<Vec<u8>>> {
        ctx.accounts.answer_at(index)
    }
}
