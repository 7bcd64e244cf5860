use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{try_load, CreatorIndex, Poll, PollDetails, RevealedAnswer},
};

// Read-only views returned through return data.
// Missing accounts resolve to absence, never to an error.

#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct QueryLastPollId<'info> {
    /// CHECK: may not exist for principals that never created a poll
    #[account(seeds = [CREATOR_SEED, principal.as_ref()], bump)]
    pub creator_index: UncheckedAccount<'info>,
}

impl<'info> QueryLastPollId<'info> {
    pub fn last_poll_id(&self) -> Result<u64> {
        let index = try_load::<CreatorIndex>(&self.creator_index.to_account_info())?;
        Ok(index.map(|index| index.last_poll_id).unwrap_or(NO_POLL_ID))
    }
}

/// Shared by the poll record and counter queries
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct QueryPoll<'info> {
    /// CHECK: may not exist
    #[account(seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()], bump)]
    pub poll: UncheckedAccount<'info>,
}

impl<'info> QueryPoll<'info> {
    fn load(&self) -> Result<Option<Poll>> {
        try_load::<Poll>(&self.poll.to_account_info())
    }

    pub fn poll_details(&self) -> Result<Option<PollDetails>> {
        Ok(self.load()?.map(|poll| poll.details()))
    }

    pub fn sealed_count(&self) -> Result<Option<u64>> {
        Ok(self.load()?.map(|poll| poll.sealed_count))
    }

    pub fn revealed_count(&self) -> Result<Option<u64>> {
        Ok(self.load()?.map(|poll| poll.revealed_count))
    }
}

#[derive(Accounts)]
#[instruction(poll_id: u64, index: u64)]
pub struct QueryAnswer<'info> {
    /// CHECK: may not exist
    #[account(seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()], bump)]
    pub poll: UncheckedAccount<'info>,

    /// CHECK: may not exist
    #[account(seeds = [ANSWER_SEED, poll.key().as_ref(), index.to_le_bytes().as_ref()], bump)]
    pub answer: UncheckedAccount<'info>,
}

impl<'info> QueryAnswer<'info> {
    pub fn answer_at(&self, index: u64) -> Result<Option<Vec<u8>>> {
        let Some(poll) = try_load::<Poll>(&self.poll.to_account_info())? else {
            return Ok(None);
        };
        if !poll.has_answer(index) {
            return Ok(None);
        }

        let answer = try_load::<RevealedAnswer>(&self.answer.to_account_info())?;
        Ok(answer.map(|answer| answer.plaintext))
    }
}
