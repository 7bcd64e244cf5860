use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::PollError,
    events::PollClosed,
    state::{store, try_load, Poll},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct ClosePoll<'info> {
    pub creator: Signer<'info>,

    /// CHECK: loaded in the handler so a missing poll reports NotFound
    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,
}

impl<'info> ClosePoll<'info> {
    pub fn close_poll(&mut self, poll_id: u64) -> Result<bool> {
        let poll_info = self.poll.to_account_info();
        let mut poll = try_load::<Poll>(&poll_info)?.ok_or(PollError::NotFound)?;

        poll.close(&self.creator.key())?;
        store(&poll_info, &poll)?;

        msg!("Poll closed successfully!");
        msg!("Poll ID: {}", poll_id);
        msg!("Sealed answers: {}", poll.sealed_count);

        emit!(PollClosed {
            poll_id,
            sealed_count: poll.sealed_count,
        });

        Ok(true)
    }
}
