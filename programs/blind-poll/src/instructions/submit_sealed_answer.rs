use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::PollError,
    events::SealedAnswerSubmitted,
    state::{store, try_load, Poll, SealedSubmission},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct SubmitSealedAnswer<'info> {
    #[account(mut)]
    pub submitter: Signer<'info>,

    /// CHECK: loaded in the handler so a missing poll reports NotFound
    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,

    /// One sealed answer per submitter per poll
    /// Seeds: ["sealed", poll, submitter]
    #[account(
        init_if_needed,
        payer = submitter,
        space = 8 + SealedSubmission::INIT_SPACE,
        seeds = [SEALED_SEED, poll.key().as_ref(), submitter.key().as_ref()],
        bump
    )]
    pub sealed: Account<'info, SealedSubmission>,

    pub system_program: Program<'info, System>,
}

impl<'info> SubmitSealedAnswer<'info> {
    pub fn submit_sealed_answer(
        &mut self,
        poll_id: u64,
        commitment: [u8; COMMITMENT_LEN],
        bumps: &SubmitSealedAnswerBumps,
    ) -> Result<()> {
        let poll_info = self.poll.to_account_info();
        let mut poll = try_load::<Poll>(&poll_info)?.ok_or(PollError::NotFound)?;

        let submitted_at = Clock::get()?.unix_timestamp;
        if let Err(err) = poll.seal_answer(
            &mut self.sealed,
            self.submitter.key(),
            commitment,
            submitted_at,
            bumps.sealed,
        ) {
            msg!(
                "Sealed answer rejected: poll={}, open={}, sealed={}/{}",
                poll_id,
                poll.is_open(),
                poll.sealed_count,
                poll.max_answers
            );
            return Err(err);
        }

        store(&poll_info, &poll)?;

        msg!("Sealed answer recorded for poll {}", poll_id);

        emit!(SealedAnswerSubmitted {
            poll_id,
            submitter: self.submitter.key(),
            sealed_count: poll.sealed_count,
        });

        Ok(())
    }
}
