use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use reward_ledger::{
    constants::{ALLOWANCE_SEED, LEDGER_SEED},
    cpi::accounts::TransferFrom,
    program::RewardLedger,
    state::Ledger,
};

use crate::{
    constants::*,
    error::PollError,
    events::AnswerRevealed,
    state::{store, try_load, Poll, Registry, RevealedAnswer, SealedSubmission},
};

#[derive(Accounts)]
#[instruction(poll_id: u64, answer_index: u64)]
pub struct RevealAnswer<'info> {
    #[account(mut)]
    pub revealer: Signer<'info>,

    /// Spender of the creator's allowance
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: loaded in the handler so a missing poll reports NotFound
    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,

    /// CHECK: the revealer's sealed answer, absent if they never submitted
    #[account(
        mut,
        seeds = [SEALED_SEED, poll.key().as_ref(), revealer.key().as_ref()],
        bump
    )]
    pub sealed: UncheckedAccount<'info>,

    /// Next slot in reveal order
    /// Seeds: ["answer", poll, answer_index]
    #[account(
        init_if_needed,
        payer = revealer,
        space = 8 + RevealedAnswer::INIT_SPACE,
        seeds = [ANSWER_SEED, poll.key().as_ref(), answer_index.to_le_bytes().as_ref()],
        bump
    )]
    pub answer: Account<'info, RevealedAnswer>,

    /// CHECK: compared against the poll's creator in the handler
    pub creator: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = creator,
    )]
    pub creator_reward_account: Account<'info, TokenAccount>,

    /// CHECK: created by the reward ledger if needed
    #[account(mut)]
    pub revealer_reward_account: UncheckedAccount<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        seeds::program = reward_ledger::ID,
        constraint = ledger.mint == registry.reward_mint @ PollError::InvalidRewardMint,
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: allowance[creator][registry] on the reward ledger
    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, creator.key().as_ref(), registry.key().as_ref()],
        bump,
        seeds::program = reward_ledger::ID,
    )]
    pub registry_allowance: UncheckedAccount<'info>,

    #[account(address = registry.reward_mint @ PollError::InvalidRewardMint)]
    pub reward_mint: Account<'info, Mint>,

    pub ledger_program: Program<'info, RewardLedger>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RevealAnswer<'info> {
    pub fn reveal_answer(
        &mut self,
        poll_id: u64,
        answer_index: u64,
        commitment: [u8; COMMITMENT_LEN],
        plaintext: Vec<u8>,
        bumps: &RevealAnswerBumps,
    ) -> Result<()> {
        let poll_info = self.poll.to_account_info();
        let sealed_info = self.sealed.to_account_info();

        let mut poll = try_load::<Poll>(&poll_info)?.ok_or(PollError::NotFound)?;
        let sealed = try_load::<SealedSubmission>(&sealed_info)?;

        if let Err(err) = poll.check_reveal(sealed.as_ref(), &commitment, &plaintext, answer_index) {
            msg!(
                "Reveal rejected: poll={}, revealer={}, index={}",
                poll_id,
                self.revealer.key(),
                answer_index
            );
            return Err(err);
        }
        let mut sealed = sealed.ok_or(PollError::NoSealedSubmission)?;

        require_keys_eq!(self.creator.key(), poll.creator, PollError::CreatorMismatch);

        // A failed transfer aborts the reveal with it
        self.pay_reward(poll.reward_per_answer)?;

        let answer = poll.apply_reveal(&mut sealed, self.revealer.key(), plaintext, bumps.answer)?;
        let index = answer.index;

        store(&poll_info, &poll)?;
        store(&sealed_info, &sealed)?;
        self.answer.set_inner(answer);

        msg!("Answer {} revealed for poll {}", index, poll_id);

        emit!(AnswerRevealed {
            poll_id,
            revealer: self.revealer.key(),
            index,
            reward: poll.reward_per_answer,
        });

        Ok(())
    }

    /// Draws `amount` from the creator's allowance to the revealer, signed by the registry PDA
    fn pay_reward(&self, amount: u64) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[REGISTRY_SEED, &[self.registry.bump]]];

        let ctx = CpiContext::new_with_signer(
            self.ledger_program.to_account_info(),
            TransferFrom {
                spender: self.registry.to_account_info(),
                payer: self.revealer.to_account_info(),
                ledger: self.ledger.to_account_info(),
                mint: self.reward_mint.to_account_info(),
                owner: self.creator.to_account_info(),
                owner_account: self.creator_reward_account.to_account_info(),
                allowance: self.registry_allowance.to_account_info(),
                recipient: self.revealer.to_account_info(),
                recipient_account: self.revealer_reward_account.to_account_info(),
                token_program: self.token_program.to_account_info(),
                associated_token_program: self.associated_token_program.to_account_info(),
                system_program: self.system_program.to_account_info(),
            },
            signer_seeds,
        );
        reward_ledger::cpi::transfer_from(ctx, amount)
    }
}
