use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use reward_ledger::{
    cpi::accounts::ApproveSpender,
    program::RewardLedger,
    constants::{ALLOWANCE_SEED, LEDGER_SEED},
    state::{Allowance, Ledger},
};

use crate::{
    constants::*,
    error::PollError,
    events::PollCreated,
    state::{try_load, CreatorIndex, Poll, PollParams, Registry},
};

#[derive(Accounts)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Creator -> last poll id
    /// Seeds: ["creator", creator]
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorIndex::INIT_SPACE,
        seeds = [CREATOR_SEED, creator.key().as_ref()],
        bump
    )]
    pub creator_index: Account<'info, CreatorIndex>,

    /// CHECK: the creator's most recent poll, absent for first-time creators
    #[account(
        seeds = [POLL_SEED, creator_index.last_poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub last_poll: UncheckedAccount<'info>,

    /// The new poll, at the next global id
    #[account(
        init,
        payer = creator,
        space = 8 + Poll::INIT_SPACE,
        seeds = [POLL_SEED, registry.next_poll_id().to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        seeds::program = reward_ledger::ID,
        constraint = ledger.mint == registry.reward_mint @ PollError::InvalidRewardMint,
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: allowance[creator][registry] on the reward ledger, created there if needed
    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, creator.key().as_ref(), registry.key().as_ref()],
        bump,
        seeds::program = reward_ledger::ID,
    )]
    pub registry_allowance: UncheckedAccount<'info>,

    #[account(address = registry.reward_mint @ PollError::InvalidRewardMint)]
    pub reward_mint: Account<'info, Mint>,

    /// Creator's reward account, the allowance is granted on it
    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = reward_mint,
        associated_token::authority = creator,
    )]
    pub creator_reward_account: Account<'info, TokenAccount>,

    pub ledger_program: Program<'info, RewardLedger>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePoll<'info> {
    pub fn create_poll(
        &mut self,
        subject: Vec<u8>,
        reward_per_answer: u64,
        max_answers: u64,
        questions: Vec<u8>,
        bumps: &CreatePollBumps,
    ) -> Result<u64> {
        let creator = self.creator.key();
        self.creator_index.init_if_new(creator, bumps.creator_index);

        let last_poll = try_load::<Poll>(&self.last_poll.to_account_info())?;
        let params = PollParams {
            subject,
            questions,
            reward_per_answer,
            max_answers,
        };

        let poll = match Poll::open(
            &mut self.registry,
            &mut self.creator_index,
            last_poll.as_ref(),
            creator,
            params,
            Clock::get()?.unix_timestamp,
            bumps.poll,
        ) {
            Ok(poll) => poll,
            Err(err) => {
                msg!(
                    "Poll rejected for creator {} (last poll {})",
                    creator,
                    self.creator_index.last_poll_id
                );
                return Err(err);
            }
        };

        let poll_id = poll.poll_id;
        let allowance = self.grant_allowance(&poll)?;
        self.poll.set_inner(poll);

        msg!("Poll created successfully!");
        msg!("Poll ID: {}", poll_id);
        msg!("Creator: {}", creator);
        msg!("Reward per answer: {}, max answers: {}", reward_per_answer, max_answers);

        emit!(PollCreated {
            poll_id,
            creator,
            reward_per_answer,
            max_answers,
            allowance,
        });

        Ok(poll_id)
    }

    /// Tops up the registry's allowance over the creator's rewards by the
    /// poll's worst-case payout. Returns the new allowance.
    fn grant_allowance(&self, poll: &Poll) -> Result<u64> {
        let current = try_load::<Allowance>(&self.registry_allowance.to_account_info())?
            .map(|allowance| allowance.amount)
            .unwrap_or(0);
        let allowance = poll.topped_up_allowance(current)?;

        let ctx = CpiContext::new(
            self.ledger_program.to_account_info(),
            ApproveSpender {
                owner: self.creator.to_account_info(),
                spender: self.registry.to_account_info(),
                ledger: self.ledger.to_account_info(),
                mint: self.reward_mint.to_account_info(),
                owner_account: self.creator_reward_account.to_account_info(),
                allowance: self.registry_allowance.to_account_info(),
                token_program: self.token_program.to_account_info(),
                system_program: self.system_program.to_account_info(),
            },
        );
        reward_ledger::cpi::approve(ctx, allowance)?;

        Ok(allowance)
    }
}
