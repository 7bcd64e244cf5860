use anchor_lang::prelude::*;
use anchor_spl::token::{self, Approve, Mint, Token, TokenAccount};

use crate::{
    constants::*,
    error::LedgerError,
    events::AllowanceApproved,
    state::{Allowance, Ledger},
};

/// Grant `spender` the right to move up to `amount` units out of the
/// owner's reward account. Replaces any previous grant to that spender.
#[derive(Accounts)]
pub struct ApproveSpender<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: only used as a seed of the allowance record
    pub spender: UncheckedAccount<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = mint @ LedgerError::InvalidMint,
    )]
    pub ledger: Account<'info, Ledger>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = owner,
    )]
    pub owner_account: Account<'info, TokenAccount>,

    /// allowance[owner][spender]
    /// Seeds: ["allowance", owner, spender]
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Allowance::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> ApproveSpender<'info> {
    pub fn approve(&mut self, amount: u64, bumps: &ApproveSpenderBumps) -> Result<()> {
        self.allowance
            .approve(self.owner.key(), self.spender.key(), amount, bumps.allowance);

        // The ledger PDA is the only SPL delegate; it moves funds for every spender
        let ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Approve {
                to: self.owner_account.to_account_info(),
                delegate: self.ledger.to_account_info(),
                authority: self.owner.to_account_info(),
            },
        );
        token::approve(ctx, LEDGER_DELEGATION)?;

        msg!(
            "Allowance set: owner={}, spender={}, amount={}",
            self.owner.key(),
            self.spender.key(),
            amount
        );

        emit!(AllowanceApproved {
            owner: self.owner.key(),
            spender: self.spender.key(),
            amount,
        });

        Ok(())
    }
}
