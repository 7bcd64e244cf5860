use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

use crate::{constants::*, error::LedgerError, events::RewardMinted, state::Ledger};

/// Mint reward units to a recipient
/// Used to fund creators; it plays no part in the poll lifecycle.
#[derive(Accounts)]
pub struct MintReward<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = authority @ LedgerError::Unauthorized,
        has_one = mint @ LedgerError::InvalidMint,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// CHECK: only used as the authority of the credited token account
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub recipient_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MintReward<'info> {
    pub fn mint_reward(&mut self, amount: u64) -> Result<()> {
        self.ledger.record_mint(amount)?;

        let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[self.ledger.bump]]];

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            MintTo {
                mint: self.mint.to_account_info(),
                to: self.recipient_account.to_account_info(),
                authority: self.ledger.to_account_info(),
            },
            signer_seeds,
        );
        mint_to(ctx, amount)?;

        msg!("Minted {} reward units to {}", amount, self.recipient.key());

        emit!(RewardMinted {
            recipient: self.recipient.key(),
            amount,
            total_minted: self.ledger.total_minted,
        });

        Ok(())
    }
}
