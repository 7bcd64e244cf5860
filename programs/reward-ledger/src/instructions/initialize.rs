use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{constants::*, state::Ledger};

/// Create the ledger and its reward mint
/// The signer becomes the only principal allowed to mint.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Ledger configuration (PDA)
    /// Seeds: ["ledger"]
    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Reward mint, controlled by the ledger PDA
    /// Seeds: ["reward_mint", ledger]
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_MINT_SEED, ledger.key().as_ref()],
        bump,
        mint::decimals = REWARD_DECIMALS,
        mint::authority = ledger,
        mint::freeze_authority = ledger,
    )]
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.ledger.set_inner(Ledger {
            authority: self.authority.key(),
            mint: self.mint.key(),
            total_minted: 0,
            bump: bumps.ledger,
        });

        msg!("Reward ledger initialized");
        msg!("Authority: {}", self.authority.key());
        msg!("Mint: {}", self.mint.key());

        Ok(())
    }
}
