use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use reward_ledger::{constants::LEDGER_SEED, state::Ledger};

use crate::{constants::*, error::PollError, state::Registry};

/// Create the registry and bind it to the reward ledger's mint
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Registry configuration (PDA)
    /// Seeds: ["registry"]
    #[account(
        init,
        payer = admin,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The reward ledger this registry pays out of
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        seeds::program = reward_ledger::ID,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(address = ledger.mint @ PollError::InvalidRewardMint)]
    pub reward_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    pub fn initialize_registry(&mut self, bumps: &InitializeRegistryBumps) -> Result<()> {
        self.registry.set_inner(Registry {
            admin: self.admin.key(),
            reward_mint: self.reward_mint.key(),
            poll_count: 0,
            bump: bumps.registry,
        });

        msg!("Poll registry initialized");
        msg!("Admin: {}", self.admin.key());
        msg!("Reward mint: {}", self.reward_mint.key());

        Ok(())
    }
}
