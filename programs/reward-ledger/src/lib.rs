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

declare_id!("AR6ouCbTEPH67zzGz1U1jDcYJ6EkigcQEVDAquDbs214");

#[program]
pub mod reward_ledger {
    use super::*;

    /// Create the ledger and its reward mint
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Mint reward units to a recipient (ledger authority only)
    pub fn mint(ctx: Context<MintReward>, amount: u64) -> Result<()> {
        ctx.accounts.mint_reward(amount)
    }

    /// Grant a spender an allowance over the signer's reward account
    pub fn approve(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
        ctx.accounts.approve(amount, &ctx.bumps)
    }

    /// Allowance-gated transfer signed by the spender
    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_from(amount)
    }

    pub fn balance_of(ctx: Context<BalanceOf>, _owner: Pubkey) -> Result<u64> {
        ctx.accounts.balance_of()
    }

    pub fn allowance_of(ctx: Context<AllowanceOf>, _owner: Pubkey, _spender: Pubkey) -> Result<u64> {
        ctx.accounts.allowance_of()
    }
}
