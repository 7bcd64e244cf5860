use anchor_lang::prelude::*;
use anchor_spl::{associated_token::get_associated_token_address, token::TokenAccount};

use crate::{
    constants::*,
    error::LedgerError,
    state::{try_load, Allowance, Ledger},
};

// Read-only views. Accounts that were never created read as zero.

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct BalanceOf<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: may be uninitialized; address pinned to the owner's reward account
    #[account(
        address = get_associated_token_address(&owner, &ledger.mint) @ LedgerError::InvalidTokenAccount
    )]
    pub owner_account: UncheckedAccount<'info>,
}

impl<'info> BalanceOf<'info> {
    pub fn balance_of(&self) -> Result<u64> {
        let account = try_load::<TokenAccount>(&self.owner_account.to_account_info())?;
        Ok(account.map(|account| account.amount).unwrap_or(0))
    }
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, spender: Pubkey)]
pub struct AllowanceOf<'info> {
    /// CHECK: may be uninitialized
    #[account(
        seeds = [ALLOWANCE_SEED, owner.as_ref(), spender.as_ref()],
        bump
    )]
    pub allowance: UncheckedAccount<'info>,
}

impl<'info> AllowanceOf<'info> {
    pub fn allowance_of(&self) -> Result<u64> {
        let allowance = try_load::<Allowance>(&self.allowance.to_account_info())?;
        Ok(allowance.map(|allowance| allowance.amount).unwrap_or(0))
    }
}
