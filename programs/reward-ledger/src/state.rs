use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Global ledger configuration
/// The ledger PDA controls the reward mint, so only this program can mint.
/// It is also the SPL delegate of every approved reward account and moves
/// funds only as far as an Allowance record permits.
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    /// Principal allowed to mint rewards
    pub authority: Pubkey,

    /// The reward token mint
    pub mint: Pubkey,

    /// Total units ever minted through the ledger
    pub total_minted: u64,

    /// Bump seed for the ledger PDA
    pub bump: u8,
}

impl Ledger {
    /// Count a mint. Zero mints are rejected.
    pub fn record_mint(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LedgerError::ZeroAmount);
        self.total_minted = self
            .total_minted
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }
}

/// allowance[owner][spender]
/// A missing record is an allowance of zero.
#[account]
#[derive(InitSpace, Default)]
pub struct Allowance {
    pub owner: Pubkey,

    pub spender: Pubkey,

    /// Units `spender` may still move out of `owner`'s balance
    pub amount: u64,

    pub bump: u8,
}

impl Allowance {
    /// Replace the grant. Other spenders of the same owner are untouched.
    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64, bump: u8) {
        self.owner = owner;
        self.spender = spender;
        self.amount = amount;
        self.bump = bump;
    }

    /// Draw `amount` against this allowance and an owner balance of `balance`.
    /// Returns what is left of the allowance.
    pub fn spend(&mut self, balance: u64, amount: u64) -> Result<u64> {
        ensure_transferable(self.amount, balance, amount)?;
        self.amount -= amount;
        Ok(self.amount)
    }
}

/// Validates an allowance-gated transfer. Allowance is checked before balance.
pub fn ensure_transferable(allowance: u64, balance: u64, amount: u64) -> Result<()> {
    require!(allowance >= amount, LedgerError::InsufficientAllowance);
    require!(balance >= amount, LedgerError::InsufficientBalance);
    Ok(())
}

/// Reads an account that may not have been created yet.
/// Anything not owned by `T`'s program, or still empty, reads as absent.
pub fn try_load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Writes an account read with `try_load` back into its data buffer.
/// The buffer was sized for the account's maximum space at creation.
pub fn store<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    value.try_serialize(&mut dst)
}
