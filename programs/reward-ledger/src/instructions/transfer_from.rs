use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{
    constants::*,
    error::LedgerError,
    events::RewardTransferred,
    state::{store, try_load, Allowance, Ledger},
};

/// Move `amount` from `owner` to `recipient` on the strength of an allowance
/// previously granted to `spender`.
#[derive(Accounts)]
pub struct TransferFrom<'info> {
    /// Holder of the allowance
    pub spender: Signer<'info>,

    /// Pays for the recipient's reward account when it does not exist yet
    #[account(mut)]
    pub payer: Signer<'info>,

    /// SPL delegate of the owner's reward account, signs the transfer
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = mint @ LedgerError::InvalidMint,
    )]
    pub ledger: Account<'info, Ledger>,

    pub mint: Account<'info, Mint>,

    /// CHECK: authority of the debited token account, checked by the ATA constraint
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = owner,
    )]
    pub owner_account: Account<'info, TokenAccount>,

    /// CHECK: allowance[owner][spender], absent when never approved
    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: UncheckedAccount<'info>,

    /// CHECK: authority of the credited token account, checked by the ATA constraint
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub recipient_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> TransferFrom<'info> {
    pub fn transfer_from(&mut self, amount: u64) -> Result<()> {
        let allowance_info = self.allowance.to_account_info();
        let mut allowance = try_load::<Allowance>(&allowance_info)?.unwrap_or_default();
        let granted = allowance.amount;
        let balance = self.owner_account.amount;

        let remaining_allowance = match allowance.spend(balance, amount) {
            Ok(remaining) => remaining,
            Err(err) => {
                msg!(
                    "Transfer rejected: amount={}, allowance={}, balance={}",
                    amount,
                    granted,
                    balance
                );
                return Err(err);
            }
        };

        if amount == 0 {
            msg!("Zero-amount transfer, nothing to move");
            return Ok(());
        }

        let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[self.ledger.bump]]];

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            TransferChecked {
                from: self.owner_account.to_account_info(),
                mint: self.mint.to_account_info(),
                to: self.recipient_account.to_account_info(),
                authority: self.ledger.to_account_info(),
            },
            signer_seeds,
        );
        transfer_checked(ctx, amount, self.mint.decimals)?;

        store(&allowance_info, &allowance)?;

        msg!(
            "Transferred {} reward units from {} to {}",
            amount,
            self.owner.key(),
            self.recipient.key()
        );

        emit!(RewardTransferred {
            spender: self.spender.key(),
            owner: self.owner.key(),
            recipient: self.recipient.key(),
            amount,
            remaining_allowance,
        });

        Ok(())
    }
}
