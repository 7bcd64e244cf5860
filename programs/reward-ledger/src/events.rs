use anchor_lang::prelude::*;

#[event]
pub struct RewardMinted {
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_minted: u64,
}

#[event]
pub struct AllowanceApproved {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardTransferred {
    pub spender: Pubkey,
    pub owner: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    /// What the spender may still move after this transfer
    pub remaining_allowance: u64,
}
