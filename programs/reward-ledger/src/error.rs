use anchor_lang::prelude::*;

/// Failures surfaced by the reward ledger
#[error_code]
pub enum LedgerError {
    #[msg("Spender allowance is lower than the requested amount")]
    InsufficientAllowance,

    #[msg("Owner balance is lower than the requested amount")]
    InsufficientBalance,

    #[msg("Only the ledger authority can mint rewards")]
    Unauthorized,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Mathematical overflow in ledger accounting")]
    MathOverflow,

    #[msg("Mint does not belong to this ledger")]
    InvalidMint,

    #[msg("Token account is not the owner's reward account")]
    InvalidTokenAccount,
}

impl LedgerError {
    /// Stable code handed to off-chain callers
    pub fn error_code(&self) -> u32 {
        match self {
            LedgerError::InsufficientAllowance => 2001,
            LedgerError::InsufficientBalance => 2002,
            LedgerError::Unauthorized => 2003,
            LedgerError::ZeroAmount => 2004,
            LedgerError::MathOverflow => 2005,
            LedgerError::InvalidMint => 2006,
            LedgerError::InvalidTokenAccount => 2007,
        }
    }

    pub fn category(&self) -> &'static str {
        match self.error_code() {
            2001..=2002 => "Transfer",
            2003..=2005 => "Minting",
            2006..=2099 => "Account Validation",
            _ => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InsufficientAllowance.error_code(), 2001);
        assert_eq!(LedgerError::InsufficientBalance.error_code(), 2002);
        assert_eq!(LedgerError::InvalidTokenAccount.error_code(), 2007);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(LedgerError::InsufficientBalance.category(), "Transfer");
        assert_eq!(LedgerError::ZeroAmount.category(), "Minting");
        assert_eq!(LedgerError::InvalidMint.category(), "Account Validation");
    }
}
