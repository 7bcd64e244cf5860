use anchor_lang::prelude::*;

/// Custom error types for the poll registry
#[error_code]
pub enum PollError {
    // Lifecycle errors callers match on
    #[msg("Creator already has an open poll")]
    AlreadyOpen,

    #[msg("Sealed answer rejected: duplicate submission, poll closed or answer cap reached")]
    SubmissionRejected,

    #[msg("Revealed answer does not match the sealed commitment")]
    HashMismatch,

    #[msg("Poll does not exist")]
    NotFound,

    // Reveal errors
    #[msg("Answers can only be revealed after the poll is closed")]
    PollNotClosed,

    #[msg("Caller has no sealed answer on this poll")]
    NoSealedSubmission,

    #[msg("Answer has already been revealed")]
    AlreadyRevealed,

    #[msg("Answer index does not match the next reveal slot")]
    RevealOrderMismatch,

    // Authorization errors
    #[msg("Only the poll creator can perform this action")]
    NotPollCreator,

    #[msg("Poll is already closed")]
    PollAlreadyClosed,

    #[msg("Creator account does not match the poll")]
    CreatorMismatch,

    // Parameter errors
    #[msg("A poll must accept at least one answer")]
    InvalidMaxAnswers,

    #[msg("Payload exceeds the maximum size")]
    PayloadTooLarge,

    #[msg("Maximum reward payout overflows")]
    RewardOverflow,

    #[msg("Reward mint does not match the registry")]
    InvalidRewardMint,

    #[msg("Mathematical overflow in poll accounting")]
    MathOverflow,
}

impl PollError {
    /// Stable code handed to off-chain callers
    pub fn error_code(&self) -> u32 {
        match self {
            PollError::AlreadyOpen => 1001,
            PollError::SubmissionRejected => 1002,
            PollError::HashMismatch => 1003,
            PollError::NotFound => 1004,

            PollError::PollNotClosed => 1101,
            PollError::NoSealedSubmission => 1102,
            PollError::AlreadyRevealed => 1103,
            PollError::RevealOrderMismatch => 1104,

            PollError::NotPollCreator => 1201,
            PollError::PollAlreadyClosed => 1202,
            PollError::CreatorMismatch => 1203,

            PollError::InvalidMaxAnswers => 1301,
            PollError::PayloadTooLarge => 1302,
            PollError::RewardOverflow => 1303,
            PollError::InvalidRewardMint => 1304,
            PollError::MathOverflow => 1305,
        }
    }

    /// Get human-readable error category
    pub fn category(&self) -> &'static str {
        match self.error_code() {
            1000..=1099 => "Poll Lifecycle",
            1100..=1199 => "Reveal",
            1200..=1299 => "Authorization",
            1300..=1399 => "Parameters",
            _ => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PollError::AlreadyOpen.error_code(), 1001);
        assert_eq!(PollError::SubmissionRejected.error_code(), 1002);
        assert_eq!(PollError::HashMismatch.error_code(), 1003);
        assert_eq!(PollError::NotFound.error_code(), 1004);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(PollError::AlreadyOpen.category(), "Poll Lifecycle");
        assert_eq!(PollError::PollNotClosed.category(), "Reveal");
        assert_eq!(PollError::NoSealedSubmission.category(), "Reveal");
        assert_eq!(PollError::NotPollCreator.category(), "Authorization");
        assert_eq!(PollError::PayloadTooLarge.category(), "Parameters");
    }
}
