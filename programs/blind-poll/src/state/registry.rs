use anchor_lang::prelude::*;

use crate::{error::PollError, state::Poll};

/// Global registry configuration
/// Its PDA is the identity creators grant reward allowances to.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Who initialized the registry
    pub admin: Pubkey,

    /// Mint of the reward ledger this registry pays out of
    pub reward_mint: Pubkey,

    /// Last poll id handed out (ids start at 1)
    pub poll_count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Registry {
    /// Id the next `allocate_poll_id` call will return
    pub fn next_poll_id(&self) -> u64 {
        self.poll_count.saturating_add(1)
    }

    pub fn allocate_poll_id(&mut self) -> Result<u64> {
        self.poll_count = self
            .poll_count
            .checked_add(1)
            .ok_or(PollError::MathOverflow)?;
        Ok(self.poll_count)
    }
}

/// Creator -> last poll id index
/// Lets `create_poll` find the creator's open poll without scanning.
#[account]
#[derive(InitSpace, Default)]
pub struct CreatorIndex {
    pub creator: Pubkey,

    /// Most recent poll opened by `creator`, 0 if none
    pub last_poll_id: u64,

    /// Number of polls opened by `creator`
    pub polls_created: u64,

    pub bump: u8,
}

impl CreatorIndex {
    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }

    /// Claim a zeroed index handed out by `init_if_needed`
    pub fn init_if_new(&mut self, creator: Pubkey, bump: u8) {
        if !self.is_initialized() {
            self.creator = creator;
            self.bump = bump;
        }
    }

    /// A creator holds at most one open poll, and it is always the last one.
    pub fn ensure_can_create(&self, last_poll: Option<&Poll>) -> Result<()> {
        if let Some(poll) = last_poll {
            require!(!poll.is_open(), PollError::AlreadyOpen);
        }
        Ok(())
    }

    pub fn record_poll(&mut self, poll_id: u64) -> Result<()> {
        self.last_poll_id = poll_id;
        self.polls_created = self
            .polls_created
            .checked_add(1)
            .ok_or(PollError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PollStatus;
    use anchor_lang::error::Error;

    fn mock_poll(status: PollStatus) -> Poll {
        Poll {
            poll_id: 1,
            creator: Pubkey::default(),
            subject: vec![],
            questions: vec![],
            reward_per_answer: 1,
            max_answers: 10,
            status,
            sealed_count: 0,
            revealed_count: 0,
            created_at: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_poll_ids_start_at_one() {
        let mut registry = Registry {
            admin: Pubkey::default(),
            reward_mint: Pubkey::default(),
            poll_count: 0,
            bump: 0,
        };

        assert_eq!(registry.next_poll_id(), 1);
        assert_eq!(registry.allocate_poll_id().unwrap(), 1);
        assert_eq!(registry.next_poll_id(), 2);
        assert_eq!(registry.allocate_poll_id().unwrap(), 2);
    }

    #[test]
    fn test_open_poll_blocks_creation() {
        let index = CreatorIndex {
            creator: Pubkey::new_unique(),
            last_poll_id: 1,
            polls_created: 1,
            bump: 0,
        };

        let open = mock_poll(PollStatus::Open);
        let closed = mock_poll(PollStatus::Closed);

        assert_eq!(
            index.ensure_can_create(Some(&open)).unwrap_err(),
            Error::from(PollError::AlreadyOpen)
        );
        assert!(index.ensure_can_create(Some(&closed)).is_ok());
        assert!(index.ensure_can_create(None).is_ok());
    }

    #[test]
    fn test_record_poll_tracks_latest() {
        let mut index = CreatorIndex {
            creator: Pubkey::default(),
            last_poll_id: 0,
            polls_created: 0,
            bump: 0,
        };
        assert!(!index.is_initialized());

        let creator = Pubkey::new_unique();
        index.init_if_new(creator, 200);
        index.init_if_new(Pubkey::new_unique(), 100);
        assert_eq!(index.creator, creator);
        assert_eq!(index.bump, 200);

        index.record_poll(3).unwrap();
        index.record_poll(7).unwrap();

        assert_eq!(index.last_poll_id, 7);
        assert_eq!(index.polls_created, 2);
    }
}
