use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::PollError,
    state::{commitment_of, CreatorIndex, Registry, RevealedAnswer, SealedSubmission},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum PollStatus {
    /// Accepting sealed answers
    Open,
    /// Sealed answers frozen, reveals allowed
    Closed,
}

/// A poll and its answer counters
/// `subject` and `questions` are opaque to the program and returned verbatim.
#[account]
#[derive(InitSpace, Debug)]
pub struct Poll {
    /// Global id, assigned at creation
    pub poll_id: u64,

    /// Who created this poll and funds its rewards
    pub creator: Pubkey,

    #[max_len(128)] // MAX_SUBJECT_LEN
    pub subject: Vec<u8>,

    #[max_len(768)] // MAX_QUESTIONS_LEN
    pub questions: Vec<u8>,

    /// Reward units paid for each valid reveal
    pub reward_per_answer: u64,

    /// Cap on accepted sealed answers
    pub max_answers: u64,

    pub status: PollStatus,

    pub sealed_count: u64,

    pub revealed_count: u64,

    pub created_at: i64,

    pub bump: u8,
}

/// Poll record as returned by `query_poll_by_id`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PollDetails {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub subject: Vec<u8>,
    pub questions: Vec<u8>,
    pub reward_per_answer: u64,
    pub max_answers: u64,
    pub status: PollStatus,
    pub sealed_count: u64,
    pub revealed_count: u64,
}

/// Creator-supplied part of a new poll
#[derive(Clone, Debug)]
pub struct PollParams {
    pub subject: Vec<u8>,
    pub questions: Vec<u8>,
    pub reward_per_answer: u64,
    pub max_answers: u64,
}

impl Poll {
    /// Build a new open poll at the next global id.
    /// `last_poll` is the creator's most recent poll, read through `index`.
    pub fn open(
        registry: &mut Registry,
        index: &mut CreatorIndex,
        last_poll: Option<&Poll>,
        creator: Pubkey,
        params: PollParams,
        created_at: i64,
        bump: u8,
    ) -> Result<Poll> {
        Self::validate_params(&params.subject, &params.questions, params.max_answers)?;
        Self::max_payout(params.reward_per_answer, params.max_answers)?;
        index.ensure_can_create(last_poll)?;

        let poll_id = registry.allocate_poll_id()?;
        index.record_poll(poll_id)?;

        Ok(Poll {
            poll_id,
            creator,
            subject: params.subject,
            questions: params.questions,
            reward_per_answer: params.reward_per_answer,
            max_answers: params.max_answers,
            status: PollStatus::Open,
            sealed_count: 0,
            revealed_count: 0,
            created_at,
            bump,
        })
    }

    /// Validate creation parameters. Payload contents are never inspected.
    pub fn validate_params(subject: &[u8], questions: &[u8], max_answers: u64) -> Result<()> {
        require!(max_answers > 0, PollError::InvalidMaxAnswers);

        if subject.len() > MAX_SUBJECT_LEN || questions.len() > MAX_QUESTIONS_LEN {
            msg!(
                "Payload too large: subject={} (max {}), questions={} (max {})",
                subject.len(),
                MAX_SUBJECT_LEN,
                questions.len(),
                MAX_QUESTIONS_LEN
            );
            return Err(PollError::PayloadTooLarge.into());
        }

        Ok(())
    }

    /// Worst-case payout, the size of the allowance granted at creation
    pub fn max_payout(reward_per_answer: u64, max_answers: u64) -> Result<u64> {
        reward_per_answer
            .checked_mul(max_answers)
            .ok_or(PollError::RewardOverflow.into())
    }

    /// Registry allowance after topping `current` up by this poll's worst case
    pub fn topped_up_allowance(&self, current: u64) -> Result<u64> {
        let max_payout = Self::max_payout(self.reward_per_answer, self.max_answers)?;
        current
            .checked_add(max_payout)
            .ok_or(PollError::RewardOverflow.into())
    }

    pub fn is_open(&self) -> bool {
        self.status == PollStatus::Open
    }

    /// Count a new sealed answer.
    /// Duplicates, closed polls and a full poll share one rejection.
    pub fn accept_sealed(&mut self, already_submitted: bool) -> Result<()> {
        require!(
            self.is_open() && !already_submitted && self.sealed_count < self.max_answers,
            PollError::SubmissionRejected
        );

        self.sealed_count = self
            .sealed_count
            .checked_add(1)
            .ok_or(PollError::MathOverflow)?;
        Ok(())
    }

    /// Record `submitter`'s commitment in `sealed`, a fresh or existing record.
    pub fn seal_answer(
        &mut self,
        sealed: &mut SealedSubmission,
        submitter: Pubkey,
        commitment: [u8; COMMITMENT_LEN],
        submitted_at: i64,
        bump: u8,
    ) -> Result<()> {
        self.accept_sealed(sealed.is_recorded())?;

        *sealed = SealedSubmission {
            poll_id: self.poll_id,
            submitter,
            commitment,
            revealed: false,
            submitted_at,
            bump,
        };
        Ok(())
    }

    pub fn close(&mut self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, PollError::NotPollCreator);
        require!(self.is_open(), PollError::PollAlreadyClosed);

        self.status = PollStatus::Closed;
        Ok(())
    }

    /// Every check a reveal must pass before any reward moves.
    pub fn check_reveal(
        &self,
        sealed: Option<&SealedSubmission>,
        commitment: &[u8; COMMITMENT_LEN],
        plaintext: &[u8],
        answer_index: u64,
    ) -> Result<()> {
        require!(!self.is_open(), PollError::PollNotClosed);

        let sealed = sealed.ok_or(PollError::NoSealedSubmission)?;
        require!(!sealed.revealed, PollError::AlreadyRevealed);

        // The supplied commitment must be the caller's own, and the plaintext its preimage
        require!(
            *commitment == sealed.commitment && commitment_of(plaintext) == sealed.commitment,
            PollError::HashMismatch
        );

        require!(
            answer_index == self.revealed_count,
            PollError::RevealOrderMismatch
        );

        require!(plaintext.len() <= MAX_ANSWER_LEN, PollError::PayloadTooLarge);

        Ok(())
    }

    /// Take the next reveal slot for a checked reveal. The reward has
    /// already been paid when this runs.
    pub fn apply_reveal(
        &mut self,
        sealed: &mut SealedSubmission,
        revealer: Pubkey,
        plaintext: Vec<u8>,
        bump: u8,
    ) -> Result<RevealedAnswer> {
        let index = self.record_reveal()?;
        sealed.revealed = true;

        Ok(RevealedAnswer {
            poll_id: self.poll_id,
            index,
            revealer,
            plaintext,
            bump,
        })
    }

    /// Claim the next reveal slot and return its index
    pub fn record_reveal(&mut self) -> Result<u64> {
        let index = self.revealed_count;
        self.revealed_count = index.checked_add(1).ok_or(PollError::MathOverflow)?;
        Ok(index)
    }

    pub fn has_answer(&self, index: u64) -> bool {
        index < self.revealed_count
    }

    pub fn details(&self) -> PollDetails {
        PollDetails {
            poll_id: self.poll_id,
            creator: self.creator,
            subject: self.subject.clone(),
            questions: self.questions.clone(),
            reward_per_answer: self.reward_per_answer,
            max_answers: self.max_answers,
            status: self.status,
            sealed_count: self.sealed_count,
            revealed_count: self.revealed_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn mock_poll(creator: Pubkey, max_answers: u64) -> Poll {
        Poll {
            poll_id: 1,
            creator,
            subject: b"Your Favorite dApp".to_vec(),
            questions: b"[\"Gaming\",\"Forecast\"]".to_vec(),
            reward_per_answer: 1,
            max_answers,
            status: PollStatus::Open,
            sealed_count: 0,
            revealed_count: 0,
            created_at: 1_700_000_000,
            bump: 255,
        }
    }

    fn mock_sealed(plaintext: &[u8]) -> SealedSubmission {
        SealedSubmission {
            poll_id: 1,
            submitter: Pubkey::new_unique(),
            commitment: commitment_of(plaintext),
            revealed: false,
            submitted_at: 1_700_000_100,
            bump: 254,
        }
    }

    #[test]
    fn test_validate_params() {
        assert!(Poll::validate_params(b"subject", b"questions", 1).is_ok());
        assert!(Poll::validate_params(&[], &[], 1).is_ok());

        assert_eq!(
            Poll::validate_params(b"subject", b"questions", 0).unwrap_err(),
            Error::from(PollError::InvalidMaxAnswers)
        );

        let subject = vec![0u8; MAX_SUBJECT_LEN + 1];
        assert_eq!(
            Poll::validate_params(&subject, b"questions", 1).unwrap_err(),
            Error::from(PollError::PayloadTooLarge)
        );

        let questions = vec![0u8; MAX_QUESTIONS_LEN];
        assert!(Poll::validate_params(b"subject", &questions, 1).is_ok());
    }

    #[test]
    fn test_max_payout() {
        assert_eq!(Poll::max_payout(1, 100).unwrap(), 100);
        assert_eq!(Poll::max_payout(0, 100).unwrap(), 0);
        assert_eq!(
            Poll::max_payout(u64::MAX, 2).unwrap_err(),
            Error::from(PollError::RewardOverflow)
        );
    }

    #[test]
    fn test_sealed_answers_stop_at_cap() {
        let mut poll = mock_poll(Pubkey::new_unique(), 1);

        assert!(poll.accept_sealed(false).is_ok());
        assert_eq!(poll.sealed_count, 1);

        assert_eq!(
            poll.accept_sealed(false).unwrap_err(),
            Error::from(PollError::SubmissionRejected)
        );
        assert_eq!(poll.sealed_count, 1);
    }

    #[test]
    fn test_duplicate_and_closed_submissions_rejected() {
        let creator = Pubkey::new_unique();
        let mut poll = mock_poll(creator, 10);

        assert_eq!(
            poll.accept_sealed(true).unwrap_err(),
            Error::from(PollError::SubmissionRejected)
        );

        poll.close(&creator).unwrap();
        assert_eq!(
            poll.accept_sealed(false).unwrap_err(),
            Error::from(PollError::SubmissionRejected)
        );
        assert_eq!(poll.sealed_count, 0);
    }

    #[test]
    fn test_close_is_creator_only_and_once() {
        let creator = Pubkey::new_unique();
        let mut poll = mock_poll(creator, 10);

        assert_eq!(
            poll.close(&Pubkey::new_unique()).unwrap_err(),
            Error::from(PollError::NotPollCreator)
        );
        assert!(poll.is_open());

        assert!(poll.close(&creator).is_ok());
        assert_eq!(poll.status, PollStatus::Closed);

        assert_eq!(
            poll.close(&creator).unwrap_err(),
            Error::from(PollError::PollAlreadyClosed)
        );
        assert_eq!(poll.status, PollStatus::Closed);
    }

    #[test]
    fn test_reveal_requires_closed_poll() {
        let creator = Pubkey::new_unique();
        let mut poll = mock_poll(creator, 10);
        let answer = b"[0,1,2]";
        let sealed = mock_sealed(answer);

        assert_eq!(
            poll.check_reveal(Some(&sealed), &sealed.commitment, answer, 0)
                .unwrap_err(),
            Error::from(PollError::PollNotClosed)
        );

        poll.close(&creator).unwrap();
        assert!(poll
            .check_reveal(Some(&sealed), &sealed.commitment, answer, 0)
            .is_ok());
    }

    #[test]
    fn test_reveal_rejections() {
        let creator = Pubkey::new_unique();
        let mut poll = mock_poll(creator, 10);
        poll.close(&creator).unwrap();

        let answer = b"[0,1,2]";
        let mut sealed = mock_sealed(answer);
        let commitment = sealed.commitment;

        assert_eq!(
            poll.check_reveal(None, &commitment, answer, 0).unwrap_err(),
            Error::from(PollError::NoSealedSubmission)
        );

        // right preimage, someone else's commitment
        let other = commitment_of(b"[2,1,0]");
        assert_eq!(
            poll.check_reveal(Some(&sealed), &other, answer, 0)
                .unwrap_err(),
            Error::from(PollError::HashMismatch)
        );

        // right commitment, wrong preimage
        assert_eq!(
            poll.check_reveal(Some(&sealed), &commitment, b"[2,1,0]", 0)
                .unwrap_err(),
            Error::from(PollError::HashMismatch)
        );

        assert_eq!(
            poll.check_reveal(Some(&sealed), &commitment, answer, 1)
                .unwrap_err(),
            Error::from(PollError::RevealOrderMismatch)
        );

        sealed.revealed = true;
        assert_eq!(
            poll.check_reveal(Some(&sealed), &commitment, answer, 0)
                .unwrap_err(),
            Error::from(PollError::AlreadyRevealed)
        );
    }

    #[test]
    fn test_oversized_reveal_checked_after_status() {
        let creator = Pubkey::new_unique();
        let mut poll = mock_poll(creator, 10);
        let oversized = vec![7u8; MAX_ANSWER_LEN + 1];
        let sealed = mock_sealed(&oversized);

        assert_eq!(
            poll.check_reveal(Some(&sealed), &sealed.commitment, &oversized, 0)
                .unwrap_err(),
            Error::from(PollError::PollNotClosed)
        );

        poll.close(&creator).unwrap();
        assert_eq!(
            poll.check_reveal(Some(&sealed), &sealed.commitment, &oversized, 0)
                .unwrap_err(),
            Error::from(PollError::PayloadTooLarge)
        );
    }

    #[test]
    fn test_apply_reveal_marks_submission() {
        let creator = Pubkey::new_unique();
        let mut poll = mock_poll(creator, 10);
        poll.close(&creator).unwrap();

        let answer = b"[0,1,2]";
        let mut sealed = mock_sealed(answer);
        let revealer = sealed.submitter;

        poll.check_reveal(Some(&sealed), &sealed.commitment, answer, 0)
            .unwrap();
        let revealed = poll
            .apply_reveal(&mut sealed, revealer, answer.to_vec(), 250)
            .unwrap();

        assert!(sealed.revealed);
        assert_eq!(poll.revealed_count, 1);
        assert_eq!(revealed.poll_id, poll.poll_id);
        assert_eq!(revealed.index, 0);
        assert_eq!(revealed.revealer, revealer);
        assert_eq!(revealed.plaintext, answer.to_vec());

        assert_eq!(
            poll.check_reveal(Some(&sealed), &sealed.commitment, answer, 1)
                .unwrap_err(),
            Error::from(PollError::AlreadyRevealed)
        );
    }

    #[test]
    fn test_seal_answer_fills_fresh_record() {
        let mut poll = mock_poll(Pubkey::new_unique(), 10);
        let submitter = Pubkey::new_unique();
        let commitment = commitment_of(b"[1]");

        // what init_if_needed hands a first-time submitter
        let mut sealed = SealedSubmission::default();
        poll.seal_answer(&mut sealed, submitter, commitment, 1_700_000_200, 249)
            .unwrap();

        assert!(sealed.is_recorded());
        assert_eq!(sealed.poll_id, poll.poll_id);
        assert_eq!(sealed.submitter, submitter);
        assert_eq!(sealed.commitment, commitment);
        assert!(!sealed.revealed);
        assert_eq!(poll.sealed_count, 1);

        // the same record again is a duplicate
        let err = poll
            .seal_answer(&mut sealed, submitter, commitment_of(b"[2]"), 0, 249)
            .unwrap_err();
        assert_eq!(err, Error::from(PollError::SubmissionRejected));
        assert_eq!(sealed.commitment, commitment);
        assert_eq!(poll.sealed_count, 1);
    }

    #[test]
    fn test_open_allocates_and_indexes() {
        let creator = Pubkey::new_unique();
        let mut registry = Registry {
            admin: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            poll_count: 4,
            bump: 255,
        };
        let mut index = CreatorIndex::default();
        index.init_if_new(creator, 254);

        let params = PollParams {
            subject: b"subject".to_vec(),
            questions: b"questions".to_vec(),
            reward_per_answer: 2,
            max_answers: 3,
        };
        let poll = Poll::open(&mut registry, &mut index, None, creator, params.clone(), 9, 253)
            .unwrap();

        assert_eq!(poll.poll_id, 5);
        assert_eq!(poll.creator, creator);
        assert_eq!(poll.status, PollStatus::Open);
        assert_eq!(poll.sealed_count, 0);
        assert_eq!(index.last_poll_id, 5);
        assert_eq!(poll.topped_up_allowance(10).unwrap(), 16);

        // still open: nothing is allocated
        let err = Poll::open(&mut registry, &mut index, Some(&poll), creator, params, 10, 252)
            .unwrap_err();
        assert_eq!(err, Error::from(PollError::AlreadyOpen));
        assert_eq!(registry.poll_count, 5);
        assert_eq!(index.polls_created, 1);
    }

    #[test]
    fn test_topped_up_allowance_overflow() {
        let mut poll = mock_poll(Pubkey::new_unique(), 2);
        poll.reward_per_answer = 10;

        assert_eq!(
            poll.topped_up_allowance(u64::MAX - 5).unwrap_err(),
            Error::from(PollError::RewardOverflow)
        );
    }

    #[test]
    fn test_record_reveal_assigns_sequential_indexes() {
        let mut poll = mock_poll(Pubkey::new_unique(), 10);

        assert!(!poll.has_answer(0));
        assert_eq!(poll.record_reveal().unwrap(), 0);
        assert_eq!(poll.record_reveal().unwrap(), 1);

        assert_eq!(poll.revealed_count, 2);
        assert!(poll.has_answer(1));
        assert!(!poll.has_answer(2));
    }

    #[test]
    fn test_details_echo_payloads() {
        let poll = mock_poll(Pubkey::new_unique(), 100);
        let details = poll.details();

        assert_eq!(details.poll_id, 1);
        assert_eq!(details.subject, poll.subject);
        assert_eq!(details.questions, poll.questions);
        assert_eq!(details.reward_per_answer, 1);
        assert_eq!(details.max_answers, 100);
        assert_eq!(details.status, PollStatus::Open);
    }
}
