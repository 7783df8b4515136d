use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError};

// One poll and its voting window
// Lives at the address derived from poll_id alone, so at most one poll per id
// can ever exist. Never modified after creation.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Poll {
    // Caller-chosen identifier, the poll's logical key
    pub poll_id: u64,

    #[max_len(280)]
    pub description: String,

    // Unix timestamp (seconds) of the first second votes are accepted
    pub poll_start: i64,

    // Unix timestamp (seconds) of the last second votes are accepted
    pub poll_end: i64,

    // Bump seed for PDA derivation
    pub bump: u8,
}

// One candidate registered under a poll, with its running tally
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Candidate {
    // The poll this candidate belongs to
    pub poll_id: u64,

    #[max_len(32)]
    pub candidate_name: String,

    // Only ever incremented, one per successful vote
    pub candidate_votes: u64,

    // Bump seed for PDA derivation
    pub bump: u8,
}

impl Poll {
    // Validates the arguments of a new poll and builds the record
    // Timestamps are stored exactly as supplied
    pub fn new(
        poll_id: u64,
        description: String,
        poll_start: i64,
        poll_end: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            description.len() <= MAX_DESCRIPTION_LENGTH,
            VotingError::DescriptionTooLong
        );
        Self::validate_window(poll_start, poll_end)?;

        Ok(Self {
            poll_id,
            description,
            poll_start,
            poll_end,
            bump,
        })
    }

    // The end must be a real (positive) timestamp strictly after the start
    pub fn validate_window(poll_start: i64, poll_end: i64) -> Result<()> {
        require!(poll_end > 0, VotingError::InvalidPollWindow);
        require!(poll_end > poll_start, VotingError::InvalidPollWindow);
        Ok(())
    }

    // Seeds: [poll_id as little-endian u64]
    pub fn address(poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[poll_id.to_le_bytes().as_ref()], &crate::ID)
    }

    // Empty data means nothing was ever created at the poll's address
    pub fn load(data: &[u8]) -> Result<Self> {
        require!(!data.is_empty(), VotingError::PollNotFound);
        Self::try_deserialize(&mut &data[..])
    }

    pub fn is_voting_open(&self, now: i64) -> bool {
        self.check_voting_window(now).is_ok()
    }

    // Both ends of the window are inclusive
    pub fn check_voting_window(&self, now: i64) -> Result<()> {
        if now < self.poll_start {
            return Err(VotingError::PollNotActive.into());
        }
        if now > self.poll_end {
            return Err(VotingError::PollEnded.into());
        }
        Ok(())
    }
}

impl Candidate {
    pub fn new(poll_id: u64, candidate_name: String, bump: u8) -> Result<Self> {
        Self::validate_name(&candidate_name)?;

        Ok(Self {
            poll_id,
            candidate_name,
            candidate_votes: 0,
            bump,
        })
    }

    pub fn validate_name(candidate_name: &str) -> Result<()> {
        require!(
            candidate_name.len() <= MAX_CANDIDATE_NAME_LENGTH,
            VotingError::CandidateNameTooLong
        );
        Ok(())
    }

    // Seeds: [poll_id as little-endian u64, raw candidate name bytes]
    pub fn address(poll_id: u64, candidate_name: &str) -> Result<(Pubkey, u8)> {
        Self::validate_name(candidate_name)?;
        Pubkey::try_find_program_address(
            &[poll_id.to_le_bytes().as_ref(), candidate_name.as_bytes()],
            &crate::ID,
        )
        .ok_or_else(|| VotingError::CandidateNameTooLong.into())
    }

    pub fn load(data: &[u8]) -> Result<Self> {
        require!(!data.is_empty(), VotingError::CandidateNotFound);
        Self::try_deserialize(&mut &data[..])
    }

    // Adds exactly one vote and returns the new tally
    pub fn record_vote(&mut self) -> Result<u64> {
        self.candidate_votes = self
            .candidate_votes
            .checked_add(1)
            .ok_or(VotingError::VoteCountOverflow)?;
        Ok(self.candidate_votes)
    }
}
