use anchor_lang::prelude::*;
use crate::{
    error::VotingError,
    events::VoteCast,
    state::{Candidate, Poll},
};

// Accounts needed for casting a vote
#[derive(Accounts)]
#[instruction(candidate_name: String, poll_id: u64)]
pub struct Vote<'info> {
    pub voter: Signer<'info>,

    /// CHECK: address is pinned by the seeds; supplies the voting window and
    /// is never written. Existence is checked in the handler
    #[account(
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,

    /// CHECK: address is pinned by the seeds; the only account this
    /// instruction modifies. Existence is checked in the handler
    #[account(
        mut,
        seeds = [poll_id.to_le_bytes().as_ref(), candidate_name.as_bytes()],
        bump
    )]
    pub candidate: UncheckedAccount<'info>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, candidate_name: String, poll_id: u64) -> Result<()> {
        // Trusted cluster time, never a caller-supplied value
        let now = Clock::get()?.unix_timestamp;

        require_keys_eq!(*self.poll.owner, crate::ID, VotingError::PollNotFound);
        let poll = Poll::load(&self.poll.try_borrow_data()?)?;

        require_keys_eq!(*self.candidate.owner, crate::ID, VotingError::CandidateNotFound);
        let mut candidate = Candidate::load(&self.candidate.try_borrow_data()?)?;

        poll.check_voting_window(now)?;
        let candidate_votes = candidate.record_vote()?;

        // Same length as before, so the write always fits
        let mut data = self.candidate.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        candidate.try_serialize(&mut writer)?;

        msg!("Voted for candidate: {}", candidate_name);
        msg!("Votes: {}", candidate_votes);

        emit!(VoteCast {
            poll_id,
            candidate_name,
            candidate_votes,
            timestamp: now,
        });

        Ok(())
    }
}
