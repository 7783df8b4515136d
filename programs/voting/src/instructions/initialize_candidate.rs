use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::VotingError,
    events::CandidateRegistered,
    state::{Candidate, Poll},
};

// Accounts needed for registering a candidate under an existing poll
#[derive(Accounts)]
#[instruction(candidate_name: String, poll_id: u64)]
pub struct InitializeCandidate<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: address is pinned by the seeds; existence and layout are
    /// checked in the handler so a missing poll reports PollNotFound
    #[account(
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,

    // One candidate PDA per (poll, name) - registering a name twice fails here
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Candidate::INIT_SPACE,
        seeds = [poll_id.to_le_bytes().as_ref(), candidate_name.as_bytes()],
        bump
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeCandidate<'info> {
    pub fn initialize_candidate(
        &mut self,
        candidate_name: String,
        poll_id: u64,
        bumps: &InitializeCandidateBumps,
    ) -> Result<()> {
        // Read only; an account we don't own can't be one of our polls
        require_keys_eq!(*self.poll.owner, crate::ID, VotingError::PollNotFound);
        let poll = Poll::load(&self.poll.try_borrow_data()?)?;

        self.candidate
            .set_inner(Candidate::new(poll.poll_id, candidate_name, bumps.candidate)?);

        msg!(
            "Candidate {} added to poll {}",
            self.candidate.candidate_name,
            poll_id
        );

        emit!(CandidateRegistered {
            poll_id,
            candidate_name: self.candidate.candidate_name.clone(),
        });

        Ok(())
    }
}
