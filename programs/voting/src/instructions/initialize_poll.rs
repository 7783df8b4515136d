use anchor_lang::prelude::*;
use crate::{constants::*, events::PollInitialized, state::Poll};

// Accounts needed for creating a new poll
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    // Pays for the poll account
    #[account(mut)]
    pub payer: Signer<'info>,

    // The poll account (PDA) - creation fails if this id is already taken
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Poll::INIT_SPACE,
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePoll<'info> {
    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        description: String,
        poll_start: i64,
        poll_end: i64,
        bumps: &InitializePollBumps,
    ) -> Result<()> {
        self.poll
            .set_inner(Poll::new(poll_id, description, poll_start, poll_end, bumps.poll)?);

        msg!("Poll {} initialized", poll_id);
        msg!("Voting window: {} to {}", poll_start, poll_end);

        emit!(PollInitialized {
            poll_id,
            poll_start,
            poll_end,
        });

        Ok(())
    }
}
