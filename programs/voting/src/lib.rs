#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

// Import our modules
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(not(target_os = "solana"))]
pub mod host;

// Import instruction handlers
pub use instructions::*;

declare_id!("coUnmi3oBUtwtd9fjeAvSsJssXh5A5xyPbhpewyzRVF");

#[program]
pub mod voting {
    use super::*;

    /// Create a poll with a description and an inclusive voting window.
    /// The poll account is derived from `poll_id`, so each id can be used once.
    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        description: String,
        poll_start: i64,
        poll_end: i64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_poll(poll_id, description, poll_start, poll_end, &ctx.bumps)
    }

    /// Register a candidate under an existing poll with zero votes
    pub fn initialize_candidate(
        ctx: Context<InitializeCandidate>,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_candidate(candidate_name, poll_id, &ctx.bumps)
    }

    /// Add one vote to a candidate while its poll is open
    pub fn vote(ctx: Context<Vote>, candidate_name: String, poll_id: u64) -> Result<()> {
        ctx.accounts.vote(candidate_name, poll_id)
    }
}
