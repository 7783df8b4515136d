use anchor_lang::prelude::*;

#[event]
pub struct PollInitialized {
    pub poll_id: u64,
    pub poll_start: i64,
    pub poll_end: i64,
}

#[event]
pub struct CandidateRegistered {
    pub poll_id: u64,
    pub candidate_name: String,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate_name: String,
    /// Tally after this vote
    pub candidate_votes: u64,
    pub timestamp: i64,
}
