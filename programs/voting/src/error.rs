use anchor_lang::prelude::*;

// Custom error types for the voting program
#[error_code]
pub enum VotingError {
    #[msg("Poll end must be a positive timestamp after the poll start")]
    InvalidPollWindow,

    #[msg("Description is too long (maximum 280 bytes)")]
    DescriptionTooLong,

    #[msg("Candidate name is too long (maximum 32 bytes)")]
    CandidateNameTooLong,

    #[msg("A poll with this id already exists")]
    DuplicatePoll,

    #[msg("This candidate is already registered for the poll")]
    DuplicateCandidate,

    #[msg("No poll exists with this id")]
    PollNotFound,

    #[msg("No candidate with this name is registered for the poll")]
    CandidateNotFound,

    #[msg("Poll has not started yet")]
    PollNotActive,

    #[msg("Poll has ended")]
    PollEnded,

    #[msg("Candidate vote count overflowed")]
    VoteCountOverflow,
}
