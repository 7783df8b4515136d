// Limits on caller-supplied text

// Poll descriptions are stored inline in the poll account
pub const MAX_DESCRIPTION_LENGTH: usize = 280;

// Candidate names are used verbatim as a PDA seed, so they share the
// runtime's per-seed limit
pub const MAX_CANDIDATE_NAME_LENGTH: usize = 32;

// Anchor discriminator size (8 bytes)
pub const DISCRIMINATOR_SIZE: usize = 8;
