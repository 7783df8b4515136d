//! Native execution of the voting rules outside the Solana runtime.
//!
//! The runtime's account table is replaced by an injected [`AccountStore`],
//! and the cluster clock by a timestamp held in the [`Ledger`]. Records are
//! kept in the same byte layout the program writes on chain, at the same
//! derived addresses.

mod ledger;
mod processor;
mod store;

pub use ledger::Ledger;
pub use processor::{
    process_initialize_candidate, process_initialize_poll, process_instruction, process_vote,
    VotingInstruction,
};
pub use store::{AccountStore, MemoryStore};
