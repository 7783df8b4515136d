use std::collections::HashMap;

use anchor_lang::prelude::*;

/// Account data keyed by derived address.
///
/// `create` and `update` are the only writes. Neither may overwrite
/// something it was not asked to: creating at an occupied address and
/// updating an absent one both fail.
pub trait AccountStore {
    fn get(&self, address: &Pubkey) -> Option<&[u8]>;

    fn create(&mut self, address: Pubkey, data: Vec<u8>) -> Result<()>;

    fn update(&mut self, address: &Pubkey, data: Vec<u8>) -> Result<()>;

    fn contains(&self, address: &Pubkey) -> bool {
        self.get(address).is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    accounts: HashMap<Pubkey, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, address: &Pubkey) -> Option<&[u8]> {
        self.accounts.get(address).map(Vec::as_slice)
    }

    fn create(&mut self, address: Pubkey, data: Vec<u8>) -> Result<()> {
        if self.accounts.contains_key(&address) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        self.accounts.insert(address, data);
        Ok(())
    }

    fn update(&mut self, address: &Pubkey, data: Vec<u8>) -> Result<()> {
        match self.accounts.get_mut(address) {
            Some(slot) => {
                *slot = data;
                Ok(())
            }
            None => Err(ProgramError::UninitializedAccount.into()),
        }
    }
}
