use crate::custom_types::custom_types::NftSerialized;
use crate::error::NftError;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use types::account::AccountHash;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Nft {
    pub owner: AccountHash,
    pub owners: BTreeMap<u64, AccountHash>,
    pub holdings: BTreeMap<AccountHash, BTreeSet<u64>>,
    pub approvals: BTreeMap<u64, AccountHash>,
    pub uris: BTreeMap<u64, String>,
    pub next_id: u64,
}

impl Nft {
    pub fn new(owner: AccountHash) -> Nft {
        Nft {
            owner,
            owners: BTreeMap::new(),
            holdings: BTreeMap::new(),
            approvals: BTreeMap::new(),
            uris: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn mint(
        &mut self,
        to: AccountHash,
        uri: String,
        caller: AccountHash,
    ) -> Result<u64, NftError> {
        if caller != self.owner {
            return Err(NftError::NotOwner);
        }
        let token_id = self.next_id;
        self.next_id += 1;
        self.owners.insert(token_id, to);
        self.uris.insert(token_id, uri);
        self.holdings
            .entry(to)
            .or_insert_with(BTreeSet::new)
            .insert(token_id);
        Ok(token_id)
    }

    pub fn owner_of(&self, token_id: u64) -> Result<AccountHash, NftError> {
        match self.owners.get(&token_id) {
            Some(owner) => Ok(*owner),
            None => Err(NftError::TokenNotFound),
        }
    }

    pub fn token_uri(&self, token_id: u64) -> Result<&str, NftError> {
        match self.uris.get(&token_id) {
            Some(uri) => Ok(uri),
            None => Err(NftError::TokenNotFound),
        }
    }

    pub fn approve(
        &mut self,
        token_id: u64,
        operator: AccountHash,
        caller: AccountHash,
    ) -> Result<(), NftError> {
        let owner = self.owner_of(token_id)?;
        if caller != owner {
            return Err(NftError::NotOwner);
        }
        self.approvals.insert(token_id, operator);
        Ok(())
    }

    pub fn get_approved(&self, token_id: u64) -> Option<AccountHash> {
        self.approvals.get(&token_id).copied()
    }

    pub fn is_approved(&self, token_id: u64, operator: AccountHash) -> bool {
        self.approvals.get(&token_id) == Some(&operator)
    }

    pub fn transfer(
        &mut self,
        token_id: u64,
        from: AccountHash,
        to: AccountHash,
        caller: AccountHash,
    ) -> Result<(), NftError> {
        let owner = self.owner_of(token_id)?;
        if owner != from {
            return Err(NftError::WrongOwner);
        }
        if caller != owner && !self.is_approved(token_id, caller) {
            return Err(NftError::NotApproved);
        }
        // Approval does not survive a change of owner
        self.approvals.remove(&token_id);
        if let Some(held) = self.holdings.get_mut(&from) {
            held.remove(&token_id);
        }
        self.holdings
            .entry(to)
            .or_insert_with(BTreeSet::new)
            .insert(token_id);
        self.owners.insert(token_id, to);
        Ok(())
    }

    pub fn tokens_by_owner(&self, owner: AccountHash) -> Vec<u64> {
        match self.holdings.get(&owner) {
            Some(held) => held.iter().copied().collect(),
            None => Vec::new(),
        }
    }

    pub fn total_minted(&self) -> u64 {
        self.next_id
    }

    pub fn serialize(&self) -> NftSerialized {
        let mut owners: BTreeMap<u64, [u8; 32]> = BTreeMap::new();
        for (token_id, owner) in self.owners.iter() {
            owners.insert(*token_id, owner.value());
        }
        let mut approvals: BTreeMap<u64, [u8; 32]> = BTreeMap::new();
        for (token_id, operator) in self.approvals.iter() {
            approvals.insert(*token_id, operator.value());
        }
        (
            (self.owner.value(), self.next_id),
            owners,
            (approvals, self.uris.clone()),
        )
    }

    pub fn deserialize(serialized: NftSerialized) -> Nft {
        let mut owners: BTreeMap<u64, AccountHash> = BTreeMap::new();
        // The holdings index is derived state, rebuilt from the owner records
        let mut holdings: BTreeMap<AccountHash, BTreeSet<u64>> = BTreeMap::new();
        for (token_id, owner) in serialized.1.iter() {
            let owner = AccountHash::new(*owner);
            owners.insert(*token_id, owner);
            holdings
                .entry(owner)
                .or_insert_with(BTreeSet::new)
                .insert(*token_id);
        }
        let mut approvals: BTreeMap<u64, AccountHash> = BTreeMap::new();
        for (token_id, operator) in (serialized.2).0.iter() {
            approvals.insert(*token_id, AccountHash::new(*operator));
        }
        Nft {
            owner: AccountHash::new((serialized.0).0),
            owners,
            holdings,
            approvals,
            uris: (serialized.2).1,
            next_id: (serialized.0).1,
        }
    }
}
