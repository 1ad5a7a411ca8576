use crate::custom_types::custom_types::{ProposalSerialized, VotingSystemSerialized};
use crate::error::VotingError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use types::account::AccountHash;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Proposal {
    pub description: String,
    pub proposer: AccountHash,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub active: bool,
    pub voters: BTreeMap<AccountHash, bool>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VotingSystem {
    pub owner: AccountHash,
    pub proposals: BTreeMap<u64, Proposal>,
}

impl VotingSystem {
    pub fn new(owner: AccountHash) -> VotingSystem {
        VotingSystem {
            owner,
            proposals: BTreeMap::new(),
        }
    }

    pub fn create_proposal(&mut self, description: String, caller: AccountHash) -> u64 {
        // Append-only ledger, ids are dense from zero
        let id = self.proposals.len() as u64;
        self.proposals.insert(
            id,
            Proposal {
                description,
                proposer: caller,
                yes_votes: 0,
                no_votes: 0,
                active: true,
                voters: BTreeMap::new(),
            },
        );
        id
    }

    pub fn get_proposals_count(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn get_proposal(&self, id: u64) -> Result<(String, u64, u64, bool), VotingError> {
        match self.proposals.get(&id) {
            Some(proposal) => Ok((
                proposal.description.clone(),
                proposal.yes_votes,
                proposal.no_votes,
                proposal.active,
            )),
            None => Err(VotingError::ProposalNotFound),
        }
    }

    pub fn has_voted(&self, id: u64, voter: AccountHash) -> bool {
        match self.proposals.get(&id) {
            Some(proposal) => proposal.voters.contains_key(&voter),
            None => false,
        }
    }

    pub fn vote(&mut self, id: u64, support: bool, caller: AccountHash) -> Result<(), VotingError> {
        let proposal = match self.proposals.get_mut(&id) {
            Some(proposal) => proposal,
            None => return Err(VotingError::ProposalNotFound),
        };
        if !proposal.active {
            return Err(VotingError::ProposalClosed);
        }
        if proposal.voters.contains_key(&caller) {
            return Err(VotingError::AlreadyVoted);
        }
        if support {
            proposal.yes_votes += 1;
        } else {
            proposal.no_votes += 1;
        }
        proposal.voters.insert(caller, support);
        Ok(())
    }

    pub fn finish_proposal(&mut self, id: u64, caller: AccountHash) -> Result<(), VotingError> {
        if caller != self.owner {
            return Err(VotingError::NotOwner);
        }
        let proposal = match self.proposals.get_mut(&id) {
            Some(proposal) => proposal,
            None => return Err(VotingError::ProposalNotFound),
        };
        if !proposal.active {
            return Err(VotingError::AlreadyClosed);
        }
        proposal.active = false;
        Ok(())
    }

    pub fn serialize(&self) -> VotingSystemSerialized {
        let mut proposals: BTreeMap<u64, ProposalSerialized> = BTreeMap::new();
        for (id, proposal) in self.proposals.iter() {
            proposals.insert(*id, Self::serialize_proposal(proposal));
        }
        (self.owner.value(), proposals)
    }

    fn serialize_proposal(proposal: &Proposal) -> ProposalSerialized {
        let mut voters: BTreeMap<[u8; 32], bool> = BTreeMap::new();
        for (voter, support) in proposal.voters.iter() {
            voters.insert(voter.value(), *support);
        }
        (
            (proposal.description.clone(), proposal.proposer.value()),
            (proposal.yes_votes, proposal.no_votes, proposal.active),
            voters,
        )
    }

    pub fn deserialize(serialized: VotingSystemSerialized) -> VotingSystem {
        let mut proposals: BTreeMap<u64, Proposal> = BTreeMap::new();
        for (id, proposal) in serialized.1 {
            let mut voters: BTreeMap<AccountHash, bool> = BTreeMap::new();
            for (voter, support) in proposal.2.iter() {
                voters.insert(AccountHash::new(*voter), *support);
            }
            proposals.insert(
                id,
                Proposal {
                    description: (proposal.0).0,
                    proposer: AccountHash::new((proposal.0).1),
                    yes_votes: (proposal.1).0,
                    no_votes: (proposal.1).1,
                    active: (proposal.1).2,
                    voters,
                },
            );
        }
        VotingSystem {
            owner: AccountHash::new(serialized.0),
            proposals,
        }
    }
}
