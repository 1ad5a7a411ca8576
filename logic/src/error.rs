#[derive(PartialEq, Debug)]
pub enum NftError {
    TokenNotFound,
    NotOwner,
    WrongOwner,
    NotApproved,
}

#[derive(PartialEq, Debug)]
pub enum MarketError {
    NotOwner,
    NotApproved,
    AlreadyListed,
    InvalidPrice,
    ItemNotActive,
    InsufficientFunds,
}

#[derive(PartialEq, Debug)]
pub enum VotingError {
    ProposalNotFound,
    ProposalClosed,
    AlreadyVoted,
    AlreadyClosed,
    NotOwner,
}

impl NftError {
    pub fn reason(&self) -> &'static str {
        match self {
            NftError::TokenNotFound => "Token does not exist",
            NftError::NotOwner => "Not owner of NFT",
            NftError::WrongOwner => "Transfer from wrong owner",
            NftError::NotApproved => "Caller is not owner nor approved",
        }
    }
}

impl MarketError {
    pub fn reason(&self) -> &'static str {
        match self {
            MarketError::NotOwner => "Not owner",
            MarketError::NotApproved => "Marketplace not approved for NFT",
            MarketError::AlreadyListed => "Token is already listed",
            MarketError::InvalidPrice => "Price must be > 0",
            MarketError::ItemNotActive => "Item not active",
            MarketError::InsufficientFunds => "Insufficient funds",
        }
    }
}

impl VotingError {
    pub fn reason(&self) -> &'static str {
        match self {
            VotingError::ProposalNotFound => "Proposal does not exist",
            VotingError::ProposalClosed => "Proposal is not active",
            VotingError::AlreadyVoted => "Already voted on this proposal",
            VotingError::AlreadyClosed => "Proposal already finished",
            VotingError::NotOwner => "Not owner",
        }
    }
}
