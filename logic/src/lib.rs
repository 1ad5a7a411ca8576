#![no_std]

extern crate alloc;

mod error;
mod market;
mod nft;
pub mod custom_types;
pub mod voting;
pub use error::{MarketError, NftError, VotingError};

pub use market::{Listing, Marketplace, Purchase};
pub use nft::Nft;
pub use voting::{Proposal, VotingSystem};
