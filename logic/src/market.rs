use crate::custom_types::custom_types::{ListingSerialized, MarketplaceSerialized};
use crate::error::{MarketError, NftError};
use crate::nft::Nft;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use types::{account::AccountHash, U256};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Listing {
    pub token_id: u64,
    pub seller: AccountHash,
    pub price: U256,
    pub is_active: bool,
}

// Transfers the runtime has to execute once a sale settles
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Purchase {
    pub seller: AccountHash,
    pub proceeds: U256,
    pub refund: U256,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Marketplace {
    pub owner: AccountHash,
    pub account: AccountHash,
    pub listings: BTreeMap<u64, Listing>,
    pub balance: U256,
}

impl Marketplace {
    pub fn new(owner: AccountHash, account: AccountHash) -> Marketplace {
        Marketplace {
            owner,
            account,
            listings: BTreeMap::new(),
            balance: U256::from(0),
        }
    }

    pub fn list_item(
        &mut self,
        token_id: u64,
        price: U256,
        caller: AccountHash,
        nft: &Nft,
    ) -> Result<(), MarketError> {
        let token_owner = match nft.owner_of(token_id) {
            Ok(owner) => owner,
            Err(_) => return Err(MarketError::NotOwner),
        };
        if caller != token_owner {
            return Err(MarketError::NotOwner);
        }
        if !nft.is_approved(token_id, self.account) {
            return Err(MarketError::NotApproved);
        }
        if self.is_token_listed(token_id) {
            return Err(MarketError::AlreadyListed);
        }
        if price == U256::from(0) {
            return Err(MarketError::InvalidPrice);
        }
        // The seller keeps the token until settlement; a sold-out record
        // for the same id is overwritten here
        self.listings.insert(
            token_id,
            Listing {
                token_id,
                seller: caller,
                price,
                is_active: true,
            },
        );
        Ok(())
    }

    pub fn get_active_listings(&self) -> Vec<u64> {
        self.listings
            .iter()
            .filter(|(_, listing)| listing.is_active)
            .map(|(token_id, _)| *token_id)
            .collect()
    }

    pub fn is_token_listed(&self, token_id: u64) -> bool {
        match self.listings.get(&token_id) {
            Some(listing) => listing.is_active,
            None => false,
        }
    }

    pub fn get_listing(&self, token_id: u64) -> Option<&Listing> {
        self.listings.get(&token_id)
    }

    pub fn buy_item(
        &mut self,
        token_id: u64,
        payment: U256,
        caller: AccountHash,
        nft: &mut Nft,
    ) -> Result<Purchase, MarketError> {
        let (seller, price) = match self.listings.get(&token_id) {
            Some(listing) if listing.is_active => (listing.seller, listing.price),
            _ => return Err(MarketError::ItemNotActive),
        };
        if payment < price {
            return Err(MarketError::InsufficientFunds);
        }
        // The ledger validates before it mutates, so a stale listing
        // (seller moved the token, approval revoked) leaves no half-sale
        match nft.transfer(token_id, seller, caller, self.account) {
            Ok(()) => {}
            Err(NftError::NotApproved) => return Err(MarketError::NotApproved),
            Err(_) => return Err(MarketError::NotOwner),
        }
        if let Some(listing) = self.listings.get_mut(&token_id) {
            listing.is_active = false;
        }
        Ok(Purchase {
            seller,
            proceeds: price,
            refund: payment - price,
        })
    }

    pub fn deposit(&mut self, amount: U256) {
        self.balance += amount;
    }

    pub fn withdraw(&mut self, caller: AccountHash) -> Result<U256, MarketError> {
        if caller != self.owner {
            return Err(MarketError::NotOwner);
        }
        let amount = self.balance;
        // Zeroed before the runtime moves the value; a reentrant sweep
        // sees an empty balance
        self.balance = U256::from(0);
        Ok(amount)
    }

    pub fn serialize(&self) -> MarketplaceSerialized {
        let mut listings: BTreeMap<u64, ListingSerialized> = BTreeMap::new();
        for (token_id, listing) in self.listings.iter() {
            listings.insert(
                *token_id,
                (
                    listing.token_id,
                    listing.seller.value(),
                    listing.price,
                    listing.is_active,
                ),
            );
        }
        (
            (self.owner.value(), self.account.value()),
            (listings, self.balance),
        )
    }

    pub fn deserialize(serialized: MarketplaceSerialized) -> Marketplace {
        let mut listings: BTreeMap<u64, Listing> = BTreeMap::new();
        for (token_id, listing) in (serialized.1).0.iter() {
            listings.insert(
                *token_id,
                Listing {
                    token_id: listing.0,
                    seller: AccountHash::new(listing.1),
                    price: listing.2,
                    is_active: listing.3,
                },
            );
        }
        Marketplace {
            owner: AccountHash::new((serialized.0).0),
            account: AccountHash::new((serialized.0).1),
            listings,
            balance: (serialized.1).1,
        }
    }
}
