pub mod custom_types {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use types::U256;

    // token id, seller, price, is_active
    pub type ListingSerialized = (u64, [u8; 32], U256, bool);
    pub type MarketplaceSerialized = (
        // owner, marketplace account
        ([u8; 32], [u8; 32]),
        // listings, held balance
        (BTreeMap<u64, ListingSerialized>, U256),
    );

    pub type VotersSerialized = BTreeMap<[u8; 32], bool>;
    pub type ProposalSerialized = (
        // description, proposer
        (String, [u8; 32]),
        // yes votes, no votes, active
        (u64, u64, bool),
        VotersSerialized,
    );
    pub type VotingSystemSerialized = ([u8; 32], BTreeMap<u64, ProposalSerialized>);

    pub type NftSerialized = (
        // minting authority, next token id
        ([u8; 32], u64),
        // token id to owner; the per-owner holdings index is rebuilt on load
        BTreeMap<u64, [u8; 32]>,
        // approvals, token URIs
        (BTreeMap<u64, [u8; 32]>, BTreeMap<u64, String>),
    );
}
