use crate::account;
use logic::{VotingError, VotingSystem};

#[test]
fn should_create_a_proposal() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);

    let id = voting.create_proposal("Fund the treasury".into(), ali);

    assert_eq!(id, 0);
    assert_eq!(voting.get_proposals_count(), 1);
    assert_eq!(
        voting.get_proposal(0).unwrap(),
        ("Fund the treasury".into(), 0, 0, true)
    );
}

#[test]
fn should_assign_increasing_ids() {
    let admin = account(1);
    let ali = account(3);
    let bob = account(4);
    let mut voting = VotingSystem::new(admin);

    // Creation is open to anyone, not just the admin
    assert_eq!(voting.create_proposal("A".into(), ali), 0);
    assert_eq!(voting.create_proposal("B".into(), bob), 1);
    assert_eq!(voting.create_proposal("C".into(), ali), 2);
    assert_eq!(voting.get_proposals_count(), 3);
    assert_eq!(voting.get_proposal(2).unwrap().0, "C");
}

#[test]
fn should_fail_to_read_unknown_proposal() {
    let admin = account(1);
    let voting = VotingSystem::new(admin);

    let result = voting.get_proposal(0);

    assert_eq!(result, Err(VotingError::ProposalNotFound));
    assert_eq!(result.unwrap_err().reason(), "Proposal does not exist");
}

#[test]
fn should_tally_a_yes_vote() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);

    voting.vote(0, true, ali).unwrap();

    let (_, yes, no, active) = voting.get_proposal(0).unwrap();
    assert_eq!(yes, 1);
    assert_eq!(no, 0);
    assert!(active);
    assert!(voting.has_voted(0, ali));
}

#[test]
fn should_tally_a_no_vote() {
    let admin = account(1);
    let ali = account(3);
    let bob = account(4);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);

    voting.vote(0, false, bob).unwrap();

    let (_, yes, no, _) = voting.get_proposal(0).unwrap();
    assert_eq!(yes, 0);
    assert_eq!(no, 1);
}

#[test]
fn should_reject_a_second_vote_from_the_same_caller() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);
    voting.vote(0, true, ali).unwrap();

    // Flipping direction does not help
    let result = voting.vote(0, false, ali);

    assert_eq!(result, Err(VotingError::AlreadyVoted));
    assert_eq!(result.unwrap_err().reason(), "Already voted on this proposal");
    let (_, yes, no, _) = voting.get_proposal(0).unwrap();
    assert_eq!((yes, no), (1, 0));
}

#[test]
fn should_keep_per_proposal_vote_records_independent() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);
    voting.create_proposal("B".into(), ali);

    voting.vote(0, true, ali).unwrap();
    // Same caller is still fresh on the second proposal
    voting.vote(1, false, ali).unwrap();

    assert!(voting.has_voted(0, ali));
    assert!(voting.has_voted(1, ali));
    assert_eq!(voting.get_proposal(1).unwrap().2, 1);
}

#[test]
fn should_fail_to_vote_on_unknown_proposal() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);

    assert_eq!(voting.vote(0, true, ali), Err(VotingError::ProposalNotFound));
}

#[test]
fn should_fail_to_finish_if_not_owner() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);

    let result = voting.finish_proposal(0, ali);

    assert_eq!(result, Err(VotingError::NotOwner));
    assert_eq!(result.unwrap_err().reason(), "Not owner");
    assert!(voting.get_proposal(0).unwrap().3);
}

#[test]
fn should_close_a_proposal_and_freeze_its_tallies() {
    let admin = account(1);
    let ali = account(3);
    let bob = account(4);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);
    voting.vote(0, true, ali).unwrap();

    voting.finish_proposal(0, admin).unwrap();

    let (_, yes, no, active) = voting.get_proposal(0).unwrap();
    assert!(!active);
    assert_eq!((yes, no), (1, 0));

    let result = voting.vote(0, true, bob);
    assert_eq!(result, Err(VotingError::ProposalClosed));
    assert_eq!(result.unwrap_err().reason(), "Proposal is not active");
    // Tallies did not move
    assert_eq!(voting.get_proposal(0).unwrap().1, 1);
}

#[test]
fn should_fail_to_finish_twice() {
    let admin = account(1);
    let ali = account(3);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);
    voting.finish_proposal(0, admin).unwrap();

    assert_eq!(
        voting.finish_proposal(0, admin),
        Err(VotingError::AlreadyClosed)
    );
}

#[test]
fn should_fail_to_finish_unknown_proposal() {
    let admin = account(1);
    let mut voting = VotingSystem::new(admin);

    assert_eq!(
        voting.finish_proposal(0, admin),
        Err(VotingError::ProposalNotFound)
    );
}

#[test]
fn should_enforce_vote_records_after_storage_round_trip() {
    let admin = account(1);
    let ali = account(3);
    let bob = account(4);
    let mut voting = VotingSystem::new(admin);
    voting.create_proposal("A".into(), ali);
    voting.vote(0, true, ali).unwrap();

    let mut restored = VotingSystem::deserialize(voting.serialize());

    assert_eq!(restored, voting);
    assert_eq!(restored.vote(0, true, ali), Err(VotingError::AlreadyVoted));
    restored.vote(0, false, bob).unwrap();
    assert_eq!(restored.get_proposal(0).unwrap(), ("A".into(), 1, 1, true));
}
