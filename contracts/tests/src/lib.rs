#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};

use pro_funding::{
    ApprovalState, Error, MemberStatus, ProFundingContract, ProFundingContractClient as FundingClient,
};

struct Protocol<'a> {
    env: Env,
    admin: Address,
    token: TokenClient<'a>,
    funding: FundingClient<'a>,
}

impl<'a> Protocol<'a> {
    fn deploy() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);

        let asset = env.register_stellar_asset_contract_v2(admin.clone());
        let token = TokenClient::new(&env, &asset.address());
        StellarAssetClient::new(&env, &asset.address()).mint(&admin, &1_000_000);

        let funding_id = env.register(ProFundingContract, ());
        let funding = FundingClient::new(&env, &funding_id);
        funding.initialize(&admin, &token.address);

        Protocol {
            env,
            admin,
            token,
            funding,
        }
    }

    fn mine_empty_blocks(&self, count: u32) {
        self.env.ledger().with_mut(|li| li.sequence_number += count);
    }
}

#[test]
fn test_profunding_lifecycle_e2e() {
    let protocol = Protocol::deploy();
    let env = &protocol.env;
    let admin = &protocol.admin;
    let funding = &protocol.funding;
    let member = Address::generate(env);

    // Activation and onboarding
    assert!(funding.activate_contract(admin));
    assert!(funding.onboard_new_member(admin, &member));
    assert_eq!(
        funding.try_onboard_new_member(admin, &member),
        Err(Ok(Error::InvalidInput))
    );

    // The member registers the first project
    let project_id = funding.register_project(
        &member,
        &String::from_str(env, "Test Project"),
        &String::from_str(env, "This is a test project description."),
        &1000,
        &2000,
    );
    assert_eq!(project_id, 1);

    // The admin votes and contributes without being onboarded
    assert!(funding.cast_vote(admin, &project_id, &true));
    assert!(funding.contribute_funds(admin, &project_id, &500));

    let project = funding.get_project_details(&project_id).unwrap();
    assert_eq!(project.total_contributed, 500);
    assert_eq!(project.approval_state, ApprovalState::Approved);
    assert!(funding.get_member_profile(&member).is_some());

    // Past the deadline the owner collects the escrow, once
    protocol.mine_empty_blocks(2001);
    assert!(funding.withdraw_funds(&member, &project_id));
    assert_eq!(
        funding.try_withdraw_funds(&member, &project_id),
        Err(Ok(Error::AlreadyWithdrawn))
    );
    assert_eq!(protocol.token.balance(&member), 500);
    assert_eq!(protocol.token.balance(admin), 1_000_000 - 500);

    // Offboarding closes the membership
    assert!(funding.offboard_member(admin, &member));
    let profile = funding.get_member_profile(&member).unwrap();
    assert_eq!(profile.status, MemberStatus::Offboarded);
    assert_eq!(funding.member_count(), 0);

    std::println!("pro_funding lifecycle passed");
}

#[test]
fn test_contributions_sum_across_projects() {
    let protocol = Protocol::deploy();
    let env = &protocol.env;
    let admin = &protocol.admin;
    let funding = &protocol.funding;

    funding.activate_contract(admin);

    let mut owners = std::vec::Vec::new();
    for _ in 0..3 {
        let owner = Address::generate(env);
        funding.onboard_new_member(admin, &owner);
        owners.push(owner);
    }

    for (index, owner) in owners.iter().enumerate() {
        let id = funding.register_project(
            owner,
            &String::from_str(env, "Project"),
            &String::from_str(env, ""),
            &10_000,
            &100,
        );
        assert_eq!(id, index as u64 + 1);
    }

    let amounts: [i128; 3] = [100, 250, 40];
    for (index, amount) in amounts.iter().enumerate() {
        let id = index as u64 + 1;
        funding.contribute_funds(admin, &id, amount);
        funding.contribute_funds(admin, &id, amount);
    }

    for (index, amount) in amounts.iter().enumerate() {
        let project = funding.get_project_details(&(index as u64 + 1)).unwrap();
        assert_eq!(project.total_contributed, amount * 2);
    }
    assert_eq!(protocol.token.balance(&funding.address), 780);
}
