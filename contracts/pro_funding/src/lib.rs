//! Member-governed crowdfunding contract.
//!
//! The admin activates the contract and manages the member registry. Members
//! register projects with a funding goal and a deadline expressed in ledgers,
//! vote on them, and contribute escrowed tokens. Once a project's deadline
//! passes, its owner withdraws the escrow, unless the vote rejected the
//! project, in which case contributors reclaim their stakes instead.
//!
//! Every persistent entry is bumped to stay live for
//! `PERSISTENT_BUMP_AMOUNT` ledgers whenever it is read or written, and the
//! longest accepted deadline sits inside that window.

#![no_std]

mod access;
mod clock;
mod config;
mod errors;
mod events;
mod funding;
mod membership;
mod projects;
mod storage;
mod token;
mod voting;

pub use clock::BlockHeight;
pub use config::{ContractConfig, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
pub use errors::Error;
pub use storage::{ApprovalState, Member, MemberStatus, Project, PERSISTENT_BUMP_AMOUNT};

use events::{ConfigUpdatedEvent, ContractActivatedEvent, InitializedEvent};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

#[contract]
pub struct ProFundingContract;

#[contractimpl]
impl ProFundingContract {
    /// Initialize the contract with an admin and the escrow token
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &ContractConfig::with_token(token.clone()));
        storage::set_active(&env, false);
        storage::set_next_project_id(&env, 1);
        storage::extend_instance(&env);

        InitializedEvent { admin, token }.publish(&env);

        Ok(())
    }

    /// Open the contract for every other mutating call (admin only).
    ///
    /// Activation happens once; a repeated call fails with
    /// [`Error::AlreadyActivated`] and leaves the contract active.
    pub fn activate_contract(env: Env, caller: Address) -> Result<bool, Error> {
        let admin = storage::get_admin(&env)?;
        caller.require_auth();

        if caller != admin {
            return Err(Error::Unauthorized);
        }
        if storage::is_active(&env) {
            return Err(Error::AlreadyActivated);
        }

        storage::set_active(&env, true);
        storage::extend_instance(&env);

        ContractActivatedEvent {
            admin: caller,
            height: env.block_height(),
        }
        .publish(&env);

        Ok(true)
    }

    /// Replace the contract configuration (admin only)
    pub fn update_config(env: Env, caller: Address, config: ContractConfig) -> Result<(), Error> {
        access::require_admin(&env, &caller)?;
        config.validate()?;

        storage::set_config(&env, &config);

        ConfigUpdatedEvent {
            admin: caller,
            max_deadline_offset: config.max_deadline_offset,
            quorum: config.quorum,
        }
        .publish(&env);

        Ok(())
    }

    /// Onboard `member` into the registry (admin only)
    pub fn onboard_new_member(env: Env, caller: Address, member: Address) -> Result<bool, Error> {
        membership::onboard(&env, &caller, &member)?;
        Ok(true)
    }

    /// Offboard a current member (admin only)
    pub fn offboard_member(env: Env, caller: Address, member: Address) -> Result<bool, Error> {
        membership::offboard(&env, &caller, &member)?;
        Ok(true)
    }

    /// Register a new project owned by `caller` and return its id
    pub fn register_project(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        funding_goal: i128,
        deadline_offset: u32,
    ) -> Result<u64, Error> {
        projects::register(&env, &caller, title, description, funding_goal, deadline_offset)
    }

    /// Cast `caller`'s vote on a project
    pub fn cast_vote(
        env: Env,
        caller: Address,
        project_id: u64,
        approve: bool,
    ) -> Result<bool, Error> {
        voting::cast(&env, &caller, project_id, approve)?;
        Ok(true)
    }

    /// Move `amount` of the escrow token from `caller` into a project
    pub fn contribute_funds(
        env: Env,
        caller: Address,
        project_id: u64,
        amount: i128,
    ) -> Result<bool, Error> {
        funding::contribute(&env, &caller, project_id, amount)?;
        Ok(true)
    }

    /// Withdraw a project's escrow to its owner after the deadline
    pub fn withdraw_funds(env: Env, caller: Address, project_id: u64) -> Result<bool, Error> {
        funding::withdraw(&env, &caller, project_id)?;
        Ok(true)
    }

    /// Reclaim `caller`'s contribution to a rejected project and return the amount
    pub fn claim_refund(env: Env, caller: Address, project_id: u64) -> Result<i128, Error> {
        funding::refund(&env, &caller, project_id)
    }

    pub fn get_project_details(env: Env, project_id: u64) -> Option<Project> {
        projects::details(&env, project_id)
    }

    pub fn get_member_profile(env: Env, member: Address) -> Option<Member> {
        membership::profile(&env, &member)
    }

    /// Get the recorded vote of `voter` on a project, if any
    pub fn get_vote(env: Env, project_id: u64, voter: Address) -> Option<bool> {
        voting::vote_of(&env, project_id, &voter)
    }

    /// Get the total `contributor` has put into a project
    pub fn get_contribution(env: Env, project_id: u64, contributor: Address) -> i128 {
        funding::contribution_of(&env, project_id, &contributor)
    }

    /// Number of currently active members
    pub fn member_count(env: Env) -> u32 {
        storage::member_count(&env)
    }

    pub fn is_active(env: Env) -> bool {
        storage::is_active(&env)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<ContractConfig, Error> {
        storage::get_config(&env)
    }
}
