use soroban_sdk::{contracttype, Address, Env, IntoVal, String, TryFromVal, Val};

use crate::config::ContractConfig;
use crate::errors::Error;

pub const DAY_IN_LEDGERS: u32 = 17_280;
/// Persistent entries are kept alive for this many ledgers past their last
/// touch, which outlasts the longest accepted deadline.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 200 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                      // -> Address
    Config,                     // -> ContractConfig
    Active,                     // -> bool
    NextProjectId,              // -> u64
    MemberCount,                // -> u32
    Member(Address),            // -> Member
    Project(u64),               // -> Project
    Vote(u64, Address),         // (project_id, voter) -> bool
    Contribution(u64, Address), // (project_id, contributor) -> i128
    Refunded(u64, Address),     // (project_id, contributor) -> bool
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberStatus {
    Active,
    Offboarded,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub principal: Address,
    pub status: MemberStatus,
    pub joined_at: u32,
    pub offboarded_at: Option<u32>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalState {
    Pending,
    Approved,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub funding_goal: i128,
    pub created_at: u32,
    pub deadline: u32,
    pub total_contributed: i128,
    pub total_refunded: i128,
    pub votes_for: u32,
    pub votes_against: u32,
    /// Quorum in force when the project was registered.
    pub quorum: u32,
    pub approval_state: ApprovalState,
    pub withdrawn: bool,
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Reads a persistent entry and, when present, pushes its expiry out.
fn load_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        extend_persistent(env, key);
    }
    value
}

fn save_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    extend_persistent(env, key);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_config(env: &Env) -> Result<ContractConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &ContractConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn is_active(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Active)
        .unwrap_or(false)
}

pub fn set_active(env: &Env, active: bool) {
    env.storage().instance().set(&DataKey::Active, &active);
}

/// Id the next registered project will receive. Ids start at 1.
pub fn next_project_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextProjectId)
        .unwrap_or(1)
}

pub fn set_next_project_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextProjectId, &id);
}

pub fn member_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MemberCount)
        .unwrap_or(0)
}

pub fn set_member_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::MemberCount, &count);
}

pub fn load_member(env: &Env, principal: &Address) -> Option<Member> {
    load_persistent(env, &DataKey::Member(principal.clone()))
}

pub fn save_member(env: &Env, member: &Member) {
    save_persistent(env, &DataKey::Member(member.principal.clone()), member);
}

pub fn load_project(env: &Env, project_id: u64) -> Option<Project> {
    load_persistent(env, &DataKey::Project(project_id))
}

pub fn save_project(env: &Env, project: &Project) {
    save_persistent(env, &DataKey::Project(project.id), project);
}

pub fn vote_of(env: &Env, project_id: u64, voter: &Address) -> Option<bool> {
    load_persistent(env, &DataKey::Vote(project_id, voter.clone()))
}

pub fn record_vote(env: &Env, project_id: u64, voter: &Address, approve: bool) {
    save_persistent(env, &DataKey::Vote(project_id, voter.clone()), &approve);
}

pub fn contribution_of(env: &Env, project_id: u64, contributor: &Address) -> i128 {
    load_persistent(env, &DataKey::Contribution(project_id, contributor.clone())).unwrap_or(0)
}

pub fn set_contribution(env: &Env, project_id: u64, contributor: &Address, amount: i128) {
    save_persistent(
        env,
        &DataKey::Contribution(project_id, contributor.clone()),
        &amount,
    );
}

pub fn is_refunded(env: &Env, project_id: u64, contributor: &Address) -> bool {
    load_persistent(env, &DataKey::Refunded(project_id, contributor.clone())).unwrap_or(false)
}

pub fn mark_refunded(env: &Env, project_id: u64, contributor: &Address) {
    save_persistent(env, &DataKey::Refunded(project_id, contributor.clone()), &true);
}
