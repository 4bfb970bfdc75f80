//! Caller role resolution.
//!
//! Every gated entry point runs the same sequence before touching state:
//! initialized, caller auth, activated, then the role check.

use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::storage::{self, MemberStatus};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Member,
    Unknown,
}

impl Role {
    /// The admin holds every member right without being onboarded.
    pub fn is_member(self) -> bool {
        matches!(self, Role::Admin | Role::Member)
    }
}

pub fn role_of(env: &Env, admin: &Address, address: &Address) -> Role {
    if address == admin {
        return Role::Admin;
    }
    match storage::load_member(env, address) {
        Some(member) if member.status == MemberStatus::Active => Role::Member,
        _ => Role::Unknown,
    }
}

/// Authenticates `caller` on an activated contract, without a role check.
pub fn require_caller(env: &Env, caller: &Address) -> Result<Address, Error> {
    let admin = storage::get_admin(env)?;
    caller.require_auth();
    storage::extend_instance(env);
    if !storage::is_active(env) {
        log!(env, "contract not activated");
        return Err(Error::NotActivated);
    }
    Ok(admin)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<Role, Error> {
    let admin = require_caller(env, caller)?;
    if *caller != admin {
        log!(env, "admin required", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(Role::Admin)
}

pub fn require_member(env: &Env, caller: &Address) -> Result<Role, Error> {
    let admin = require_caller(env, caller)?;
    let role = role_of(env, &admin, caller);
    if !role.is_member() {
        log!(env, "member required", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(role)
}
