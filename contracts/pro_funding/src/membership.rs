use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::clock::BlockHeight;
use crate::errors::Error;
use crate::events::{MemberOffboardedEvent, MemberOnboardedEvent};
use crate::storage::{self, Member, MemberStatus};

/// Adds `principal` to the registry as an active member.
///
/// A principal gets one membership record for the lifetime of the contract:
/// offboarded records are kept, so onboarding them again is rejected just
/// like onboarding a current member. The admin cannot be onboarded since it
/// already holds every member right.
pub fn onboard(env: &Env, caller: &Address, principal: &Address) -> Result<Member, Error> {
    access::require_admin(env, caller)?;

    if principal == caller || storage::load_member(env, principal).is_some() {
        log!(env, "principal already registered", principal.clone());
        return Err(Error::InvalidInput);
    }

    let count = storage::member_count(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;

    let member = Member {
        principal: principal.clone(),
        status: MemberStatus::Active,
        joined_at: env.block_height(),
        offboarded_at: None,
    };

    storage::save_member(env, &member);
    storage::set_member_count(env, count);

    MemberOnboardedEvent {
        member: member.principal.clone(),
        joined_at: member.joined_at,
    }
    .publish(env);

    Ok(member)
}

/// Marks a current member as offboarded.
pub fn offboard(env: &Env, caller: &Address, principal: &Address) -> Result<Member, Error> {
    access::require_admin(env, caller)?;

    let mut member = match storage::load_member(env, principal) {
        Some(member) if member.status == MemberStatus::Active => member,
        _ => {
            log!(env, "no current member", principal.clone());
            return Err(Error::NotFound);
        }
    };

    let count = storage::member_count(env)
        .checked_sub(1)
        .ok_or(Error::Overflow)?;

    let height = env.block_height();
    member.status = MemberStatus::Offboarded;
    member.offboarded_at = Some(height);

    storage::save_member(env, &member);
    storage::set_member_count(env, count);

    MemberOffboardedEvent {
        member: member.principal.clone(),
        offboarded_at: height,
    }
    .publish(env);

    Ok(member)
}

pub fn profile(env: &Env, principal: &Address) -> Option<Member> {
    storage::load_member(env, principal)
}
