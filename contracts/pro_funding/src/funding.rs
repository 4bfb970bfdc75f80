//! Escrow accounting for contributions, owner withdrawals and refunds.
//!
//! `total_contributed` only ever grows through `contribute`. Refunds are
//! tracked separately in `total_refunded`, and a project's escrow is paid out
//! either to its owner (once) or back to its contributors, never both: owners
//! cannot withdraw a rejected project and refunds require one.

use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::clock::BlockHeight;
use crate::errors::Error;
use crate::events::{ContributionEvent, ContributionRefundedEvent, WithdrawEvent};
use crate::storage::{self, ApprovalState};
use crate::token;

pub fn contribute(
    env: &Env,
    contributor: &Address,
    project_id: u64,
    amount: i128,
) -> Result<(), Error> {
    access::require_member(env, contributor)?;
    let config = storage::get_config(env)?;

    let mut project = storage::load_project(env, project_id).ok_or(Error::NotFound)?;

    if amount <= 0 {
        log!(env, "contribution must be positive", amount);
        return Err(Error::InvalidInput);
    }

    if env.block_height() >= project.deadline {
        log!(env, "funding closed", project_id);
        return Err(Error::Expired);
    }

    let total = project
        .total_contributed
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let own = storage::contribution_of(env, project_id, contributor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    let contract_address = env.current_contract_address();
    token::transfer(env, &config.token, contributor, &contract_address, &amount);

    project.total_contributed = total;
    storage::save_project(env, &project);
    storage::set_contribution(env, project_id, contributor, own);

    ContributionEvent {
        contributor: contributor.clone(),
        project_id,
        amount,
        total_contributed: total,
    }
    .publish(env);

    Ok(())
}

/// Pays the whole escrow out to the project owner once the deadline passed.
///
/// Only ownership is checked, not current membership, so an offboarded owner
/// can still collect.
pub fn withdraw(env: &Env, caller: &Address, project_id: u64) -> Result<i128, Error> {
    access::require_caller(env, caller)?;
    let config = storage::get_config(env)?;

    let mut project = storage::load_project(env, project_id).ok_or(Error::NotFound)?;

    if *caller != project.owner {
        log!(env, "only the owner can withdraw", caller.clone());
        return Err(Error::Unauthorized);
    }

    if env.block_height() < project.deadline {
        return Err(Error::TooEarly);
    }

    if project.withdrawn {
        return Err(Error::AlreadyWithdrawn);
    }

    if project.approval_state == ApprovalState::Rejected {
        return Err(Error::ProjectRejected);
    }

    let amount = project.total_contributed;
    if amount > 0 {
        let contract_address = env.current_contract_address();
        token::transfer(env, &config.token, &contract_address, &project.owner, &amount);
    }

    project.withdrawn = true;
    storage::save_project(env, &project);

    WithdrawEvent {
        owner: project.owner.clone(),
        project_id,
        amount,
    }
    .publish(env);

    Ok(amount)
}

/// Returns `contributor`'s stake in a rejected project after its deadline.
pub fn refund(env: &Env, contributor: &Address, project_id: u64) -> Result<i128, Error> {
    access::require_caller(env, contributor)?;
    let config = storage::get_config(env)?;

    let mut project = storage::load_project(env, project_id).ok_or(Error::NotFound)?;

    if env.block_height() < project.deadline {
        return Err(Error::TooEarly);
    }

    if project.approval_state != ApprovalState::Rejected {
        return Err(Error::NotRejected);
    }

    let amount = storage::contribution_of(env, project_id, contributor);
    if amount <= 0 || storage::is_refunded(env, project_id, contributor) {
        return Err(Error::NothingToRefund);
    }

    let refunded = project
        .total_refunded
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    let contract_address = env.current_contract_address();
    token::transfer(env, &config.token, &contract_address, contributor, &amount);

    project.total_refunded = refunded;
    storage::save_project(env, &project);
    storage::mark_refunded(env, project_id, contributor);

    ContributionRefundedEvent {
        contributor: contributor.clone(),
        project_id,
        amount,
    }
    .publish(env);

    Ok(amount)
}

pub fn contribution_of(env: &Env, project_id: u64, contributor: &Address) -> i128 {
    storage::contribution_of(env, project_id, contributor)
}
