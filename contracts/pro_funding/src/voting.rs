use core::cmp::Ordering;

use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::clock::BlockHeight;
use crate::errors::Error;
use crate::events::VoteCastEvent;
use crate::storage::{self, ApprovalState};

/// Records `voter`'s single vote on a project and re-derives its approval state.
///
/// Voting closes at the project deadline. A second vote from the same voter
/// is rejected and the first one stands. The tally always uses the quorum the
/// project was registered under, so later config changes leave it untouched.
pub fn cast(
    env: &Env,
    voter: &Address,
    project_id: u64,
    approve: bool,
) -> Result<ApprovalState, Error> {
    access::require_member(env, voter)?;

    let mut project = storage::load_project(env, project_id).ok_or(Error::NotFound)?;

    if env.block_height() >= project.deadline {
        log!(env, "voting closed", project_id);
        return Err(Error::Expired);
    }

    if storage::vote_of(env, project_id, voter).is_some() {
        log!(env, "duplicate vote", project_id, voter.clone());
        return Err(Error::InvalidInput);
    }

    if approve {
        project.votes_for = project.votes_for.checked_add(1).ok_or(Error::Overflow)?;
    } else {
        project.votes_against = project
            .votes_against
            .checked_add(1)
            .ok_or(Error::Overflow)?;
    }
    project.approval_state = tally(project.votes_for, project.votes_against, project.quorum);

    storage::record_vote(env, project_id, voter, approve);
    storage::save_project(env, &project);

    VoteCastEvent {
        voter: voter.clone(),
        project_id,
        approve,
        approval_state: project.approval_state,
    }
    .publish(env);

    Ok(project.approval_state)
}

/// Simple majority once `quorum` votes are in; a tie stays pending.
pub fn tally(votes_for: u32, votes_against: u32, quorum: u32) -> ApprovalState {
    if votes_for.saturating_add(votes_against) < quorum {
        return ApprovalState::Pending;
    }
    match votes_for.cmp(&votes_against) {
        Ordering::Greater => ApprovalState::Approved,
        Ordering::Less => ApprovalState::Rejected,
        Ordering::Equal => ApprovalState::Pending,
    }
}

pub fn vote_of(env: &Env, project_id: u64, voter: &Address) -> Option<bool> {
    storage::vote_of(env, project_id, voter)
}
