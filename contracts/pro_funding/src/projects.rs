use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::clock::BlockHeight;
use crate::config::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::errors::Error;
use crate::events::ProjectRegisteredEvent;
use crate::storage::{self, ApprovalState, Project};

/// Registers a project owned by `owner` and returns its id.
///
/// The deadline is `deadline_offset` ledgers past the current height. Ids are
/// handed out from a single counter, starting at 1, in registration order.
pub fn register(
    env: &Env,
    owner: &Address,
    title: String,
    description: String,
    funding_goal: i128,
    deadline_offset: u32,
) -> Result<u64, Error> {
    access::require_member(env, owner)?;
    let config = storage::get_config(env)?;

    validate_title(&title)?;
    validate_description(&description)?;

    if funding_goal <= 0 {
        log!(env, "funding goal must be positive", funding_goal);
        return Err(Error::InvalidInput);
    }

    if deadline_offset == 0 || deadline_offset > config.max_deadline_offset {
        log!(env, "deadline offset out of range", deadline_offset);
        return Err(Error::InvalidInput);
    }

    let created_at = env.block_height();
    let deadline = created_at
        .checked_add(deadline_offset)
        .ok_or(Error::Overflow)?;

    let project_id = storage::next_project_id(env);
    let next_id = project_id.checked_add(1).ok_or(Error::Overflow)?;

    let project = Project {
        id: project_id,
        owner: owner.clone(),
        title,
        description,
        funding_goal,
        created_at,
        deadline,
        total_contributed: 0,
        total_refunded: 0,
        votes_for: 0,
        votes_against: 0,
        quorum: config.quorum,
        approval_state: ApprovalState::Pending,
        withdrawn: false,
    };

    storage::save_project(env, &project);
    storage::set_next_project_id(env, next_id);

    ProjectRegisteredEvent {
        owner: owner.clone(),
        project_id,
        funding_goal,
        deadline,
    }
    .publish(env);

    Ok(project_id)
}

pub fn details(env: &Env, project_id: u64) -> Option<Project> {
    storage::load_project(env, project_id)
}

fn validate_title(title: &String) -> Result<(), Error> {
    let len = title.len();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(Error::InvalidInput);
    }

    let mut buf = [0u8; MAX_TITLE_LEN as usize];
    let bytes = &mut buf[..len as usize];
    title.copy_into_slice(bytes);
    if !bytes.is_ascii() {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

fn validate_description(description: &String) -> Result<(), Error> {
    let len = description.len();
    if len > MAX_DESCRIPTION_LEN {
        return Err(Error::InvalidInput);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);
    core::str::from_utf8(bytes).map_err(|_| Error::InvalidInput)?;
    Ok(())
}
