use soroban_sdk::{contractevent, Address};

use crate::storage::ApprovalState;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractActivatedEvent {
    #[topic]
    pub admin: Address,
    pub height: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEvent {
    #[topic]
    pub admin: Address,
    pub max_deadline_offset: u32,
    pub quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberOnboardedEvent {
    #[topic]
    pub member: Address,
    pub joined_at: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberOffboardedEvent {
    #[topic]
    pub member: Address,
    pub offboarded_at: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectRegisteredEvent {
    #[topic]
    pub owner: Address,
    pub project_id: u64,
    pub funding_goal: i128,
    pub deadline: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    #[topic]
    pub voter: Address,
    #[topic]
    pub project_id: u64,
    pub approve: bool,
    pub approval_state: ApprovalState,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionEvent {
    #[topic]
    pub contributor: Address,
    #[topic]
    pub project_id: u64,
    pub amount: i128,
    pub total_contributed: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    #[topic]
    pub owner: Address,
    #[topic]
    pub project_id: u64,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRefundedEvent {
    #[topic]
    pub contributor: Address,
    #[topic]
    pub project_id: u64,
    pub amount: i128,
}
