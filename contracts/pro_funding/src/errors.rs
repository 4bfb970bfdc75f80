use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    NotActivated = 2,
    InvalidInput = 3,
    NotFound = 4,
    Expired = 5,
    TooEarly = 6,
    AlreadyWithdrawn = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
    AlreadyActivated = 10,
    ProjectRejected = 11,
    NotRejected = 12,
    NothingToRefund = 13,
    Overflow = 14,
}
