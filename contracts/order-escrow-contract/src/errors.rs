use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    InvalidProvider = 1,
    InvalidAmount = 2,
    OrderNotFound = 3,
    Unauthorized = 4,
    InvalidOrderState = 5,
    DeadlineNotReached = 6,
    DeadlinePassed = 7,
    TransferFailed = 8,
    InsufficientFunds = 9,
}
