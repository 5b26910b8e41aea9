use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    InvalidConfiguration = 1,
    NotAuthorized = 2,
    UnknownTransaction = 3,
    AlreadyApproved = 4,
    NotApproved = 5,
    AlreadyExecuted = 6,
    InsufficientApprovals = 7,
    /// The single execution attempt reached the target and the call failed.
    ExecutionFailed = 8,
    IndexOutOfRange = 9,
    InvalidAmount = 10,
    NotExecuted = 11,
}
