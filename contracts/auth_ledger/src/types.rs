use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owners,
    Owner(Address),
    Threshold,
    Asset,
    TxCount,
    Transaction(u64),
    Approval(u64, Address),
    ReturnData(u64),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExecutionStatus {
    Pending,
    Succeeded,
    Failed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub target: Address,
    pub value: i128,
    pub payload: Bytes,
    pub executed: bool,
    pub approval_count: u32,
    pub status: ExecutionStatus,
}

/// Result of the one execution attempt a transaction gets.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExecutionOutcome {
    Succeeded(Bytes),
    Failed,
}
