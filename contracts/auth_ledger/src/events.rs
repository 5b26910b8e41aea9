//! Events published by the ledger on every state change.
//!
//! Each event is a `#[contractevent]` struct: the snake_case struct name is
//! the leading topic, `#[topic]` fields follow it, and the remaining fields
//! form the data map.
use soroban_sdk::{contractevent, Address, Bytes, Env};

#[contractevent]
#[derive(Clone, Debug)]
pub struct Deposited {
    #[topic]
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Submitted {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
    pub target: Address,
    pub value: i128,
    pub payload: Bytes,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Approved {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
    pub approval_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Revoked {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
    pub approval_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Executed {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
}

/// The transaction is spent but its target call did not succeed.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CallFailed {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
}

pub fn emit_deposited(env: &Env, from: &Address, amount: i128, balance: i128) {
    Deposited {
        from: from.clone(),
        amount,
        balance,
    }
    .publish(env);
}

pub fn emit_submitted(env: &Env, owner: &Address, tx_index: u64, target: &Address, value: i128, payload: &Bytes) {
    Submitted {
        owner: owner.clone(),
        tx_index,
        target: target.clone(),
        value,
        payload: payload.clone(),
    }
    .publish(env);
}

pub fn emit_approved(env: &Env, owner: &Address, tx_index: u64, approval_count: u32) {
    Approved {
        owner: owner.clone(),
        tx_index,
        approval_count,
    }
    .publish(env);
}

pub fn emit_revoked(env: &Env, owner: &Address, tx_index: u64, approval_count: u32) {
    Revoked {
        owner: owner.clone(),
        tx_index,
        approval_count,
    }
    .publish(env);
}

pub fn emit_executed(env: &Env, owner: &Address, tx_index: u64) {
    Executed {
        owner: owner.clone(),
        tx_index,
    }
    .publish(env);
}

pub fn emit_call_failed(env: &Env, owner: &Address, tx_index: u64) {
    CallFailed {
        owner: owner.clone(),
        tx_index,
    }
    .publish(env);
}
