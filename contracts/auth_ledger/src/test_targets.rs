#![cfg(test)]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, Address, Bytes, Env, InvokeError,
    Symbol,
};

use crate::multisig::AuthorizationLedgerClient;
use crate::target::CallableTarget;

const COUNT: Symbol = symbol_short!("count");
const ASSET: Symbol = symbol_short!("asset");
const LEDGER: Symbol = symbol_short!("ledger");
const OWNER: Symbol = symbol_short!("owner");
const TX: Symbol = symbol_short!("tx");
const REENTRY: Symbol = symbol_short!("reentry");

/// Recorded by `ReentrantTarget` when the host aborted its inner call
/// instead of letting it reach the ledger.
pub const REENTRY_ABORTED: u32 = u32::MAX;

// Counts how many times it has been called.
#[contract]
pub struct CounterTarget;

#[contractimpl]
impl CallableTarget for CounterTarget {
    fn invoke(env: Env, _from: Address, _value: i128, _payload: Bytes) -> Bytes {
        let count: u32 = env.storage().instance().get(&COUNT).unwrap_or(0) + 1;
        env.storage().instance().set(&COUNT, &count);
        Bytes::from_array(&env, &count.to_be_bytes())
    }
}

#[contractimpl]
impl CounterTarget {
    pub fn count(env: Env) -> u32 {
        env.storage().instance().get(&COUNT).unwrap_or(0)
    }
}

// Counts calls and returns nothing.
#[contract]
pub struct VoidTarget;

#[contractimpl]
impl VoidTarget {
    pub fn invoke(env: Env, _from: Address, _value: i128, _payload: Bytes) {
        let count: u32 = env.storage().instance().get(&COUNT).unwrap_or(0) + 1;
        env.storage().instance().set(&COUNT, &count);
    }

    pub fn count(env: Env) -> u32 {
        env.storage().instance().get(&COUNT).unwrap_or(0)
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TargetError {
    Rejected = 1,
}

// Always fails.
#[contract]
pub struct FailingTarget;

#[contractimpl]
impl CallableTarget for FailingTarget {
    fn invoke(env: Env, _from: Address, _value: i128, _payload: Bytes) -> Bytes {
        panic_with_error!(&env, TargetError::Rejected);
    }
}

// Pulls the value it was granted.
#[contract]
pub struct CollectorTarget;

#[contractimpl]
impl CallableTarget for CollectorTarget {
    fn invoke(env: Env, from: Address, value: i128, _payload: Bytes) -> Bytes {
        let asset: Address = env.storage().instance().get(&ASSET).unwrap();
        let me = env.current_contract_address();
        token::Client::new(&env, &asset).transfer_from(&me, &from, &me, &value);
        Bytes::new(&env)
    }
}

#[contractimpl]
impl CollectorTarget {
    pub fn init(env: Env, asset: Address) {
        env.storage().instance().set(&ASSET, &asset);
    }
}

// Tries to execute a ledger transaction again from inside the call.
#[contract]
pub struct ReentrantTarget;

#[contractimpl]
impl CallableTarget for ReentrantTarget {
    fn invoke(env: Env, _from: Address, _value: i128, _payload: Bytes) -> Bytes {
        let ledger: Address = env.storage().instance().get(&LEDGER).unwrap();
        let owner: Address = env.storage().instance().get(&OWNER).unwrap();
        let tx_index: u64 = env.storage().instance().get(&TX).unwrap();

        let attempt = AuthorizationLedgerClient::new(&env, &ledger).try_execute(&owner, &tx_index);
        let result: u32 = match attempt {
            Ok(_) => 0,
            Err(Ok(err)) => err as u32,
            Err(Err(InvokeError::Contract(code))) => code,
            Err(Err(InvokeError::Abort)) => REENTRY_ABORTED,
        };
        env.storage().instance().set(&REENTRY, &result);
        Bytes::new(&env)
    }
}

#[contractimpl]
impl ReentrantTarget {
    pub fn init(env: Env, ledger: Address, owner: Address, tx_index: u64) {
        env.storage().instance().set(&LEDGER, &ledger);
        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&TX, &tx_index);
    }

    /// 0 if the inner execute went through, the error code it got otherwise.
    pub fn reentry_result(env: Env) -> u32 {
        env.storage().instance().get(&REENTRY).unwrap_or(0)
    }
}
