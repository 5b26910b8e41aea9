use soroban_sdk::{contractclient, token, Address, Bytes, Env};

use crate::types::Transaction;

/// Interface a contract exposes to be called by the ledger.
///
/// `from` is the ledger itself. When `value` is positive the ledger has
/// granted the callee an allowance of `value` on the ledger's asset for the
/// duration of the call; the callee collects it with `transfer_from`.
#[contractclient(name = "CallableTargetClient")]
pub trait CallableTarget {
    fn invoke(env: Env, from: Address, value: i128, payload: Bytes) -> Bytes;
}

/// Calls the transaction's target and returns its return data, or `None` if
/// the call failed. The callee's own writes are rolled back on failure; the
/// caller's are not. A call that succeeds without returning `Bytes` yields
/// empty return data.
pub(crate) fn dispatch(env: &Env, asset: &Address, tx: &Transaction) -> Option<Bytes> {
    let ledger = env.current_contract_address();
    let token = token::Client::new(env, asset);

    if tx.value > 0 {
        token.approve(&ledger, &tx.target, &tx.value, &env.ledger().sequence());
    }

    let result = CallableTargetClient::new(env, &tx.target).try_invoke(&ledger, &tx.value, &tx.payload);

    if tx.value > 0 {
        token.approve(&ledger, &tx.target, &0, &env.ledger().sequence());
    }

    match result {
        Ok(Ok(data)) => Some(data),
        Ok(Err(_)) => Some(Bytes::new(env)),
        Err(_) => None,
    }
}
