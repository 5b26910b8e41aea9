use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Bytes, Env, IntoVal, Val, Vec,
};

use crate::errors::LedgerError;
use crate::events;
use crate::target;
use crate::types::{DataKey, ExecutionOutcome, ExecutionStatus, Transaction};

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BUMP_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct AuthorizationLedger;

#[contractimpl]
impl AuthorizationLedger {
    /// Fixes the owner committee, the approval threshold and the asset that
    /// transaction values are paid in. None of them can change afterwards.
    pub fn __constructor(env: Env, owners: Vec<Address>, required_approvals: u32, asset: Address) {
        if owners.is_empty() {
            panic_with_error!(&env, LedgerError::InvalidConfiguration);
        }

        if required_approvals == 0 || required_approvals > owners.len() {
            panic_with_error!(&env, LedgerError::InvalidConfiguration);
        }

        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    panic_with_error!(&env, LedgerError::InvalidConfiguration);
                }
            }
        }

        for owner in owners.iter() {
            env.storage().instance().set(&DataKey::Owner(owner), &true);
        }
        env.storage().instance().set(&DataKey::Owners, &owners);
        env.storage().instance().set(&DataKey::Threshold, &required_approvals);
        env.storage().instance().set(&DataKey::Asset, &asset);
        env.storage().instance().set(&DataKey::TxCount, &0u64);
        bump_instance(&env);

        log!(&env, "ledger created owners={} threshold={}", owners.len(), required_approvals);
    }

    /// Anyone may fund the ledger with its asset.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let ledger = env.current_contract_address();
        let token = token::Client::new(&env, &Self::asset(env.clone()));
        token.transfer(&from, &ledger, &amount);
        bump_instance(&env);

        events::emit_deposited(&env, &from, amount, token.balance(&ledger));
        Ok(())
    }

    /// Records a new pending transaction and returns its index. Submitting
    /// does not count as an approval.
    pub fn submit(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        payload: Bytes,
    ) -> Result<u64, LedgerError> {
        Self::require_owner(&env, &caller)?;

        if value < 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let tx_index = Self::transaction_count(env.clone());
        let tx = Transaction {
            target: target.clone(),
            value,
            payload: payload.clone(),
            executed: false,
            approval_count: 0,
            status: ExecutionStatus::Pending,
        };

        Self::store_transaction(&env, tx_index, &tx);
        env.storage().instance().set(&DataKey::TxCount, &(tx_index + 1));

        events::emit_submitted(&env, &caller, tx_index, &target, value, &payload);
        log!(&env, "submit tx={} by {}", tx_index, caller);

        Ok(tx_index)
    }

    pub fn approve(env: Env, caller: Address, tx_index: u64) -> Result<(), LedgerError> {
        Self::require_owner(&env, &caller)?;

        let mut tx = Self::load_transaction(&env, tx_index)?;
        if tx.executed {
            return Err(LedgerError::AlreadyExecuted);
        }

        let key = DataKey::Approval(tx_index, caller.clone());
        if Self::has_approved(&env, &key) {
            return Err(LedgerError::AlreadyApproved);
        }

        store_persistent(&env, &key, &true);
        tx.approval_count += 1;
        Self::store_transaction(&env, tx_index, &tx);

        events::emit_approved(&env, &caller, tx_index, tx.approval_count);
        log!(&env, "approve tx={} by {} count={}", tx_index, caller, tx.approval_count);

        Ok(())
    }

    /// Withdraws the caller's approval. Allowed after execution too, where
    /// it only changes the approval bookkeeping.
    pub fn revoke(env: Env, caller: Address, tx_index: u64) -> Result<(), LedgerError> {
        Self::require_owner(&env, &caller)?;

        let mut tx = Self::load_transaction(&env, tx_index)?;

        let key = DataKey::Approval(tx_index, caller.clone());
        if !Self::has_approved(&env, &key) {
            return Err(LedgerError::NotApproved);
        }

        env.storage().persistent().remove(&key);
        tx.approval_count -= 1;
        Self::store_transaction(&env, tx_index, &tx);

        events::emit_revoked(&env, &caller, tx_index, tx.approval_count);
        log!(&env, "revoke tx={} by {} count={}", tx_index, caller, tx.approval_count);

        Ok(())
    }

    /// Makes the one and only call a transaction is entitled to.
    ///
    /// The record is written as executed before the target is invoked, and
    /// stays executed when the target fails. A failed call is reported as
    /// [`ExecutionOutcome::Failed`] rather than an error so that the spent
    /// flag is committed with it.
    pub fn execute(env: Env, caller: Address, tx_index: u64) -> Result<ExecutionOutcome, LedgerError> {
        Self::require_owner(&env, &caller)?;

        let mut tx = Self::load_transaction(&env, tx_index)?;
        if tx.executed {
            return Err(LedgerError::AlreadyExecuted);
        }

        if tx.approval_count < Self::threshold(env.clone()) {
            return Err(LedgerError::InsufficientApprovals);
        }

        tx.executed = true;
        Self::store_transaction(&env, tx_index, &tx);

        let result = target::dispatch(&env, &Self::asset(env.clone()), &tx);

        // Re-read: the record may have been touched while the target ran.
        let mut tx = Self::load_transaction(&env, tx_index)?;
        let outcome = match result {
            Some(data) => {
                tx.status = ExecutionStatus::Succeeded;
                store_persistent(&env, &DataKey::ReturnData(tx_index), &data);
                events::emit_executed(&env, &caller, tx_index);
                log!(&env, "execute tx={} by {} succeeded", tx_index, caller);
                ExecutionOutcome::Succeeded(data)
            }
            None => {
                tx.status = ExecutionStatus::Failed;
                events::emit_call_failed(&env, &caller, tx_index);
                log!(&env, "execute tx={} by {} failed", tx_index, caller);
                ExecutionOutcome::Failed
            }
        };
        Self::store_transaction(&env, tx_index, &tx);

        Ok(outcome)
    }

    pub fn owner(env: Env, index: u32) -> Result<Address, LedgerError> {
        Self::owners(env).get(index).ok_or(LedgerError::IndexOutOfRange)
    }

    pub fn owners(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Owners)
            .unwrap_or(Vec::new(&env))
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        env.storage().instance().has(&DataKey::Owner(address))
    }

    pub fn threshold(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Threshold).unwrap()
    }

    pub fn asset(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Asset).unwrap()
    }

    /// The ledger's own holding of its asset.
    pub fn balance(env: Env) -> i128 {
        token::Client::new(&env, &Self::asset(env.clone())).balance(&env.current_contract_address())
    }

    pub fn transaction(env: Env, tx_index: u64) -> Result<Transaction, LedgerError> {
        Self::load_transaction(&env, tx_index)
    }

    pub fn transaction_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TxCount)
            .unwrap_or(0u64)
    }

    pub fn is_approved(env: Env, tx_index: u64, owner: Address) -> Result<bool, LedgerError> {
        Self::load_transaction(&env, tx_index)?;
        Ok(Self::has_approved(&env, &DataKey::Approval(tx_index, owner)))
    }

    /// Data returned by the target of an executed transaction.
    pub fn return_data(env: Env, tx_index: u64) -> Result<Bytes, LedgerError> {
        let tx = Self::load_transaction(&env, tx_index)?;
        match tx.status {
            ExecutionStatus::Pending => Err(LedgerError::NotExecuted),
            ExecutionStatus::Failed => Err(LedgerError::ExecutionFailed),
            ExecutionStatus::Succeeded => Ok(env
                .storage()
                .persistent()
                .get(&DataKey::ReturnData(tx_index))
                .unwrap_or(Bytes::new(&env))),
        }
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), LedgerError> {
        caller.require_auth();
        if !env.storage().instance().has(&DataKey::Owner(caller.clone())) {
            return Err(LedgerError::NotAuthorized);
        }
        bump_instance(env);
        Ok(())
    }

    fn load_transaction(env: &Env, tx_index: u64) -> Result<Transaction, LedgerError> {
        env.storage()
            .persistent()
            .get(&DataKey::Transaction(tx_index))
            .ok_or(LedgerError::UnknownTransaction)
    }

    fn store_transaction(env: &Env, tx_index: u64, tx: &Transaction) {
        store_persistent(env, &DataKey::Transaction(tx_index), tx);
    }

    fn has_approved(env: &Env, key: &DataKey) -> bool {
        env.storage().persistent().get(key).unwrap_or(false)
    }
}

// Keeps owners, threshold, asset and the contract itself live.
fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn store_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage().persistent().extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}
