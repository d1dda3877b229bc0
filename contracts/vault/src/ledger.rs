//! Thin wrappers over the token interface. Nothing here keeps state; every
//! balance is read live from the token contract.

use soroban_sdk::{symbol_short, token, Address, Env};

use crate::error::{external, VaultError};

/// Live balance of `holder` in `token`.
pub fn balance_of(env: &Env, token: &Address, holder: &Address) -> Result<i128, VaultError> {
    let client = token::Client::new(env, token);
    external(env, symbol_short!("balance"), client.try_balance(holder))
}

/// Vault's own balance of `token`.
pub fn vault_balance(env: &Env, token: &Address) -> Result<i128, VaultError> {
    balance_of(env, token, &env.current_contract_address())
}

/// Grants `spender` an allowance over the vault's `token`.
///
/// The allowance expires with the current ledger, so it can only be spent by
/// the call that immediately follows it.
pub fn approve(env: &Env, token: &Address, spender: &Address, amount: i128) -> Result<(), VaultError> {
    let client = token::Client::new(env, token);
    let expiration_ledger = env.ledger().sequence();
    external(
        env,
        symbol_short!("approve"),
        client.try_approve(
            &env.current_contract_address(),
            spender,
            &amount,
            &expiration_ledger,
        ),
    )
}

/// Moves `amount` of `token` out of vault custody.
pub fn transfer(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), VaultError> {
    let client = token::Client::new(env, token);
    external(
        env,
        symbol_short!("transfer"),
        client.try_transfer(&env.current_contract_address(), to, &amount),
    )
}
