use soroban_sdk::{Address, Env, String};

use crate::error::VaultError;

/// All-zero ed25519 account, the Stellar stand-in for a null address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// All-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
        || *address == Address::from_string(&String::from_str(env, ZERO_CONTRACT))
}

#[inline]
pub fn require_non_zero(env: &Env, address: &Address, err: VaultError) -> Result<(), VaultError> {
    if is_zero_address(env, address) {
        return Err(err);
    }
    Ok(())
}

#[inline]
pub fn require_positive(amount: i128, err: VaultError) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(err);
    }
    Ok(())
}

/// A minimum must lie in `0..=desired`.
#[inline]
pub fn require_min_within(min: i128, desired: i128, err: VaultError) -> Result<(), VaultError> {
    if min < 0 || min > desired {
        return Err(err);
    }
    Ok(())
}
