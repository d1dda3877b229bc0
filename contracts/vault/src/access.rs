use soroban_sdk::{Address, Env};

use crate::error::VaultError;
use crate::storage;

/// Gate for every mutating entry point.
///
/// The identity check runs before `require_auth` so a non-owner is rejected
/// with [`VaultError::Unauthorized`] whatever it signed, and nothing past
/// this point (storage writes, external calls) is reached.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), VaultError> {
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(VaultError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}
