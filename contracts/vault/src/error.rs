use soroban_sdk::{contracterror, log, Env, Symbol};

/// Error codes returned by every vault entry point.
///
/// Codes are grouped by kind so off-chain tooling can classify a failure
/// from the number alone: `1..=9` lifecycle and authorization, `10..=29`
/// invalid arguments, `30..=39` insufficient balance, `40..` failures
/// reported by the exchange, a farm or a token contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the vault owner
    Unauthorized = 3,

    InvalidTokenA = 10,
    InvalidTokenB = 11,
    InvalidAmountA = 12,
    InvalidAmountB = 13,
    InvalidMinAmountA = 14,
    InvalidMinAmountB = 15,
    InvalidLpToken = 16,
    InvalidAmount = 17,
    InvalidToken = 18,
    InvalidExchange = 19,
    InvalidFarmV1 = 20,
    InvalidFarmV2 = 21,
    InvalidOwner = 22,

    InsufficientBalanceTokenA = 30,
    InsufficientBalanceTokenB = 31,
    InsufficientBalance = 32,

    /// The exchange, a farm or a token contract rejected the call
    ExternalCallFailure = 40,
}

/// Collapses the nested result of a generated `try_*` client call.
///
/// Any failure on the far side (a contract error, a host error or a return
/// value that does not decode) becomes [`VaultError::ExternalCallFailure`].
pub(crate) fn external<T, C, E>(
    env: &Env,
    call: Symbol,
    result: Result<Result<T, C>, E>,
) -> Result<T, VaultError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => {
            log!(env, "external call failed: {}", call);
            Err(VaultError::ExternalCallFailure)
        }
    }
}
