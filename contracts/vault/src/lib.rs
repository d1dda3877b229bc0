//! # Farm Vault Contract
//!
//! A custodial vault that holds its owner's tokens and works two external
//! protocols on the owner's behalf: an AMM exchange that turns a token pair
//! into an LP share, and a yield farm (two incompatible revisions, v1 and v2)
//! that accepts the LP share as stake and pays a reward token.
//!
//! ## Asset Flow
//!
//! ```text
//! Add Liquidity:
//! Owner → [Vault.add_liquidity()] → approve → [Exchange.add_liquidity]
//!                                              ↓ LP minted to vault
//!                                  approve → [Farm.deposit] (stake)
//!
//! Remove Liquidity:
//! Owner → [Vault.remove_liquidity()] → [Farm.withdraw] (LP + rewards to vault)
//!                                      approve → [Exchange.remove_liquidity]
//!                                               ↓ token A + token B to vault
//!
//! Withdraw:
//! Owner → [Vault.withdraw()] → [Token.transfer] → Owner
//! ```
//!
//! ## Storage Layout
//!
//! Instance storage only:
//! - `Owner`: the single principal allowed to mutate anything
//! - `Config`: exchange, farm v1 and farm v2 addresses
//!
//! The vault never records balances or staked amounts. Balances are read
//! from the token contracts and stakes from the farms at the moment of use.
//!
//! ## Atomicity
//!
//! Every entry point returns `Result<_, VaultError>`. An error return rolls
//! back the whole invocation, including allowances granted and calls made to
//! other contracts before the failure.

#![no_std]
#![allow(clippy::too_many_arguments)]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

mod access;
mod error;
mod events;
mod exchange;
mod farm;
mod ledger;
mod storage;
mod validation;

pub use error::VaultError;
pub use events::{
    ConfigUpdatedEvent, EmergencyWithdrawEvent, HarvestEvent, InitializedEvent,
    LiquidityAddedEvent, LiquidityRemovedEvent, OwnershipTransferredEvent, WithdrawEvent,
};
pub use exchange::ExchangeClient;
pub use farm::{FarmRevision, FarmV1Client, FarmV2Client};
pub use storage::VaultConfig;

use exchange::Exchange;
use farm::{with_farm, Farm, FarmV1};
use validation::{require_min_within, require_non_zero, require_positive};

// ============================================================================
// CONTRACT
// ============================================================================

/// Farm Vault - owner-operated LP position manager
///
/// # Security Model
///
/// - Every mutating entry point takes an explicit `caller`, which must be the
///   owner and must authorize the call
/// - Zero addresses and non-positive amounts are rejected before any external
///   call is made
/// - Allowances are granted right before the call that spends them and expire
///   with the current ledger
#[contract]
pub struct FarmVault;

#[contractimpl]
impl FarmVault {
    // ==========================================================================
    // INITIALIZATION
    // ==========================================================================

    /// Initializes the vault with its owner and protocol references.
    ///
    /// Must be called exactly once after deployment, signed by `owner`.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `owner` - Principal that will operate the vault
    /// * `exchange` - AMM router address
    /// * `farm_v1` - MasterChef-style farm address
    /// * `farm_v2` - MiniChef-style farm address
    ///
    /// # Errors
    /// - `AlreadyInitialized` on a second call
    /// - `InvalidOwner`, `InvalidExchange`, `InvalidFarmV1`, `InvalidFarmV2`
    ///   for a zero address
    ///
    /// # Panics
    /// If `owner` has not authorized the call
    ///
    /// # Events
    /// Emits `InitializedEvent`
    pub fn initialize(
        env: Env,
        owner: Address,
        exchange: Address,
        farm_v1: Address,
        farm_v2: Address,
    ) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        require_non_zero(&env, &owner, VaultError::InvalidOwner)?;
        require_non_zero(&env, &exchange, VaultError::InvalidExchange)?;
        require_non_zero(&env, &farm_v1, VaultError::InvalidFarmV1)?;
        require_non_zero(&env, &farm_v2, VaultError::InvalidFarmV2)?;
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_config(
            &env,
            &VaultConfig {
                exchange: exchange.clone(),
                farm_v1: farm_v1.clone(),
                farm_v2: farm_v2.clone(),
            },
        );
        storage::extend_instance_ttl(&env);

        events::initialized(
            &env,
            InitializedEvent {
                owner,
                exchange,
                farm_v1,
                farm_v2,
            },
        );
        Ok(())
    }

    // ==========================================================================
    // CORE - ADD LIQUIDITY
    // ==========================================================================

    /// Pools `token_a` and `token_b` on the exchange and stakes the LP minted
    /// into `pool` on the farm selected by `revision`.
    ///
    /// Preconditions are checked in order and the first failure is returned.
    /// The exchange may consume less than the desired amounts; the remainder
    /// stays in the vault.
    ///
    /// # Arguments
    /// * `caller` - Must be the owner
    /// * `token_a`, `token_b` - Pair to pool
    /// * `amount_a_desired`, `amount_b_desired` - Upper bounds taken from custody
    /// * `amount_a_min`, `amount_b_min` - Slippage floors, enforced by the exchange
    /// * `pool` - Farm pool id for the LP token
    /// * `revision` - Farm generation hosting `pool`
    ///
    /// # Returns
    /// `(lp_token, staked_amount)`
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidTokenA`, `InvalidTokenB` for zero addresses
    /// - `InvalidAmountA`, `InvalidAmountB` for non-positive desired amounts
    /// - `InvalidMinAmountA`, `InvalidMinAmountB` if a minimum exceeds its desired amount
    /// - `InsufficientBalanceTokenA`, `InsufficientBalanceTokenB` if custody is short
    /// - `ExternalCallFailure` if the exchange or the farm rejects the call
    ///
    /// # Events
    /// Emits `LiquidityAddedEvent`
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        pool: u32,
        revision: FarmRevision,
    ) -> Result<(Address, i128), VaultError> {
        access::require_owner(&env, &caller)?;

        require_non_zero(&env, &token_a, VaultError::InvalidTokenA)?;
        require_non_zero(&env, &token_b, VaultError::InvalidTokenB)?;
        require_positive(amount_a_desired, VaultError::InvalidAmountA)?;
        require_positive(amount_b_desired, VaultError::InvalidAmountB)?;
        require_min_within(amount_a_min, amount_a_desired, VaultError::InvalidMinAmountA)?;
        require_min_within(amount_b_min, amount_b_desired, VaultError::InvalidMinAmountB)?;
        Self::require_balance(&env, &token_a, amount_a_desired, VaultError::InsufficientBalanceTokenA)?;
        Self::require_balance(&env, &token_b, amount_b_desired, VaultError::InsufficientBalanceTokenB)?;

        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let deposit = Exchange::new(&env, &config.exchange).add_liquidity(
            &token_a,
            &token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        )?;

        with_farm(&env, &config, revision, |farm| {
            farm.deposit(pool, &deposit.lp_token, deposit.liquidity)
        })?;

        events::liquidity_added(
            &env,
            LiquidityAddedEvent {
                lp_token: deposit.lp_token.clone(),
                amount_a: deposit.amount_a,
                amount_b: deposit.amount_b,
                staked: deposit.liquidity,
                pool,
                revision,
            },
        );

        Ok((deposit.lp_token, deposit.liquidity))
    }

    // ==========================================================================
    // CORE - REMOVE LIQUIDITY
    // ==========================================================================

    /// Unstakes `amount` of LP from `pool` and redeems it on the exchange.
    ///
    /// The farm withdrawal settles pending rewards into the vault. No output
    /// minimum is applied here; the exchange fails the call if it cannot
    /// redeem.
    ///
    /// # Returns
    /// `(amount_a, amount_b)` credited to the vault, in the pair's order
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidLpToken` for a zero address
    /// - `InvalidAmount` for a non-positive amount
    /// - `ExternalCallFailure` if the farm or the exchange rejects the call
    ///
    /// # Events
    /// Emits `LiquidityRemovedEvent`
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        lp_token: Address,
        amount: i128,
        pool: u32,
        revision: FarmRevision,
    ) -> Result<(i128, i128), VaultError> {
        access::require_owner(&env, &caller)?;

        require_non_zero(&env, &lp_token, VaultError::InvalidLpToken)?;
        require_positive(amount, VaultError::InvalidAmount)?;

        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        with_farm(&env, &config, revision, |farm| farm.withdraw(pool, amount))?;
        let (amount_a, amount_b) =
            Exchange::new(&env, &config.exchange).remove_liquidity(&lp_token, amount)?;

        events::liquidity_removed(
            &env,
            LiquidityRemovedEvent {
                lp_token,
                liquidity: amount,
                amount_a,
                amount_b,
                pool,
                revision,
            },
        );

        Ok((amount_a, amount_b))
    }

    // ==========================================================================
    // CORE - EMERGENCY WITHDRAW
    // ==========================================================================

    /// Pulls the whole stake out of `pool` without collecting rewards.
    ///
    /// Meant for a farm or exchange that is suspected broken: pending rewards
    /// are forfeited and the LP token stays an LP token in vault custody.
    ///
    /// # Returns
    /// The LP amount returned to the vault
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `ExternalCallFailure` if the farm rejects the call
    ///
    /// # Events
    /// Emits `EmergencyWithdrawEvent`
    pub fn emergency_withdraw(
        env: Env,
        caller: Address,
        pool: u32,
        revision: FarmRevision,
    ) -> Result<i128, VaultError> {
        access::require_owner(&env, &caller)?;

        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let amount = with_farm(&env, &config, revision, |farm| {
            let staked = farm.staked(pool)?;
            farm.emergency_withdraw(pool)?;
            Ok::<i128, VaultError>(staked)
        })?;

        events::emergency_withdrawn(
            &env,
            EmergencyWithdrawEvent {
                pool,
                revision,
                amount,
            },
        );

        Ok(amount)
    }

    // ==========================================================================
    // CORE - HARVEST
    // ==========================================================================

    /// Claims pending farm-v1 rewards for `pool` into the vault.
    ///
    /// Only the v1 farm is reachable here. v2 rewards are collected when a
    /// v2 stake is withdrawn through `remove_liquidity`.
    ///
    /// # Returns
    /// The reward amount that was pending before the harvest
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `ExternalCallFailure` if the farm rejects the call
    ///
    /// # Events
    /// Emits `HarvestEvent`
    pub fn harvest_rewards(env: Env, caller: Address, pool: u32) -> Result<i128, VaultError> {
        access::require_owner(&env, &caller)?;

        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let farm = FarmV1::new(&env, &config.farm_v1);
        let reward = farm.pending_reward(pool)?;
        farm.harvest(pool)?;

        events::harvested(&env, HarvestEvent { pool, reward });

        Ok(reward)
    }

    // ==========================================================================
    // CUSTODY - WITHDRAW
    // ==========================================================================

    /// Sends `amount` of `token` from the vault to the owner.
    ///
    /// Works for any token the vault holds: leftovers of a pool deposit,
    /// redeemed underlying tokens, harvested rewards or unstaked LP.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidToken` for a zero address
    /// - `InvalidAmount` for a non-positive amount
    /// - `InsufficientBalance` if the vault holds less than `amount`
    ///
    /// # Events
    /// Emits `WithdrawEvent`
    pub fn withdraw(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), VaultError> {
        access::require_owner(&env, &caller)?;

        require_non_zero(&env, &token, VaultError::InvalidToken)?;
        require_positive(amount, VaultError::InvalidAmount)?;
        Self::require_balance(&env, &token, amount, VaultError::InsufficientBalance)?;

        storage::extend_instance_ttl(&env);
        ledger::transfer(&env, &token, &caller, amount)?;

        events::withdrawn(
            &env,
            WithdrawEvent {
                token,
                to: caller,
                amount,
            },
        );
        Ok(())
    }

    // ==========================================================================
    // ADMINISTRATIVE - CONFIGURATION
    // ==========================================================================

    /// Replaces the exchange reference.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidExchange` for a zero address; the previous value is kept
    pub fn set_exchange(env: Env, caller: Address, exchange: Address) -> Result<(), VaultError> {
        access::require_owner(&env, &caller)?;
        require_non_zero(&env, &exchange, VaultError::InvalidExchange)?;

        let mut config = storage::get_config(&env)?;
        let old = core::mem::replace(&mut config.exchange, exchange.clone());
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        events::config_updated(&env, symbol_short!("exchange"), old, exchange);
        Ok(())
    }

    /// Replaces the farm v1 reference.
    ///
    /// Stakes held under the previous farm are not moved and can only be
    /// reached again by restoring the old address.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidFarmV1` for a zero address; the previous value is kept
    pub fn set_farm_v1(env: Env, caller: Address, farm: Address) -> Result<(), VaultError> {
        access::require_owner(&env, &caller)?;
        require_non_zero(&env, &farm, VaultError::InvalidFarmV1)?;

        let mut config = storage::get_config(&env)?;
        let old = core::mem::replace(&mut config.farm_v1, farm.clone());
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        events::config_updated(&env, symbol_short!("farm_v1"), old, farm);
        Ok(())
    }

    /// Replaces the farm v2 reference. Same caveat as `set_farm_v1`.
    pub fn set_farm_v2(env: Env, caller: Address, farm: Address) -> Result<(), VaultError> {
        access::require_owner(&env, &caller)?;
        require_non_zero(&env, &farm, VaultError::InvalidFarmV2)?;

        let mut config = storage::get_config(&env)?;
        let old = core::mem::replace(&mut config.farm_v2, farm.clone());
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        events::config_updated(&env, symbol_short!("farm_v2"), old, farm);
        Ok(())
    }

    /// Hands the vault over to `new_owner`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidOwner` for a zero address
    ///
    /// # Events
    /// Emits `OwnershipTransferredEvent`
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VaultError> {
        access::require_owner(&env, &caller)?;
        require_non_zero(&env, &new_owner, VaultError::InvalidOwner)?;

        storage::set_owner(&env, &new_owner);
        storage::extend_instance_ttl(&env);

        events::ownership_transferred(&env, caller, new_owner);
        Ok(())
    }

    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    /// Current owner.
    pub fn owner(env: Env) -> Result<Address, VaultError> {
        storage::get_owner(&env)
    }

    /// AMM router used for add and remove liquidity.
    pub fn exchange(env: Env) -> Result<Address, VaultError> {
        Ok(storage::get_config(&env)?.exchange)
    }

    /// Farm reached by `FarmRevision::V1` and by `harvest_rewards`.
    pub fn farm_v1(env: Env) -> Result<Address, VaultError> {
        Ok(storage::get_config(&env)?.farm_v1)
    }

    /// Farm reached by `FarmRevision::V2`.
    pub fn farm_v2(env: Env) -> Result<Address, VaultError> {
        Ok(storage::get_config(&env)?.farm_v2)
    }

    /// All three protocol references at once.
    pub fn config(env: Env) -> Result<VaultConfig, VaultError> {
        storage::get_config(&env)
    }

    /// Live vault balance of `token`.
    pub fn balance(env: Env, token: Address) -> Result<i128, VaultError> {
        require_non_zero(&env, &token, VaultError::InvalidToken)?;
        ledger::vault_balance(&env, &token)
    }

    /// LP amount the vault has staked in `pool`, as reported by the farm.
    pub fn staked(env: Env, pool: u32, revision: FarmRevision) -> Result<i128, VaultError> {
        let config = storage::get_config(&env)?;
        with_farm(&env, &config, revision, |farm| farm.staked(pool))
    }

    /// Reward the farm would pay the vault for `pool` right now.
    pub fn pending_reward(
        env: Env,
        pool: u32,
        revision: FarmRevision,
    ) -> Result<i128, VaultError> {
        let config = storage::get_config(&env)?;
        with_farm(&env, &config, revision, |farm| farm.pending_reward(pool))
    }

    // ==========================================================================
    // INTERNAL VALIDATION HELPERS
    // ==========================================================================

    /// Validates that the vault holds at least `amount` of `token`.
    fn require_balance(
        env: &Env,
        token: &Address,
        amount: i128,
        err: VaultError,
    ) -> Result<(), VaultError> {
        let balance = ledger::vault_balance(env, token)?;
        if balance < amount {
            soroban_sdk::log!(env, "insufficient balance: {} < {}", balance, amount);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod mock;
