use soroban_sdk::{contractclient, contracttype, symbol_short, Address, Env};

use crate::error::{external, VaultError};
use crate::ledger;
use crate::storage::VaultConfig;

/// Farm generation a pool lives on.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FarmRevision {
    V1,
    V2,
}

/// MasterChef-shaped farm. Depositing zero harvests; withdrawing settles
/// pending rewards.
#[contractclient(name = "FarmV1Client")]
pub trait FarmV1Interface {
    fn deposit(env: Env, from: Address, pool: u32, amount: i128);
    fn withdraw(env: Env, to: Address, pool: u32, amount: i128);
    fn emergency_withdraw(env: Env, to: Address, pool: u32);
    fn pending_reward(env: Env, pool: u32, user: Address) -> i128;
    /// `(amount, reward_debt)`
    fn user_info(env: Env, pool: u32, user: Address) -> (i128, i128);
}

/// MiniChef-shaped farm with an explicit recipient on every call and a
/// separate harvest entry point.
#[contractclient(name = "FarmV2Client")]
pub trait FarmV2Interface {
    fn deposit(env: Env, pool: u32, amount: i128, to: Address);
    fn withdraw_and_harvest(env: Env, pool: u32, amount: i128, to: Address);
    fn harvest(env: Env, pool: u32, to: Address);
    fn emergency_withdraw(env: Env, pool: u32, to: Address);
    fn pending_reward(env: Env, pool: u32, user: Address) -> i128;
    /// `(amount, reward_debt)`
    fn user_info(env: Env, pool: u32, user: Address) -> (i128, i128);
}

/// Operations the vault needs from a farm, whatever its revision.
///
/// The holder is always the vault itself.
pub trait Farm {
    /// Stakes `amount` of `lp_token` from vault custody into `pool`.
    fn deposit(&self, pool: u32, lp_token: &Address, amount: i128) -> Result<(), VaultError>;

    /// Unstakes `amount` back to the vault, settling pending rewards.
    fn withdraw(&self, pool: u32, amount: i128) -> Result<(), VaultError>;

    /// Unstakes everything, forfeiting pending rewards.
    fn emergency_withdraw(&self, pool: u32) -> Result<(), VaultError>;

    /// Claims pending rewards without touching the stake.
    fn harvest(&self, pool: u32) -> Result<(), VaultError>;

    fn pending_reward(&self, pool: u32) -> Result<i128, VaultError>;

    /// LP amount the vault currently has staked in `pool`.
    fn staked(&self, pool: u32) -> Result<i128, VaultError>;
}

pub struct FarmV1<'a> {
    env: &'a Env,
    client: FarmV1Client<'a>,
}

impl<'a> FarmV1<'a> {
    pub fn new(env: &'a Env, address: &Address) -> Self {
        Self {
            env,
            client: FarmV1Client::new(env, address),
        }
    }
}

impl Farm for FarmV1<'_> {
    fn deposit(&self, pool: u32, lp_token: &Address, amount: i128) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        ledger::approve(self.env, lp_token, &self.client.address, amount)?;
        external(
            self.env,
            symbol_short!("deposit"),
            self.client.try_deposit(&vault, &pool, &amount),
        )
    }

    fn withdraw(&self, pool: u32, amount: i128) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("withdraw"),
            self.client.try_withdraw(&vault, &pool, &amount),
        )
    }

    fn emergency_withdraw(&self, pool: u32) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("emergency"),
            self.client.try_emergency_withdraw(&vault, &pool),
        )
    }

    fn harvest(&self, pool: u32) -> Result<(), VaultError> {
        // v1 has no harvest entry point, an empty deposit pays out instead
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("harvest"),
            self.client.try_deposit(&vault, &pool, &0),
        )
    }

    fn pending_reward(&self, pool: u32) -> Result<i128, VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("pending"),
            self.client.try_pending_reward(&pool, &vault),
        )
    }

    fn staked(&self, pool: u32) -> Result<i128, VaultError> {
        let vault = self.env.current_contract_address();
        let (amount, _) = external(
            self.env,
            symbol_short!("user_info"),
            self.client.try_user_info(&pool, &vault),
        )?;
        Ok(amount)
    }
}

pub struct FarmV2<'a> {
    env: &'a Env,
    client: FarmV2Client<'a>,
}

impl<'a> FarmV2<'a> {
    pub fn new(env: &'a Env, address: &Address) -> Self {
        Self {
            env,
            client: FarmV2Client::new(env, address),
        }
    }
}

impl Farm for FarmV2<'_> {
    fn deposit(&self, pool: u32, lp_token: &Address, amount: i128) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        ledger::approve(self.env, lp_token, &self.client.address, amount)?;
        external(
            self.env,
            symbol_short!("deposit"),
            self.client.try_deposit(&pool, &amount, &vault),
        )
    }

    fn withdraw(&self, pool: u32, amount: i128) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("withdraw"),
            self.client.try_withdraw_and_harvest(&pool, &amount, &vault),
        )
    }

    fn emergency_withdraw(&self, pool: u32) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("emergency"),
            self.client.try_emergency_withdraw(&pool, &vault),
        )
    }

    fn harvest(&self, pool: u32) -> Result<(), VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("harvest"),
            self.client.try_harvest(&pool, &vault),
        )
    }

    fn pending_reward(&self, pool: u32) -> Result<i128, VaultError> {
        let vault = self.env.current_contract_address();
        external(
            self.env,
            symbol_short!("pending"),
            self.client.try_pending_reward(&pool, &vault),
        )
    }

    fn staked(&self, pool: u32) -> Result<i128, VaultError> {
        let vault = self.env.current_contract_address();
        let (amount, _) = external(
            self.env,
            symbol_short!("user_info"),
            self.client.try_user_info(&pool, &vault),
        )?;
        Ok(amount)
    }
}

/// Runs `f` against the farm selected by `revision`.
///
/// This is the only place the revision flag is inspected.
pub fn with_farm<R>(
    env: &Env,
    config: &VaultConfig,
    revision: FarmRevision,
    f: impl FnOnce(&dyn Farm) -> R,
) -> R {
    match revision {
        FarmRevision::V1 => f(&FarmV1::new(env, &config.farm_v1)),
        FarmRevision::V2 => f(&FarmV2::new(env, &config.farm_v2)),
    }
}
