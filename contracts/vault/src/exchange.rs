#![allow(clippy::too_many_arguments)]

use soroban_sdk::{contractclient, symbol_short, Address, Env};

use crate::error::{external, VaultError};
use crate::ledger;

/// Router interface of the AMM.
///
/// Funds are pulled from `to` with `transfer_from`, so the caller grants an
/// allowance to the router before each call.
#[contractclient(name = "ExchangeClient")]
pub trait ExchangeInterface {
    fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);

    fn remove_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128);

    /// LP token minted for the `(token_a, token_b)` pair
    fn lp_token(env: Env, token_a: Address, token_b: Address) -> Address;

    /// Underlying pair of an LP token
    fn pair_tokens(env: Env, lp_token: Address) -> (Address, Address);
}

/// Amounts consumed by a successful add-liquidity call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub lp_token: Address,
    pub amount_a: i128,
    pub amount_b: i128,
    pub liquidity: i128,
}

pub struct Exchange<'a> {
    env: &'a Env,
    client: ExchangeClient<'a>,
}

impl<'a> Exchange<'a> {
    pub fn new(env: &'a Env, address: &Address) -> Self {
        Self {
            env,
            client: ExchangeClient::new(env, address),
        }
    }

    /// Pools `token_a`/`token_b` from vault custody. Minimums are enforced by
    /// the exchange; whatever it does not consume stays in the vault.
    pub fn add_liquidity(
        &self,
        token_a: &Address,
        token_b: &Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
    ) -> Result<Deposit, VaultError> {
        let env = self.env;
        let vault = env.current_contract_address();
        let router = self.client.address.clone();

        ledger::approve(env, token_a, &router, amount_a_desired)?;
        ledger::approve(env, token_b, &router, amount_b_desired)?;
        let (amount_a, amount_b, liquidity) = external(
            env,
            symbol_short!("add_liq"),
            self.client.try_add_liquidity(
                token_a,
                token_b,
                &amount_a_desired,
                &amount_b_desired,
                &amount_a_min,
                &amount_b_min,
                &vault,
                &env.ledger().timestamp(),
            ),
        )?;

        let lp_token = external(
            env,
            symbol_short!("lp_token"),
            self.client.try_lp_token(token_a, token_b),
        )?;

        Ok(Deposit {
            lp_token,
            amount_a,
            amount_b,
            liquidity,
        })
    }

    /// Redeems `liquidity` of `lp_token` held by the vault for its two
    /// underlying tokens. Returns `(amount_a, amount_b)` in pair order.
    pub fn remove_liquidity(
        &self,
        lp_token: &Address,
        liquidity: i128,
    ) -> Result<(i128, i128), VaultError> {
        let env = self.env;
        let vault = env.current_contract_address();
        let router = self.client.address.clone();

        let (token_a, token_b) = external(
            env,
            symbol_short!("pair"),
            self.client.try_pair_tokens(lp_token),
        )?;

        ledger::approve(env, lp_token, &router, liquidity)?;
        external(
            env,
            symbol_short!("rem_liq"),
            self.client.try_remove_liquidity(
                &token_a,
                &token_b,
                &liquidity,
                &0,
                &0,
                &vault,
                &env.ledger().timestamp(),
            ),
        )
    }
}
