//! Stand-in exchange and farm contracts registered in the test environment.
//!
//! Tokens are Stellar asset contracts. The exchange is admin of the LP token
//! and each farm is admin of its reward token, so they can mint.

use soroban_sdk::{contracttype, token, Address, Env};

pub use exchange::{MockExchange, MockExchangeClient};
pub use farm_v1::{MockFarmV1, MockFarmV1Client};
pub use farm_v2::{MockFarmV2, MockFarmV2Client};

// ============================================================================
// EXCHANGE
// ============================================================================

mod exchange {
    use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

    #[contracttype]
    #[derive(Clone)]
    enum ExchangeKey {
        TokenA,
        TokenB,
        Lp,
        ReserveA,
        ReserveB,
        TotalLp,
    }

    fn read_i128(env: &Env, key: &ExchangeKey) -> i128 {
        env.storage().instance().get(key).unwrap_or(0)
    }

    fn read_address(env: &Env, key: &ExchangeKey) -> Address {
        env.storage().instance().get(key).expect("exchange not set up")
    }

    /// Single-pair constant-ratio AMM.
    #[contract]
    pub struct MockExchange;

    #[contractimpl]
    impl MockExchange {
        pub fn setup(env: Env, token_a: Address, token_b: Address, lp: Address) {
            let storage = env.storage().instance();
            storage.set(&ExchangeKey::TokenA, &token_a);
            storage.set(&ExchangeKey::TokenB, &token_b);
            storage.set(&ExchangeKey::Lp, &lp);
        }

        /// Sets reserves directly. The caller mints the matching tokens to the
        /// exchange.
        pub fn seed(env: Env, reserve_a: i128, reserve_b: i128, total_lp: i128) {
            let storage = env.storage().instance();
            storage.set(&ExchangeKey::ReserveA, &reserve_a);
            storage.set(&ExchangeKey::ReserveB, &reserve_b);
            storage.set(&ExchangeKey::TotalLp, &total_lp);
        }

        pub fn add_liquidity(
            env: Env,
            token_a: Address,
            token_b: Address,
            amount_a_desired: i128,
            amount_b_desired: i128,
            amount_a_min: i128,
            amount_b_min: i128,
            to: Address,
            deadline: u64,
        ) -> (i128, i128, i128) {
            Self::check_pair(&env, &token_a, &token_b);
            assert!(deadline >= env.ledger().timestamp(), "expired");

            let reserve_a = read_i128(&env, &ExchangeKey::ReserveA);
            let reserve_b = read_i128(&env, &ExchangeKey::ReserveB);
            let total = read_i128(&env, &ExchangeKey::TotalLp);

            let (amount_a, amount_b) = if reserve_a == 0 && reserve_b == 0 {
                (amount_a_desired, amount_b_desired)
            } else {
                let b_optimal = amount_a_desired * reserve_b / reserve_a;
                if b_optimal <= amount_b_desired {
                    assert!(b_optimal >= amount_b_min, "insufficient b amount");
                    (amount_a_desired, b_optimal)
                } else {
                    let a_optimal = amount_b_desired * reserve_a / reserve_b;
                    assert!(a_optimal >= amount_a_min, "insufficient a amount");
                    (a_optimal, amount_b_desired)
                }
            };

            let liquidity = if total == 0 {
                amount_a
            } else {
                core::cmp::min(amount_a * total / reserve_a, amount_b * total / reserve_b)
            };

            let exchange = env.current_contract_address();
            token::Client::new(&env, &token_a).transfer_from(&exchange, &to, &exchange, &amount_a);
            token::Client::new(&env, &token_b).transfer_from(&exchange, &to, &exchange, &amount_b);
            let lp = read_address(&env, &ExchangeKey::Lp);
            token::StellarAssetClient::new(&env, &lp).mint(&to, &liquidity);

            Self::seed(
                env,
                reserve_a + amount_a,
                reserve_b + amount_b,
                total + liquidity,
            );
            (amount_a, amount_b, liquidity)
        }

        pub fn remove_liquidity(
            env: Env,
            token_a: Address,
            token_b: Address,
            liquidity: i128,
            amount_a_min: i128,
            amount_b_min: i128,
            to: Address,
            deadline: u64,
        ) -> (i128, i128) {
            Self::check_pair(&env, &token_a, &token_b);
            assert!(deadline >= env.ledger().timestamp(), "expired");

            let reserve_a = read_i128(&env, &ExchangeKey::ReserveA);
            let reserve_b = read_i128(&env, &ExchangeKey::ReserveB);
            let total = read_i128(&env, &ExchangeKey::TotalLp);
            let amount_a = liquidity * reserve_a / total;
            let amount_b = liquidity * reserve_b / total;
            assert!(amount_a >= amount_a_min && amount_b >= amount_b_min, "insufficient output");

            let exchange = env.current_contract_address();
            let lp = token::Client::new(&env, &read_address(&env, &ExchangeKey::Lp));
            lp.transfer_from(&exchange, &to, &exchange, &liquidity);
            lp.burn(&exchange, &liquidity);
            token::Client::new(&env, &token_a).transfer(&exchange, &to, &amount_a);
            token::Client::new(&env, &token_b).transfer(&exchange, &to, &amount_b);

            Self::seed(
                env,
                reserve_a - amount_a,
                reserve_b - amount_b,
                total - liquidity,
            );
            (amount_a, amount_b)
        }

        pub fn lp_token(env: Env, token_a: Address, token_b: Address) -> Address {
            Self::check_pair(&env, &token_a, &token_b);
            read_address(&env, &ExchangeKey::Lp)
        }

        pub fn pair_tokens(env: Env, lp_token: Address) -> (Address, Address) {
            assert!(lp_token == read_address(&env, &ExchangeKey::Lp), "unknown lp token");
            (
                read_address(&env, &ExchangeKey::TokenA),
                read_address(&env, &ExchangeKey::TokenB),
            )
        }

        fn check_pair(env: &Env, token_a: &Address, token_b: &Address) {
            assert!(
                *token_a == read_address(env, &ExchangeKey::TokenA)
                    && *token_b == read_address(env, &ExchangeKey::TokenB),
                "unknown pair"
            );
        }
    }
}

// ============================================================================
// FARMS
// ============================================================================

#[contracttype]
#[derive(Clone)]
enum FarmKey {
    Reward,
    Pool(u32),
    Stake(u32, Address),
    Pending(u32, Address),
}

fn pool_lp(env: &Env, pool: u32) -> token::Client<'_> {
    let lp: Address = env
        .storage()
        .instance()
        .get(&FarmKey::Pool(pool))
        .expect("unknown pool");
    token::Client::new(env, &lp)
}

fn read_farm(env: &Env, key: &FarmKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Pays out the pending reward of `user` in `pool`.
fn settle(env: &Env, pool: u32, user: &Address) {
    let key = FarmKey::Pending(pool, user.clone());
    let pending = read_farm(env, &key);
    if pending > 0 {
        let reward: Address = env.storage().instance().get(&FarmKey::Reward).expect("farm not set up");
        token::StellarAssetClient::new(env, &reward).mint(user, &pending);
        env.storage().instance().set(&key, &0_i128);
    }
}

fn stake(env: &Env, pool: u32, user: &Address, amount: i128) {
    let lp = pool_lp(env, pool);
    settle(env, pool, user);
    if amount > 0 {
        let farm = env.current_contract_address();
        lp.transfer_from(&farm, user, &farm, &amount);
        let key = FarmKey::Stake(pool, user.clone());
        env.storage().instance().set(&key, &(read_farm(env, &key) + amount));
    }
}

fn unstake(env: &Env, pool: u32, user: &Address, amount: i128) {
    let lp = pool_lp(env, pool);
    let key = FarmKey::Stake(pool, user.clone());
    let staked = read_farm(env, &key);
    assert!(staked >= amount, "withdraw: not good");
    settle(env, pool, user);
    env.storage().instance().set(&key, &(staked - amount));
    lp.transfer(&env.current_contract_address(), user, &amount);
}

fn emergency(env: &Env, pool: u32, user: &Address) {
    let lp = pool_lp(env, pool);
    let key = FarmKey::Stake(pool, user.clone());
    let staked = read_farm(env, &key);
    env.storage().instance().set(&key, &0_i128);
    env.storage()
        .instance()
        .set(&FarmKey::Pending(pool, user.clone()), &0_i128);
    if staked > 0 {
        lp.transfer(&env.current_contract_address(), user, &staked);
    }
}

fn setup_farm(env: &Env, reward: &Address) {
    env.storage().instance().set(&FarmKey::Reward, reward);
}

fn add_farm_pool(env: &Env, pool: u32, lp: &Address) {
    env.storage().instance().set(&FarmKey::Pool(pool), lp);
}

fn accrue_reward(env: &Env, pool: u32, user: &Address, amount: i128) {
    let key = FarmKey::Pending(pool, user.clone());
    env.storage().instance().set(&key, &(read_farm(env, &key) + amount));
}

mod farm_v1 {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    use super::{
        accrue_reward, add_farm_pool, emergency, read_farm, setup_farm, stake, unstake, FarmKey,
    };

    #[contract]
    pub struct MockFarmV1;

    #[contractimpl]
    impl MockFarmV1 {
        pub fn setup(env: Env, reward: Address) {
            setup_farm(&env, &reward);
        }

        pub fn add_pool(env: Env, pool: u32, lp: Address) {
            add_farm_pool(&env, pool, &lp);
        }

        pub fn accrue(env: Env, pool: u32, user: Address, amount: i128) {
            accrue_reward(&env, pool, &user, amount);
        }

        pub fn deposit(env: Env, from: Address, pool: u32, amount: i128) {
            from.require_auth();
            stake(&env, pool, &from, amount);
        }

        pub fn withdraw(env: Env, to: Address, pool: u32, amount: i128) {
            to.require_auth();
            unstake(&env, pool, &to, amount);
        }

        pub fn emergency_withdraw(env: Env, to: Address, pool: u32) {
            to.require_auth();
            emergency(&env, pool, &to);
        }

        pub fn pending_reward(env: Env, pool: u32, user: Address) -> i128 {
            read_farm(&env, &FarmKey::Pending(pool, user))
        }

        pub fn user_info(env: Env, pool: u32, user: Address) -> (i128, i128) {
            (read_farm(&env, &FarmKey::Stake(pool, user)), 0)
        }
    }
}

mod farm_v2 {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    use super::{
        accrue_reward, add_farm_pool, emergency, read_farm, settle, setup_farm, stake, unstake,
        FarmKey,
    };

    #[contract]
    pub struct MockFarmV2;

    #[contractimpl]
    impl MockFarmV2 {
        pub fn setup(env: Env, reward: Address) {
            setup_farm(&env, &reward);
        }

        pub fn add_pool(env: Env, pool: u32, lp: Address) {
            add_farm_pool(&env, pool, &lp);
        }

        pub fn accrue(env: Env, pool: u32, user: Address, amount: i128) {
            accrue_reward(&env, pool, &user, amount);
        }

        pub fn deposit(env: Env, pool: u32, amount: i128, to: Address) {
            to.require_auth();
            stake(&env, pool, &to, amount);
        }

        pub fn withdraw_and_harvest(env: Env, pool: u32, amount: i128, to: Address) {
            to.require_auth();
            unstake(&env, pool, &to, amount);
        }

        pub fn harvest(env: Env, pool: u32, to: Address) {
            to.require_auth();
            settle(&env, pool, &to);
        }

        pub fn emergency_withdraw(env: Env, pool: u32, to: Address) {
            to.require_auth();
            emergency(&env, pool, &to);
        }

        pub fn pending_reward(env: Env, pool: u32, user: Address) -> i128 {
            read_farm(&env, &FarmKey::Pending(pool, user))
        }

        pub fn user_info(env: Env, pool: u32, user: Address) -> (i128, i128) {
            (read_farm(&env, &FarmKey::Stake(pool, user)), 0)
        }
    }
}
