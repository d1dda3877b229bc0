use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::farm::FarmRevision;

// ============================================================================
// EVENTS
// ============================================================================

/// Emitted once by `initialize`.
///
/// # Topics
/// - `SymbolShort("init")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub exchange: Address,
    pub farm_v1: Address,
    pub farm_v2: Address,
}

/// Emitted when two tokens were pooled and the LP minted was staked.
///
/// # Topics
/// - `SymbolShort("liq_add")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAddedEvent {
    /// LP token received from the exchange
    pub lp_token: Address,
    /// Amounts of token A and token B actually consumed
    pub amount_a: i128,
    pub amount_b: i128,
    /// LP amount staked into the farm
    pub staked: i128,
    pub pool: u32,
    pub revision: FarmRevision,
}

/// Emitted when staked LP was withdrawn from a farm and redeemed.
///
/// # Topics
/// - `SymbolShort("liq_rem")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityRemovedEvent {
    pub lp_token: Address,
    pub liquidity: i128,
    pub amount_a: i128,
    pub amount_b: i128,
    pub pool: u32,
    pub revision: FarmRevision,
}

/// Emitted when a stake was pulled out without collecting rewards.
///
/// # Topics
/// - `SymbolShort("emergency")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub pool: u32,
    pub revision: FarmRevision,
    /// LP amount returned to vault custody
    pub amount: i128,
}

/// # Topics
/// - `SymbolShort("harvest")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestEvent {
    pub pool: u32,
    pub reward: i128,
}

/// Emitted when tokens leave custody for the owner.
///
/// # Topics
/// - `SymbolShort("withdraw")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

/// Emitted by `set_exchange`, `set_farm_v1` and `set_farm_v2`.
///
/// # Topics
/// - `SymbolShort("config")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEvent {
    /// `exchange`, `farm_v1` or `farm_v2`
    pub field: Symbol,
    pub old: Address,
    pub new: Address,
}

/// # Topics
/// - `SymbolShort("owner")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous: Address,
    pub new: Address,
}

pub fn initialized(env: &Env, event: InitializedEvent) {
    env.events().publish((symbol_short!("init"),), event);
}

pub fn liquidity_added(env: &Env, event: LiquidityAddedEvent) {
    env.events().publish((symbol_short!("liq_add"),), event);
}

pub fn liquidity_removed(env: &Env, event: LiquidityRemovedEvent) {
    env.events().publish((symbol_short!("liq_rem"),), event);
}

pub fn emergency_withdrawn(env: &Env, event: EmergencyWithdrawEvent) {
    env.events().publish((symbol_short!("emergency"),), event);
}

pub fn harvested(env: &Env, event: HarvestEvent) {
    env.events().publish((symbol_short!("harvest"),), event);
}

pub fn withdrawn(env: &Env, event: WithdrawEvent) {
    env.events().publish((symbol_short!("withdraw"),), event);
}

pub fn config_updated(env: &Env, field: Symbol, old: Address, new: Address) {
    env.events()
        .publish((symbol_short!("config"),), ConfigUpdatedEvent { field, old, new });
}

pub fn ownership_transferred(env: &Env, previous: Address, new: Address) {
    env.events().publish(
        (symbol_short!("owner"),),
        OwnershipTransferredEvent { previous, new },
    );
}
