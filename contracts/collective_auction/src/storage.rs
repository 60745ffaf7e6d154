use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{Auction, AuctionSettings};

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (owner, settings, leilão corrente)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// INICIALIZAÇÃO / OWNER
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("owner"))
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("owner")).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

// ============================================================================
// COLABORADORES
// ============================================================================

/// Contrato do token leiloado
pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("token")).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&symbol_short!("token"), token);
}

/// Ativo SEP-41 usado nos lances
pub fn get_bid_asset(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("bid_asset")).unwrap()
}

pub fn set_bid_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&symbol_short!("bid_asset"), asset);
}

// ============================================================================
// SETTINGS
// ============================================================================

pub fn get_settings(env: &Env) -> AuctionSettings {
    env.storage().instance().get(&symbol_short!("settings")).unwrap()
}

pub fn set_settings(env: &Env, settings: &AuctionSettings) {
    env.storage().instance().set(&symbol_short!("settings"), settings);
}

// ============================================================================
// LEILÃO CORRENTE
// ============================================================================

pub fn get_auction(env: &Env) -> Option<Auction> {
    env.storage().instance().get(&symbol_short!("auction"))
}

pub fn set_auction(env: &Env, auction: &Auction) {
    env.storage().instance().set(&symbol_short!("auction"), auction);
}

// ============================================================================
// PAUSED
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}

// ============================================================================
// REENTRÂNCIA
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("locked"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("locked"), &locked);
}

// ============================================================================
// CRÉDITOS (TRANSFERÊNCIAS QUE FALHARAM)
// ============================================================================

pub fn get_credit(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("credit"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_credit(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("credit"), addr);
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}
