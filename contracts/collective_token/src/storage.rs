use soroban_sdk::{symbol_short, Address, Env, Map, Vec};
use crate::types::{Founder, TokenError};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Tamanho do ciclo de alocação: `base_slot = token_id % SLOT_CYCLE`
pub const SLOT_CYCLE: u32 = 100;

/// 100% em basis points
pub const MAX_OWNERSHIP_BPS: u32 = 10_000;

/// Basis points que valem um slot do ciclo (1%)
pub const BPS_PER_SLOT: u32 = MAX_OWNERSHIP_BPS / SLOT_CYCLE;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (owner, auction, founders, schedule)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

fn bump_persistent<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().extend_ttl(
        key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// INICIALIZAÇÃO / OWNER / AUCTION
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

pub fn get_auction(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("auction")).unwrap()
}

pub fn set_auction(env: &Env, auction: &Address) {
    env.storage().instance().set(&symbol_short!("auction"), auction);
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
// IDS RESERVADOS / COLEÇÃO BASE
// ============================================================================

pub fn get_reserved_until(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("reserved"))
        .unwrap_or(0)
}

pub fn set_reserved_until(env: &Env, token_id: u32) {
    env.storage().instance().set(&symbol_short!("reserved"), &token_id);
}

pub fn get_base_collection(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("base_col"))
}

pub fn set_base_collection(env: &Env, collection: &Option<Address>) {
    match collection {
        Some(addr) => env.storage().instance().set(&symbol_short!("base_col"), addr),
        None => env.storage().instance().remove(&symbol_short!("base_col")),
    }
}

// ============================================================================
// CONTADOR / SUPPLY
// ============================================================================

pub fn get_next_token_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("next_id"))
        .unwrap_or(0)
}

pub fn set_next_token_id(env: &Env, token_id: u32) {
    env.storage().instance().set(&symbol_short!("next_id"), &token_id);
}

pub fn get_total_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: u32) {
    env.storage().instance().set(&symbol_short!("supply"), &supply);
}

// ============================================================================
// FOUNDERS / SCHEDULE
// ============================================================================

pub fn get_founders(env: &Env) -> Vec<Founder> {
    env.storage()
        .instance()
        .get(&symbol_short!("founders"))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_founders(env: &Env, founders: &Vec<Founder>) {
    env.storage().instance().set(&symbol_short!("founders"), founders);
}

/// Founders têm ids sequenciais a partir de 0, então o id é o índice.
pub fn get_founder(env: &Env, id: u32) -> Result<Founder, TokenError> {
    get_founders(env).get(id).ok_or(TokenError::FounderNotFound)
}

/// Tabela `base_slot -> founder id`
pub fn get_schedule(env: &Env) -> Map<u32, u32> {
    env.storage()
        .instance()
        .get(&symbol_short!("schedule"))
        .unwrap_or_else(|| Map::new(env))
}

pub fn set_schedule(env: &Env, schedule: &Map<u32, u32>) {
    env.storage().instance().set(&symbol_short!("schedule"), schedule);
}

// ============================================================================
// MINTERS
// ============================================================================

pub fn is_minter(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("minter"), addr);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_minter(env: &Env, addr: &Address, allowed: bool) {
    let key = (symbol_short!("minter"), addr);
    if allowed {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================================
// LEDGER DE PROPRIEDADE
// ============================================================================

pub fn get_token_owner(env: &Env, token_id: u32) -> Option<Address> {
    let key = (symbol_short!("owner_of"), token_id);
    env.storage().persistent().get(&key)
}

pub fn set_token_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = (symbol_short!("owner_of"), token_id);
    env.storage().persistent().set(&key, owner);
    bump_persistent(env, &key);
}

pub fn remove_token_owner(env: &Env, token_id: u32) {
    let key = (symbol_short!("owner_of"), token_id);
    env.storage().persistent().remove(&key);
}

pub fn get_approved(env: &Env, token_id: u32) -> Option<Address> {
    let key = (symbol_short!("approved"), token_id);
    env.storage().persistent().get(&key)
}

pub fn set_approved(env: &Env, token_id: u32, spender: &Address) {
    let key = (symbol_short!("approved"), token_id);
    env.storage().persistent().set(&key, spender);
    bump_persistent(env, &key);
}

pub fn remove_approved(env: &Env, token_id: u32) {
    let key = (symbol_short!("approved"), token_id);
    env.storage().persistent().remove(&key);
}

pub fn get_balance(env: &Env, addr: &Address) -> u32 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: u32) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ============================================================================
// VOTOS / DELEGAÇÃO
// ============================================================================

/// Sem delegação explícita, cada conta vota por si mesma.
pub fn get_delegate(env: &Env, account: &Address) -> Address {
    let key = (symbol_short!("delegate"), account);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| account.clone())
}

pub fn set_delegate(env: &Env, account: &Address, delegatee: &Address) {
    let key = (symbol_short!("delegate"), account);
    env.storage().persistent().set(&key, delegatee);
    bump_persistent(env, &key);
}

pub fn get_votes(env: &Env, account: &Address) -> u32 {
    let key = (symbol_short!("votes"), account);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_votes(env: &Env, account: &Address, votes: u32) {
    let key = (symbol_short!("votes"), account);
    env.storage().persistent().set(&key, &votes);
    bump_persistent(env, &key);
}
