use soroban_sdk::{Address, Env, Vec};
use crate::storage;
use crate::types::{Capability, FounderParams, TokenError};

// ============================================================================
// CAPACIDADES
// ============================================================================

/// Verifica se `caller` detém a capacidade pedida
pub fn has_capability(env: &Env, caller: &Address, capability: Capability) -> bool {
    match capability {
        Capability::Owner => caller == &storage::get_owner(env),
        Capability::AuctionHouse => caller == &storage::get_auction(env),
        Capability::Minter => storage::is_minter(env, caller),
    }
}

/// O owner do token é o "manager" das operações de configuração
pub fn require_manager(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if !has_capability(env, caller, Capability::Owner) {
        return Err(TokenError::OnlyManager);
    }
    Ok(())
}

pub fn require_auction_or_minter(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if has_capability(env, caller, Capability::AuctionHouse)
        || has_capability(env, caller, Capability::Minter)
    {
        return Ok(());
    }
    Err(TokenError::OnlyAuctionOrMinter)
}

pub fn require_minter(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if !has_capability(env, caller, Capability::Minter) {
        return Err(TokenError::OnlyAuctionOrMinter);
    }
    Ok(())
}

// ============================================================================
// FOUNDERS
// ============================================================================

/// Nenhuma entrada com 0 bps e soma total <= 10000
pub fn require_valid_founders(founders: &Vec<FounderParams>) -> Result<(), TokenError> {
    let mut total: u32 = 0;

    for founder in founders.iter() {
        if founder.ownership_bps == 0 {
            return Err(TokenError::InvalidFounderOwnership);
        }

        total = total
            .checked_add(founder.ownership_bps)
            .ok_or(TokenError::InvalidFounderOwnership)?;
    }

    if total > storage::MAX_OWNERSHIP_BPS {
        return Err(TokenError::InvalidFounderOwnership);
    }

    Ok(())
}

// ============================================================================
// REENTRÂNCIA
// ============================================================================

/// Executa `f` com o guard de reentrância travado; o guard é liberado mesmo
/// quando `f` retorna erro.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, TokenError>
where
    F: FnOnce() -> Result<T, TokenError>,
{
    if storage::is_reentrancy_locked(env) {
        return Err(TokenError::ReentrantCall);
    }
    storage::set_reentrancy_guard(env, true);

    let result = f();

    storage::set_reentrancy_guard(env, false);
    result
}
