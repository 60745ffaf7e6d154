use soroban_sdk::{Address, Env};
use crate::storage;
use crate::types::{Auction, AuctionError, AuctionSettings};

// ============================================================================
// VALIDAÇÕES - CEI PATTERN
// ============================================================================

/// Valida se o caller é o owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AuctionError> {
    if caller != &storage::get_owner(env) {
        return Err(AuctionError::OnlyOwner);
    }
    Ok(())
}

pub fn require_paused(env: &Env) -> Result<(), AuctionError> {
    if !storage::is_paused(env) {
        return Err(AuctionError::Unpaused);
    }
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), AuctionError> {
    if storage::is_paused(env) {
        return Err(AuctionError::Paused);
    }
    Ok(())
}

pub fn require_valid_settings(settings: &AuctionSettings) -> Result<(), AuctionError> {
    if settings.duration == 0 {
        return Err(AuctionError::InvalidSettings);
    }
    // Reserva mínima de 1 unidade: lances não positivos nunca são aceitos
    if settings.reserve_price < 1 {
        return Err(AuctionError::InvalidSettings);
    }
    Ok(())
}

// ============================================================================
// LANCES
// ============================================================================

/// Primeiro lance: `amount >= reserve_price`.
/// Demais: `amount * 100 >= highest_bid * (100 + pct)` (multiplica antes de
/// dividir, sem perda de precisão) e sempre maior que o lance atual.
pub fn require_valid_bid(
    settings: &AuctionSettings,
    auction: &Auction,
    amount: i128,
) -> Result<(), AuctionError> {
    if amount <= 0 {
        return Err(AuctionError::InvalidAmount);
    }

    if auction.highest_bid == 0 {
        if amount < settings.reserve_price {
            return Err(AuctionError::ReservePriceNotMet);
        }
        return Ok(());
    }

    let scaled_bid = amount
        .checked_mul(100)
        .ok_or(AuctionError::Overflow)?;
    let scaled_min = auction
        .highest_bid
        .checked_mul(100 + settings.min_bid_increment_percentage as i128)
        .ok_or(AuctionError::Overflow)?;

    if scaled_bid < scaled_min || amount <= auction.highest_bid {
        return Err(AuctionError::MinimumBidNotMet);
    }
    Ok(())
}

/// Menor lance aceito no estado atual (arredondado para cima)
pub fn min_next_bid(settings: &AuctionSettings, auction: &Auction) -> Result<i128, AuctionError> {
    if auction.highest_bid == 0 {
        return Ok(settings.reserve_price.max(1));
    }

    let scaled_min = auction
        .highest_bid
        .checked_mul(100 + settings.min_bid_increment_percentage as i128)
        .ok_or(AuctionError::Overflow)?;

    let rounded_up = scaled_min
        .checked_add(99)
        .ok_or(AuctionError::Overflow)?
        / 100;
    Ok(rounded_up.max(auction.highest_bid + 1))
}

// ============================================================================
// REENTRÂNCIA
// ============================================================================

/// Executa `f` com o guard travado; o guard é liberado mesmo em erro.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, AuctionError>
where
    F: FnOnce() -> Result<T, AuctionError>,
{
    if storage::is_reentrancy_locked(env) {
        return Err(AuctionError::ReentrantCall);
    }
    storage::set_reentrancy_guard(env, true);

    let result = f();

    storage::set_reentrancy_guard(env, false);
    result
}
