use soroban_sdk::{Address, Env};
use crate::events;
use crate::payout;
use crate::storage;
use crate::types::AuctionError;
use crate::validation;

// ============================================================================
// LANCES
// ============================================================================

/// Registra um lance no leilão corrente.
///
/// Ordem: valida, traz os fundos do bidder, grava o novo líder (e a
/// extensão do fim), só então devolve o lance anterior.
pub fn place_bid(env: &Env, bidder: &Address, token_id: u32, amount: i128) -> Result<(), AuctionError> {
    // CHECKS
    let mut auction = storage::get_auction(env).ok_or(AuctionError::InvalidTokenId)?;
    if auction.token_id != token_id || auction.settled {
        return Err(AuctionError::InvalidTokenId);
    }

    let now = env.ledger().timestamp();
    if now > auction.end_time {
        return Err(AuctionError::AuctionOver);
    }

    let settings = storage::get_settings(env);
    validation::require_valid_bid(&settings, &auction, amount)?;

    payout::pull(env, bidder, amount);

    // EFFECTS
    let previous_bidder = auction.highest_bidder.take();
    let previous_bid = auction.highest_bid;

    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());

    // Fim próximo demais: empurra para now + time_buffer
    let extended = auction.end_time - now < settings.time_buffer;
    if extended {
        auction.end_time = now
            .checked_add(settings.time_buffer)
            .ok_or(AuctionError::Overflow)?;
    }

    storage::set_auction(env, &auction);

    // INTERACTIONS
    if let Some(previous) = previous_bidder {
        if !payout::send_or_credit(env, &previous, previous_bid)? {
            events::emit_refund_failed(env, &previous, previous_bid);
        }
    }

    events::emit_bid(env, token_id, bidder, amount, auction.end_time, extended);
    if extended {
        events::emit_extended(env, token_id, auction.end_time);
    }

    Ok(())
}
