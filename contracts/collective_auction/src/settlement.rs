use soroban_sdk::{log, Env};
use crate::events;
use crate::interfaces::TokenIssuerClient;
use crate::payout;
use crate::storage;
use crate::types::{Auction, AuctionError};

// ============================================================================
// LIQUIDAÇÃO
// ============================================================================

/// Liquida o leilão corrente: entrega o token ao vencedor e o valor ao
/// treasury, ou queima o token quando não houve lance.
pub fn settle(env: &Env) -> Result<(), AuctionError> {
    // CHECKS
    let mut auction = storage::get_auction(env).ok_or(AuctionError::AuctionNotStarted)?;
    if auction.settled {
        return Err(AuctionError::AuctionSettled);
    }
    if env.ledger().timestamp() <= auction.end_time {
        return Err(AuctionError::AuctionNotOver);
    }

    // EFFECTS
    auction.settled = true;
    storage::set_auction(env, &auction);

    // INTERACTIONS
    let this = env.current_contract_address();
    let token = TokenIssuerClient::new(env, &storage::get_token(env));

    match &auction.highest_bidder {
        Some(winner) => {
            token.transfer_from(&this, &this, winner, &auction.token_id);

            let treasury = storage::get_settings(env).treasury;
            if !payout::send_or_credit(env, &treasury, auction.highest_bid)? {
                events::emit_payout_failed(env, &treasury, auction.highest_bid);
            }
        }
        None => {
            token.burn(&this, &auction.token_id);
        }
    }

    events::emit_settled(env, auction.token_id, &auction.highest_bidder, auction.highest_bid);
    Ok(())
}

// ============================================================================
// CRIAÇÃO
// ============================================================================

/// Minta o próximo token e abre um leilão para ele. Se o mint falhar a casa
/// é pausada e a chamada segue sem erro.
pub fn create_auction(env: &Env) -> Result<bool, AuctionError> {
    let token = TokenIssuerClient::new(env, &storage::get_token(env));

    let token_id = match token.try_mint(&env.current_contract_address()) {
        Ok(Ok(id)) => id,
        _ => {
            log!(env, "auto mint failed, pausing auction house");
            storage::set_paused(env, true);
            events::emit_mint_failed(env);
            events::emit_pause(env);
            return Ok(false);
        }
    };

    let settings = storage::get_settings(env);
    let start_time = env.ledger().timestamp();
    let end_time = start_time
        .checked_add(settings.duration)
        .ok_or(AuctionError::Overflow)?;

    storage::set_auction(env, &Auction {
        token_id,
        highest_bid: 0,
        highest_bidder: None,
        start_time,
        end_time,
        settled: false,
    });

    events::emit_auction_created(env, token_id, start_time, end_time);
    Ok(true)
}
