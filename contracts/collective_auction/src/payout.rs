use soroban_sdk::{log, token, Address, Env};
use crate::events;
use crate::storage;
use crate::types::AuctionError;

// ============================================================================
// MOVIMENTAÇÃO DO ATIVO DE LANCE
// ============================================================================

/// Traz `amount` do bidder para a casa. Falha aqui reverte o lance inteiro.
pub fn pull(env: &Env, from: &Address, amount: i128) {
    let client = token::Client::new(env, &storage::get_bid_asset(env));
    client.transfer(from, &env.current_contract_address(), &amount);
}

/// Envio best-effort: se a transferência falhar o valor vira crédito
/// sacável por `to` e a chamada segue. Retorna `false` quando creditou.
pub fn send_or_credit(env: &Env, to: &Address, amount: i128) -> Result<bool, AuctionError> {
    if amount <= 0 {
        return Ok(true);
    }

    let client = token::Client::new(env, &storage::get_bid_asset(env));
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(true),
        _ => {
            log!(env, "outbound transfer failed, crediting", to, amount);
            let credit = storage::get_credit(env, to)
                .checked_add(amount)
                .ok_or(AuctionError::Overflow)?;
            storage::set_credit(env, to, credit);
            events::emit_credited(env, to, amount, credit);
            Ok(false)
        }
    }
}

/// Saca o crédito acumulado de `to`. Zera antes de transferir.
pub fn withdraw_credit(env: &Env, to: &Address) -> Result<i128, AuctionError> {
    let amount = storage::get_credit(env, to);
    if amount == 0 {
        return Err(AuctionError::NothingToWithdraw);
    }

    storage::set_credit(env, to, 0);

    let client = token::Client::new(env, &storage::get_bid_asset(env));
    client.transfer(&env.current_contract_address(), to, &amount);
    Ok(amount)
}
