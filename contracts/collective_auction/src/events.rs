use soroban_sdk::{Address, Env, symbol_short};

//
// EVENTOS DO LEILÃO
//

// Leilão aberto para `token_id`
pub fn emit_auction_created(env: &Env, token_id: u32, start_time: u64, end_time: u64) {
    env.events().publish(
        (symbol_short!("created"), token_id),
        (start_time, end_time),
    );
}

// Lance aceito (token, bidder, valor, novo fim, se estendeu)
pub fn emit_bid(env: &Env, token_id: u32, bidder: &Address, amount: i128, end_time: u64, extended: bool) {
    env.events().publish(
        (symbol_short!("bid"), token_id),
        (bidder.clone(), amount, end_time, extended),
    );
}

// Fim estendido pelo time buffer
pub fn emit_extended(env: &Env, token_id: u32, end_time: u64) {
    env.events().publish(
        (symbol_short!("extended"), token_id),
        end_time,
    );
}

// Liquidação (vencedor ausente = token queimado)
pub fn emit_settled(env: &Env, token_id: u32, winner: &Option<Address>, amount: i128) {
    env.events().publish(
        (symbol_short!("settled"), token_id),
        (winner.clone(), amount),
    );
}

//
// TRANSFERÊNCIAS DE SAÍDA
//

// Reembolso ao bidder anterior falhou e virou crédito
pub fn emit_refund_failed(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("rfnd_fail"), to),
        amount,
    );
}

// Pagamento ao treasury falhou e virou crédito
pub fn emit_payout_failed(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("pay_fail"), to),
        amount,
    );
}

// Valor retido para saque posterior (`withdraw_credit`)
pub fn emit_credited(env: &Env, to: &Address, amount: i128, total: i128) {
    env.events().publish(
        (symbol_short!("credit"), to),
        (amount, total),
    );
}

pub fn emit_credit_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), to),
        amount,
    );
}

//
// ADMINISTRAÇÃO
//

pub fn emit_pause(env: &Env) {
    env.events().publish(
        (symbol_short!("pause"),),
        true,
    );
}

pub fn emit_unpause(env: &Env) {
    env.events().publish(
        (symbol_short!("unpause"),),
        true,
    );
}

// Mint automático falhou ao abrir um leilão; a casa foi pausada
pub fn emit_mint_failed(env: &Env) {
    env.events().publish(
        (symbol_short!("mint_fail"),),
        true,
    );
}

pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"), previous, new_owner),
        true,
    );
}

pub fn emit_duration_updated(env: &Env, duration: u64) {
    env.events().publish((symbol_short!("duration"),), duration);
}

pub fn emit_time_buffer_updated(env: &Env, time_buffer: u64) {
    env.events().publish((symbol_short!("buffer"),), time_buffer);
}

pub fn emit_reserve_price_updated(env: &Env, reserve_price: i128) {
    env.events().publish((symbol_short!("reserve"),), reserve_price);
}

pub fn emit_min_bid_increment_updated(env: &Env, percentage: u32) {
    env.events().publish((symbol_short!("min_inc"),), percentage);
}

pub fn emit_treasury_updated(env: &Env, treasury: &Address) {
    env.events().publish((symbol_short!("treasury"),), treasury.clone());
}
