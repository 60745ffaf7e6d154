use soroban_sdk::{Address, Env, symbol_short};

//
// EVENTOS DE FOUNDERS / SCHEDULE
//

// Lista de founders e tabela antigas descartadas
pub fn emit_founders_cleared(env: &Env) {
    env.events().publish(
        (symbol_short!("fdr_clr"),),
        true,
    );
}

// Um slot do ciclo atribuído a um founder
pub fn emit_mint_scheduled(env: &Env, base_slot: u32, founder_id: u32, wallet: &Address) {
    env.events().publish(
        (symbol_short!("mint_sch"), founder_id),
        (base_slot, wallet.clone()),
    );
}

// Permissão de minter concedida / revogada
pub fn emit_minter_updated(env: &Env, minter: &Address, allowed: bool) {
    env.events().publish(
        (symbol_short!("minter"), minter),
        allowed,
    );
}

//
// EVENTOS DO LEDGER
//

pub fn emit_mint(env: &Env, to: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("mint"), to),
        token_id,
    );
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        token_id,
    );
}

pub fn emit_burn(env: &Env, from: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("burn"), from),
        token_id,
    );
}

pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("approve"), owner, spender),
        token_id,
    );
}

//
// EVENTOS DE VOTOS
//

pub fn emit_delegate_changed(env: &Env, account: &Address, from: &Address, to: &Address) {
    env.events().publish(
        (symbol_short!("del_chg"), account),
        (from.clone(), to.clone()),
    );
}

pub fn emit_votes_changed(env: &Env, delegate: &Address, previous: u32, current: u32) {
    env.events().publish(
        (symbol_short!("votes"), delegate),
        (previous, current),
    );
}

pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"), previous, new_owner),
        true,
    );
}

//
// TESTES
//
