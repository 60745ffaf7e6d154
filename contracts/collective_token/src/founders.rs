use soroban_sdk::{Env, Vec};
use crate::events;
use crate::schedule;
use crate::storage;
use crate::types::{Founder, FounderParams, TokenError};
use crate::validation;

// ============================================================================
// REGISTRO DE FOUNDERS
// ============================================================================

/// Substitui a lista inteira de founders e reconstrói a tabela de alocação.
///
/// Valida antes de escrever qualquer coisa: uma lista inválida não altera o
/// estado. Tokens já mintados não são afetados.
pub fn replace_founders(env: &Env, params: &Vec<FounderParams>) -> Result<(), TokenError> {
    validation::require_valid_founders(params)?;

    let mut founders: Vec<Founder> = Vec::new(env);
    for (id, p) in params.iter().enumerate() {
        founders.push_back(Founder {
            id: id as u32,
            wallet: p.wallet,
            ownership_bps: p.ownership_bps,
            vest_expiry: p.vest_expiry,
        });
    }

    let table = schedule::build_schedule(env, &founders, storage::get_reserved_until(env));

    storage::set_founders(env, &founders);
    storage::set_schedule(env, &table);

    events::emit_founders_cleared(env);
    for (base_slot, founder_id) in table.iter() {
        if let Some(founder) = founders.get(founder_id) {
            events::emit_mint_scheduled(env, base_slot, founder_id, &founder.wallet);
        }
    }

    Ok(())
}

/// Founder que ocupa o slot de `token_id`, se ainda estiver em vesting.
pub fn scheduled_recipient(env: &Env, token_id: u32) -> Option<Founder> {
    let founder_id = storage::get_schedule(env).get(schedule::base_slot(token_id))?;
    let founder = storage::get_founders(env).get(founder_id)?;

    if env.ledger().timestamp() < founder.vest_expiry {
        Some(founder)
    } else {
        None
    }
}

/// Soma dos basis points da lista atual
pub fn total_ownership(env: &Env) -> u32 {
    storage::get_founders(env)
        .iter()
        .map(|f| f.ownership_bps)
        .sum()
}
