use soroban_sdk::{contractclient, Env};
use crate::storage;

// ============================================================================
// COLEÇÃO BASE (ESPELHAMENTO)
// ============================================================================

/// Interface mínima consumida da coleção espelhada.
#[contractclient(name = "ReservePredicateClient")]
pub trait ReservePredicate {
    fn is_reserved(env: Env, token_id: u32) -> bool;
}

/// Um id está reservado se estiver abaixo de `reserved_until_token_id` ou se
/// a coleção base (quando configurada) o reivindicar.
pub fn is_reserved(env: &Env, token_id: u32) -> bool {
    if token_id < storage::get_reserved_until(env) {
        return true;
    }

    match storage::get_base_collection(env) {
        Some(collection) => ReservePredicateClient::new(env, &collection).is_reserved(&token_id),
        None => false,
    }
}
