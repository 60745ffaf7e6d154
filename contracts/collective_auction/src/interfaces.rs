use soroban_sdk::{contractclient, Address, Env};

// ============================================================================
// INTERFACE DO TOKEN LEILOADO
// ============================================================================

/// Subconjunto do token consumido pela casa de leilão. Erros do token
/// chegam como falha da invocação (ou `Err` nas variantes `try_*`).
#[contractclient(name = "TokenIssuerClient")]
pub trait TokenIssuer {
    /// Minta o próximo id elegível para o caller e retorna o id
    fn mint(env: Env, caller: Address) -> u32;

    fn burn(env: Env, caller: Address, token_id: u32);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
