use soroban_sdk::{Address, Env};
use crate::ledger;
use crate::reserve;
use crate::schedule;
use crate::storage::{self, SLOT_CYCLE};
use crate::types::{Recipient, TokenError};

// ============================================================================
// EMISSÃO COM ALOCAÇÃO PARA FOUNDERS
// ============================================================================

/// Minta o próximo id elegível para `recipient`.
///
/// Ids reservados são pulados; ids cujo slot pertence a um founder em vesting
/// são mintados para o founder e o laço segue para o próximo candidato. O
/// contador avança antes de qualquer chamada externa, então cada id é
/// considerado uma única vez.
pub fn mint_next(env: &Env, recipient: &Address) -> Result<u32, TokenError> {
    let mut founder_streak: u32 = 0;

    loop {
        let token_id = storage::get_next_token_id(env);
        let next = token_id.checked_add(1).ok_or(TokenError::Overflow)?;
        storage::set_next_token_id(env, next);

        if reserve::is_reserved(env, token_id) {
            continue;
        }

        match schedule::resolve(env, token_id) {
            Recipient::Founder(founder_id) => {
                founder_streak += 1;
                if founder_streak >= SLOT_CYCLE {
                    return Err(TokenError::AllocationExhausted);
                }

                let founder = storage::get_founder(env, founder_id)?;
                ledger::mint(env, &founder.wallet, token_id)?;
            }
            Recipient::Auction => {
                ledger::mint(env, recipient, token_id)?;
                return Ok(token_id);
            }
        }
    }
}

/// Minta um id abaixo de `reserved_until_token_id`, fora do laço de alocação
pub fn mint_from_reserve(env: &Env, to: &Address, token_id: u32) -> Result<(), TokenError> {
    if token_id >= storage::get_reserved_until(env) {
        return Err(TokenError::NotReserved);
    }
    ledger::mint(env, to, token_id)
}
