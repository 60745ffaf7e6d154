use soroban_sdk::{Address, Env};
use crate::events;
use crate::storage;
use crate::types::TokenError;

// ============================================================================
// LEDGER DE PROPRIEDADE - CEI PATTERN
// ============================================================================

pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, TokenError> {
    storage::get_token_owner(env, token_id).ok_or(TokenError::NoOwner)
}

/// Cria `token_id` para `to` e credita um voto ao delegado de `to`
pub fn mint(env: &Env, to: &Address, token_id: u32) -> Result<(), TokenError> {
    // === CHECKS ===
    if storage::get_token_owner(env, token_id).is_some() {
        return Err(TokenError::AlreadyMinted);
    }

    // === EFFECTS ===
    let balance = storage::get_balance(env, to)
        .checked_add(1)
        .ok_or(TokenError::Overflow)?;
    let supply = storage::get_total_supply(env)
        .checked_add(1)
        .ok_or(TokenError::Overflow)?;

    storage::set_token_owner(env, token_id, to);
    storage::set_balance(env, to, balance);
    storage::set_total_supply(env, supply);

    move_votes(env, None, Some(&storage::get_delegate(env, to)), 1)?;

    events::emit_mint(env, to, token_id);
    Ok(())
}

/// Destrói `token_id`; depois disso `owner_of` retorna `NoOwner`
pub fn burn(env: &Env, from: &Address, token_id: u32) -> Result<(), TokenError> {
    // === CHECKS ===
    let owner = owner_of(env, token_id)?;
    if &owner != from {
        return Err(TokenError::NotOwner);
    }

    // === EFFECTS ===
    let balance = storage::get_balance(env, from)
        .checked_sub(1)
        .ok_or(TokenError::Overflow)?;
    let supply = storage::get_total_supply(env)
        .checked_sub(1)
        .ok_or(TokenError::Overflow)?;

    storage::remove_token_owner(env, token_id);
    storage::remove_approved(env, token_id);
    storage::set_balance(env, from, balance);
    storage::set_total_supply(env, supply);

    move_votes(env, Some(&storage::get_delegate(env, from)), None, 1)?;

    events::emit_burn(env, from, token_id);
    Ok(())
}

/// Move `token_id` de `from` para `to`. A autorização do spender é checada
/// por quem chama.
pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), TokenError> {
    // === CHECKS ===
    let owner = owner_of(env, token_id)?;
    if &owner != from {
        return Err(TokenError::NotOwner);
    }

    if from == to {
        storage::remove_approved(env, token_id);
        events::emit_transfer(env, from, to, token_id);
        return Ok(());
    }

    // === EFFECTS ===
    let from_balance = storage::get_balance(env, from)
        .checked_sub(1)
        .ok_or(TokenError::Overflow)?;
    let to_balance = storage::get_balance(env, to)
        .checked_add(1)
        .ok_or(TokenError::Overflow)?;

    storage::remove_approved(env, token_id);
    storage::set_token_owner(env, token_id, to);
    storage::set_balance(env, from, from_balance);
    storage::set_balance(env, to, to_balance);

    move_votes(
        env,
        Some(&storage::get_delegate(env, from)),
        Some(&storage::get_delegate(env, to)),
        1,
    )?;

    events::emit_transfer(env, from, to, token_id);
    Ok(())
}

/// Spender pode mover o token se for o dono ou o aprovado do id
pub fn require_spender(env: &Env, spender: &Address, token_id: u32) -> Result<(), TokenError> {
    let owner = owner_of(env, token_id)?;
    if spender == &owner {
        return Ok(());
    }

    match storage::get_approved(env, token_id) {
        Some(approved) if &approved == spender => Ok(()),
        _ => Err(TokenError::NotAuthorized),
    }
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, token_id: u32) -> Result<(), TokenError> {
    if &owner_of(env, token_id)? != owner {
        return Err(TokenError::NotOwner);
    }

    storage::set_approved(env, token_id, spender);
    events::emit_approval(env, owner, spender, token_id);
    Ok(())
}

// ============================================================================
// VOTOS
// ============================================================================

/// Redireciona todos os votos de `account` para `delegatee`
pub fn delegate(env: &Env, account: &Address, delegatee: &Address) -> Result<(), TokenError> {
    let previous = storage::get_delegate(env, account);
    if &previous == delegatee {
        return Ok(());
    }

    storage::set_delegate(env, account, delegatee);
    events::emit_delegate_changed(env, account, &previous, delegatee);

    let balance = storage::get_balance(env, account);
    if balance > 0 {
        move_votes(env, Some(&previous), Some(delegatee), balance)?;
    }
    Ok(())
}

fn move_votes(
    env: &Env,
    from: Option<&Address>,
    to: Option<&Address>,
    amount: u32,
) -> Result<(), TokenError> {
    if let Some(from) = from {
        let previous = storage::get_votes(env, from);
        let current = previous.checked_sub(amount).ok_or(TokenError::Overflow)?;
        storage::set_votes(env, from, current);
        events::emit_votes_changed(env, from, previous, current);
    }

    if let Some(to) = to {
        let previous = storage::get_votes(env, to);
        let current = previous.checked_add(amount).ok_or(TokenError::Overflow)?;
        storage::set_votes(env, to, current);
        events::emit_votes_changed(env, to, previous, current);
    }

    Ok(())
}
