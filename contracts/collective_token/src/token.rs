use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use crate::events;
use crate::founders;
use crate::issuer;
use crate::ledger;
use crate::schedule;
use crate::storage;
use crate::types::{Founder, FounderParams, MinterParams, Recipient, TokenError};
use crate::validation;

//
// CONTRATO PRINCIPAL - COLLECTIVE TOKEN
//

#[contract]
pub struct CollectiveToken;

#[contractimpl]
impl CollectiveToken {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o token.
    ///
    /// # Parâmetros
    /// - `owner`: manager das operações de configuração (founders, minters)
    /// - `auction`: contrato da casa de leilão que recebe os ids não alocados
    /// - `founders`: lista inicial de founders
    /// - `reserved_until_token_id`: ids abaixo deste valor ficam fora do leilão
    /// - `base_collection`: coleção espelhada opcional que também reserva ids
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidFounderOwnership`: lista de founders inválida
    pub fn initialize(
        env: Env,
        owner: Address,
        auction: Address,
        founders: Vec<FounderParams>,
        reserved_until_token_id: u32,
        base_collection: Option<Address>,
    ) -> Result<(), TokenError> {
        // CHECKS
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        // EFFECTS
        storage::set_owner(&env, &owner);
        storage::set_auction(&env, &auction);
        storage::set_reserved_until(&env, reserved_until_token_id);
        storage::set_base_collection(&env, &base_collection);
        storage::set_next_token_id(&env, reserved_until_token_id);
        storage::bump_critical_storage(&env);

        founders::replace_founders(&env, &founders)
    }

    //
    // FOUNDERS
    //

    /// Substitui a lista de founders (apenas owner).
    pub fn update_founders(
        env: Env,
        caller: Address,
        founders: Vec<FounderParams>,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_manager(&env, &caller)?;
            founders::replace_founders(&env, &founders)
        })
    }

    pub fn founders(env: Env) -> Vec<Founder> {
        storage::bump_critical_storage(&env);
        storage::get_founders(&env)
    }

    pub fn founder(env: Env, founder_id: u32) -> Result<Founder, TokenError> {
        storage::bump_critical_storage(&env);
        storage::get_founder(&env, founder_id)
    }

    pub fn total_founder_ownership(env: Env) -> u32 {
        founders::total_ownership(&env)
    }

    /// Founder agendado para o slot de `token_id`, se ainda em vesting.
    pub fn scheduled_recipient(env: Env, token_id: u32) -> Option<Founder> {
        founders::scheduled_recipient(&env, token_id)
    }

    pub fn resolve_recipient(env: Env, token_id: u32) -> Recipient {
        schedule::resolve(&env, token_id)
    }

    //
    // EMISSÃO
    //

    /// Minta o próximo id elegível para o caller (casa de leilão ou minter),
    /// pulando ids reservados e alocando os slots dos founders no caminho.
    pub fn mint(env: Env, caller: Address) -> Result<u32, TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_auction_or_minter(&env, &caller)?;
            issuer::mint_next(&env, &caller)
        })
    }

    /// Igual a `mint`, mas o id final vai para `recipient`.
    pub fn mint_to(env: Env, caller: Address, recipient: Address) -> Result<u32, TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_auction_or_minter(&env, &caller)?;
            issuer::mint_next(&env, &recipient)
        })
    }

    /// Minta um id reservado (apenas minters).
    pub fn mint_from_reserve(
        env: Env,
        caller: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_minter(&env, &caller)?;
            issuer::mint_from_reserve(&env, &to, token_id)
        })
    }

    /// Queima um token que pertence ao caller (casa de leilão ou minter).
    pub fn burn(env: Env, caller: Address, token_id: u32) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_auction_or_minter(&env, &caller)?;
            ledger::burn(&env, &caller, token_id)
        })
    }

    pub fn update_minters(
        env: Env,
        caller: Address,
        minters: Vec<MinterParams>,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_manager(&env, &caller)?;

        for params in minters.iter() {
            storage::set_minter(&env, &params.minter, params.allowed);
            events::emit_minter_updated(&env, &params.minter, params.allowed);
        }
        Ok(())
    }

    pub fn is_minter(env: Env, addr: Address) -> bool {
        storage::is_minter(&env, &addr)
    }

    //
    // LEDGER (leitura)
    //

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, TokenError> {
        ledger::owner_of(&env, token_id)
    }

    pub fn balance(env: Env, id: Address) -> u32 {
        storage::get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> u32 {
        storage::bump_critical_storage(&env);
        storage::get_total_supply(&env)
    }

    /// Próximo candidato do contador (ainda não resolvido)
    pub fn next_token_id(env: Env) -> u32 {
        storage::get_next_token_id(&env)
    }

    pub fn reserved_until_token_id(env: Env) -> u32 {
        storage::get_reserved_until(&env)
    }

    //
    // TRANSFERÊNCIAS
    //

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        token_id: u32,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        ledger::approve(&env, &owner, &spender, token_id)
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        storage::get_approved(&env, token_id)
    }

    /// Transfere `token_id` de `from` para `to`; `spender` precisa ser o dono
    /// ou o aprovado do id.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), TokenError> {
        spender.require_auth();

        validation::non_reentrant(&env, || {
            ledger::require_spender(&env, &spender, token_id)?;
            ledger::transfer(&env, &from, &to, token_id)
        })
    }

    //
    // VOTOS
    //

    pub fn delegate(env: Env, account: Address, delegatee: Address) -> Result<(), TokenError> {
        account.require_auth();
        ledger::delegate(&env, &account, &delegatee)
    }

    pub fn delegates(env: Env, account: Address) -> Address {
        storage::get_delegate(&env, &account)
    }

    pub fn get_votes(env: Env, account: Address) -> u32 {
        storage::get_votes(&env, &account)
    }

    //
    // OWNERSHIP
    //

    pub fn owner(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_owner(&env)
    }

    pub fn auction(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_auction(&env)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_manager(&env, &caller)?;
        storage::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }
}

//
// TESTES UNITÁRIOS
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Recipient;
    use soroban_sdk::{testutils::{Address as _, Ledger}, vec, Env};

    fn create_client<'a>(env: &Env, founders: Vec<FounderParams>) -> (CollectiveTokenClient<'a>, Address, Address) {
        let contract_id = env.register_contract(None, CollectiveToken);
        let client = CollectiveTokenClient::new(env, &contract_id);
        let owner = Address::generate(env);
        let auction = Address::generate(env);

        client.initialize(&owner, &auction, &founders, &0, &None);
        (client, owner, auction)
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        let (client, owner, auction) = create_client(&env, Vec::new(&env));

        assert_eq!(client.owner(), owner);
        assert_eq!(client.auction(), auction);
        assert_eq!(client.total_supply(), 0);
        assert_eq!(client.next_token_id(), 0);
    }

    #[test]
    fn test_double_initialize_fails() {
        let env = Env::default();
        let (client, owner, auction) = create_client(&env, Vec::new(&env));

        let res = client.try_initialize(&owner, &auction, &Vec::new(&env), &0, &None);
        assert_eq!(res, Err(Ok(TokenError::AlreadyInitialized)));
    }

    #[test]
    fn test_mint_without_founders_goes_to_auction() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _, auction) = create_client(&env, Vec::new(&env));

        assert_eq!(client.mint(&auction), 0);
        assert_eq!(client.mint(&auction), 1);
        assert_eq!(client.owner_of(&1), auction);
        assert_eq!(client.balance(&auction), 2);
    }

    #[test]
    fn test_founder_slot_is_skipped_by_auction() {
        let env = Env::default();
        env.mock_all_auths();
        let founder = Address::generate(&env);
        let founders = vec![
            &env,
            FounderParams { wallet: founder.clone(), ownership_bps: 1_000, vest_expiry: 1_000 },
        ];
        let (client, _, auction) = create_client(&env, founders);

        // slot 0 pertence ao founder
        assert_eq!(client.mint(&auction), 1);
        assert_eq!(client.owner_of(&0), founder);
        assert_eq!(client.get_votes(&founder), 1);
    }

    #[test]
    fn test_expired_vesting_releases_slot() {
        let env = Env::default();
        env.mock_all_auths();
        let founder = Address::generate(&env);
        let founders = vec![
            &env,
            FounderParams { wallet: founder.clone(), ownership_bps: 1_000, vest_expiry: 100 },
        ];
        let (client, _, auction) = create_client(&env, founders);

        assert_eq!(client.resolve_recipient(&0), Recipient::Founder(0));

        env.ledger().with_mut(|info| {
            info.timestamp = 100;
        });

        assert_eq!(client.resolve_recipient(&0), Recipient::Auction);
        assert_eq!(client.mint(&auction), 0);
        assert_eq!(client.balance(&founder), 0);
    }

    #[test]
    fn test_stranger_cannot_mint() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _, _) = create_client(&env, Vec::new(&env));
        let stranger = Address::generate(&env);

        let res = client.try_mint(&stranger);
        assert_eq!(res, Err(Ok(TokenError::OnlyAuctionOrMinter)));
        assert_eq!(client.total_supply(), 0);
    }

    #[test]
    fn test_reentrancy_guard_blocks_mint() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _, auction) = create_client(&env, Vec::new(&env));

        env.as_contract(&client.address, || {
            storage::set_reentrancy_guard(&env, true);
        });

        let res = client.try_mint(&auction);
        assert_eq!(res, Err(Ok(TokenError::ReentrantCall)));
    }

    #[test]
    fn test_reentrancy_guard_resets_after_error() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _, auction) = create_client(&env, Vec::new(&env));

        assert!(client.try_burn(&auction, &7).is_err());
        env.as_contract(&client.address, || {
            assert!(!storage::is_reentrancy_locked(&env));
        });
    }
}
