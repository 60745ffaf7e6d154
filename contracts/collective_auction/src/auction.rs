use soroban_sdk::{contract, contractimpl, Address, Env};
use crate::bidding;
use crate::events;
use crate::payout;
use crate::settlement;
use crate::storage;
use crate::types::{Auction, AuctionError, AuctionPhase, AuctionSettings};
use crate::validation;

//
// CONTRATO PRINCIPAL - CASA DE LEILÃO
//

#[contract]
pub struct CollectiveAuction;

#[contractimpl]
impl CollectiveAuction {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa a casa de leilão. Começa pausada; o primeiro `unpause`
    /// abre o primeiro leilão.
    ///
    /// # Parâmetros
    /// - `owner`: dono inicial (passa para o treasury no primeiro unpause)
    /// - `token`: contrato do token leiloado
    /// - `bid_asset`: token SEP-41 usado nos lances
    /// - `settings`: duração, time buffer, incremento mínimo, reserva, treasury
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidSettings`: duração zero ou reserva abaixo de 1
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        bid_asset: Address,
        settings: AuctionSettings,
    ) -> Result<(), AuctionError> {
        // === CHECKS ===
        if storage::is_initialized(&env) {
            return Err(AuctionError::AlreadyInitialized);
        }
        validation::require_valid_settings(&settings)?;

        // === EFFECTS ===
        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        storage::set_bid_asset(&env, &bid_asset);
        storage::set_settings(&env, &settings);
        storage::set_paused(&env, true);
        storage::bump_critical_storage(&env);

        Ok(())
    }

    //
    // LANCES
    //

    /// Lance de `amount` no leilão de `token_id`.
    ///
    /// # Erros
    /// - `InvalidTokenId`: id diferente do leilão corrente (ou já liquidado)
    /// - `AuctionOver`: passou de `end_time`
    /// - `ReservePriceNotMet`: primeiro lance abaixo da reserva
    /// - `MinimumBidNotMet`: abaixo de `highest_bid * (100 + pct) / 100`
    pub fn create_bid(
        env: Env,
        bidder: Address,
        token_id: u32,
        amount: i128,
    ) -> Result<(), AuctionError> {
        bidder.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            bidding::place_bid(&env, &bidder, token_id, amount)
        })
    }

    //
    // LIQUIDAÇÃO
    //

    /// Liquida o leilão encerrado e abre o próximo. Qualquer um pode chamar.
    pub fn settle_current_and_create_new(env: Env) -> Result<(), AuctionError> {
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_not_paused(&env)?;
            settlement::settle(&env)?;
            settlement::create_auction(&env)?;
            Ok(())
        })
    }

    /// Liquida sem abrir um novo leilão; só com a casa pausada.
    pub fn settle_auction(env: Env) -> Result<(), AuctionError> {
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_paused(&env)?;
            settlement::settle(&env)
        })
    }

    //
    // PAUSA
    //

    pub fn pause(env: Env, caller: Address) -> Result<(), AuctionError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            validation::require_owner(&env, &caller)?;

            storage::set_paused(&env, true);
            events::emit_pause(&env);
            Ok(())
        })
    }

    /// Retoma a casa. No primeiro unpause a posse passa ao treasury e o
    /// primeiro leilão é aberto; depois disso só abre leilão novo se o
    /// corrente já foi liquidado.
    pub fn unpause(env: Env, caller: Address) -> Result<(), AuctionError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            // === CHECKS ===
            validation::require_owner(&env, &caller)?;

            // === EFFECTS ===
            storage::set_paused(&env, false);
            events::emit_unpause(&env);

            // === INTERACTIONS ===
            match storage::get_auction(&env) {
                None => {
                    let treasury = storage::get_settings(&env).treasury;
                    if caller != treasury {
                        storage::set_owner(&env, &treasury);
                        events::emit_ownership_transferred(&env, &caller, &treasury);
                    }
                    settlement::create_auction(&env)?;
                }
                Some(auction) if auction.settled => {
                    settlement::create_auction(&env)?;
                }
                Some(_) => {}
            }
            Ok(())
        })
    }

    //
    // CONFIGURAÇÃO (owner, só pausado)
    //

    pub fn set_duration(env: Env, caller: Address, duration: u64) -> Result<(), AuctionError> {
        Self::update_settings(&env, &caller, |settings| {
            settings.duration = duration;
        })?;
        events::emit_duration_updated(&env, duration);
        Ok(())
    }

    pub fn set_time_buffer(env: Env, caller: Address, time_buffer: u64) -> Result<(), AuctionError> {
        Self::update_settings(&env, &caller, |settings| {
            settings.time_buffer = time_buffer;
        })?;
        events::emit_time_buffer_updated(&env, time_buffer);
        Ok(())
    }

    pub fn set_reserve_price(env: Env, caller: Address, reserve_price: i128) -> Result<(), AuctionError> {
        Self::update_settings(&env, &caller, |settings| {
            settings.reserve_price = reserve_price;
        })?;
        events::emit_reserve_price_updated(&env, reserve_price);
        Ok(())
    }

    pub fn set_min_bid_increment_percentage(
        env: Env,
        caller: Address,
        percentage: u32,
    ) -> Result<(), AuctionError> {
        Self::update_settings(&env, &caller, |settings| {
            settings.min_bid_increment_percentage = percentage;
        })?;
        events::emit_min_bid_increment_updated(&env, percentage);
        Ok(())
    }

    pub fn set_treasury(env: Env, caller: Address, treasury: Address) -> Result<(), AuctionError> {
        Self::update_settings(&env, &caller, |settings| {
            settings.treasury = treasury.clone();
        })?;
        events::emit_treasury_updated(&env, &treasury);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), AuctionError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    //
    // CRÉDITOS
    //

    /// Saca valores de reembolsos/pagamentos que falharam.
    ///
    /// # Erros
    /// - `NothingToWithdraw`: nenhum crédito para `account`
    pub fn withdraw_credit(env: Env, account: Address) -> Result<i128, AuctionError> {
        account.require_auth();
        storage::bump_critical_storage(&env);

        validation::non_reentrant(&env, || {
            let amount = payout::withdraw_credit(&env, &account)?;
            events::emit_credit_withdrawn(&env, &account, amount);
            Ok(amount)
        })
    }

    pub fn credit_of(env: Env, account: Address) -> i128 {
        storage::get_credit(&env, &account)
    }

    //
    // LEITURA
    //

    pub fn auction(env: Env) -> Option<Auction> {
        storage::bump_critical_storage(&env);
        storage::get_auction(&env)
    }

    pub fn settings(env: Env) -> AuctionSettings {
        storage::get_settings(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    pub fn bid_asset(env: Env) -> Address {
        storage::get_bid_asset(&env)
    }

    /// Menor lance aceito agora (reserva se ainda não houve lance)
    pub fn min_next_bid(env: Env) -> Result<i128, AuctionError> {
        let settings = storage::get_settings(&env);
        match storage::get_auction(&env) {
            Some(auction) if !auction.settled => validation::min_next_bid(&settings, &auction),
            _ => Ok(settings.reserve_price.max(1)),
        }
    }

    /// Leilão encerrado e não liquidado fica em `SettlementPending` mesmo
    /// com a casa pausada.
    pub fn phase(env: Env) -> AuctionPhase {
        let auction = storage::get_auction(&env);
        if let Some(current) = &auction {
            if !current.settled && env.ledger().timestamp() > current.end_time {
                return AuctionPhase::SettlementPending;
            }
        }

        if storage::is_paused(&env) {
            return AuctionPhase::Paused;
        }
        match auction {
            None => AuctionPhase::Paused,
            Some(current) if current.settled => AuctionPhase::SettlementPending,
            Some(_) => AuctionPhase::Active,
        }
    }
}

// Helpers internos (fora do contractimpl)
impl CollectiveAuction {
    fn update_settings<F>(env: &Env, caller: &Address, apply: F) -> Result<(), AuctionError>
    where
        F: FnOnce(&mut AuctionSettings),
    {
        caller.require_auth();
        storage::bump_critical_storage(env);

        validation::require_owner(env, caller)?;
        validation::require_paused(env)?;

        let mut settings = storage::get_settings(env);
        apply(&mut settings);
        validation::require_valid_settings(&settings)?;
        storage::set_settings(env, &settings);
        Ok(())
    }
}
