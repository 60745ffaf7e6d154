use soroban_sdk::{contracterror, contracttype, Address};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    AlreadyInitialized = 1,
    OnlyOwner = 2,
    InvalidTokenId = 3,
    AuctionOver = 4,
    ReservePriceNotMet = 5,
    MinimumBidNotMet = 6,
    AuctionNotOver = 7,
    AuctionNotStarted = 8,
    AuctionSettled = 9,
    Paused = 10,
    Unpaused = 11,
    InvalidSettings = 12,
    InvalidAmount = 13,
    NothingToWithdraw = 14,
    Overflow = 15,
    ReentrantCall = 16,
}

// ============================================================================
// CONFIGURAÇÃO
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettings {
    /// Segundos de cada leilão novo
    pub duration: u64,
    /// Tempo mínimo restante após um lance; abaixo disso o fim é estendido
    pub time_buffer: u64,
    /// Percentual mínimo (inteiro) acima do maior lance
    pub min_bid_increment_percentage: u32,
    /// Primeiro lance mínimo
    pub reserve_price: i128,
    /// Destino dos valores arrecadados
    pub treasury: Address,
}

// ============================================================================
// LEILÃO
// ============================================================================

/// Leilão corrente. Ausente no storage = nenhum leilão criado ainda.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub token_id: u32,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub start_time: u64,
    pub end_time: u64,
    pub settled: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionPhase {
    Paused,
    Active,
    SettlementPending,
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_error_values() {
        assert_eq!(AuctionError::AlreadyInitialized as u32, 1);
        assert_eq!(AuctionError::MinimumBidNotMet as u32, 6);
        assert_eq!(AuctionError::Unpaused as u32, 11);
        assert_eq!(AuctionError::ReentrantCall as u32, 16);
    }

    #[test]
    fn test_auction_clone() {
        let env = Env::default();
        let a = Auction {
            token_id: 3,
            highest_bid: 10,
            highest_bidder: Some(Address::generate(&env)),
            start_time: 0,
            end_time: 600,
            settled: false,
        };
        assert_eq!(a.clone(), a);
    }
}
