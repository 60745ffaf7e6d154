use soroban_sdk::{contracterror, contracttype, Address};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    OnlyManager = 2,
    OnlyAuctionOrMinter = 3,
    InvalidFounderOwnership = 4,
    NoOwner = 5,
    NotOwner = 6,
    NotAuthorized = 7,
    AlreadyMinted = 8,
    NotReserved = 9,
    FounderNotFound = 10,

    // Todos os 100 slots do ciclo estão com founders ainda em vesting
    AllocationExhausted = 11,
    Overflow = 12,
    ReentrantCall = 13,
}

// ============================================================================
// FOUNDERS
// ============================================================================

/// Entrada de `update_founders`: o id é atribuído pelo contrato.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FounderParams {
    pub wallet: Address,
    /// Basis points (10000 = 100%)
    pub ownership_bps: u32,
    /// Timestamp (segundos) a partir do qual o founder deixa de receber tokens
    pub vest_expiry: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Founder {
    pub id: u32,
    pub wallet: Address,
    pub ownership_bps: u32,
    pub vest_expiry: u64,
}

/// Destino de um token id no momento do mint.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Recipient {
    Founder(u32),
    Auction,
}

// ============================================================================
// PERMISSÕES
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterParams {
    pub minter: Address,
    pub allowed: bool,
}

/// Capacidades checadas na entrada de cada operação.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    Owner,
    Minter,
    AuctionHouse,
}
