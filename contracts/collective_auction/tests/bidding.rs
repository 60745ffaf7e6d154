use collective_auction::{AuctionError, AuctionPhase};
use setup::{TestEnv, BIDDER_FUNDS, DURATION, RESERVE_PRICE, TIME_BUFFER};
use soroban_sdk::{symbol_short, testutils::Address as _, Address};

// ============================================================================
// LANCES
// ============================================================================

#[test]
fn test_first_auction_opens_on_unpause() {
    let t = TestEnv::new();
    t.start();

    let auction = t.house.auction().unwrap();
    assert_eq!(auction.token_id, 0);
    assert_eq!(auction.start_time, 0);
    assert_eq!(auction.end_time, DURATION);
    assert_eq!(auction.highest_bid, 0);
    assert_eq!(auction.highest_bidder, None);
    assert!(!auction.settled);

    assert_eq!(t.token.owner_of(&0), t.house.address);
    assert_eq!(t.house.phase(), AuctionPhase::Active);
}

#[test]
fn test_concrete_bidding_scenario() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();
    let bob = t.bidder();

    assert_eq!(
        t.house.try_create_bid(&alice, &0, &(RESERVE_PRICE - 1)),
        Err(Ok(AuctionError::ReservePriceNotMet))
    );

    // 0.42
    t.house.create_bid(&alice, &0, &4_200_000);
    assert_eq!(t.house.min_next_bid(), 4_620_000);

    // 0.461 < 0.42 * 1.10
    assert_eq!(
        t.house.try_create_bid(&bob, &0, &4_610_000),
        Err(Ok(AuctionError::MinimumBidNotMet))
    );
    assert_eq!(t.asset.balance(&bob), BIDDER_FUNDS);

    // 0.462
    t.house.create_bid(&bob, &0, &4_620_000);

    let auction = t.house.auction().unwrap();
    assert_eq!(auction.highest_bid, 4_620_000);
    assert_eq!(auction.highest_bidder, Some(bob.clone()));
    assert_eq!(t.house_balance(), 4_620_000);
}

#[test]
fn test_outbid_refunds_previous_leader() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();
    let bob = t.bidder();

    t.house.create_bid(&alice, &0, &5_000_000);
    assert_eq!(t.asset.balance(&alice), BIDDER_FUNDS - 5_000_000);

    t.house.create_bid(&bob, &0, &6_000_000);
    assert_eq!(t.asset.balance(&alice), BIDDER_FUNDS);
    assert_eq!(t.asset.balance(&bob), BIDDER_FUNDS - 6_000_000);
    assert_eq!(t.house.credit_of(&alice), 0);
}

#[test]
fn test_house_holds_exactly_highest_bid() {
    let t = TestEnv::new();
    t.start();
    let bidders = [t.bidder(), t.bidder(), t.bidder()];

    let mut amount = RESERVE_PRICE;
    for round in 0..6 {
        let bidder = &bidders[round % 3];
        t.house.create_bid(bidder, &0, &amount);
        assert_eq!(t.house_balance(), amount);
        amount = t.house.min_next_bid();
    }
}

#[test]
fn test_leader_can_raise_own_bid() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    t.house.create_bid(&alice, &0, &5_000_000);
    t.house.create_bid(&alice, &0, &5_500_000);

    assert_eq!(t.asset.balance(&alice), BIDDER_FUNDS - 5_500_000);
    assert_eq!(t.house_balance(), 5_500_000);
}

// ============================================================================
// TIME BUFFER
// ============================================================================

#[test]
fn test_late_bid_extends_end_time() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    t.set_time(540);
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);

    // 600 - 540 = 60 < 300: fim passa a 540 + 300
    assert_eq!(t.house.auction().unwrap().end_time, 540 + TIME_BUFFER);
    assert_eq!(t.count_events(symbol_short!("extended")), 1);
}

#[test]
fn test_early_bid_keeps_end_time() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    t.set_time(100);
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);

    assert_eq!(t.house.auction().unwrap().end_time, DURATION);
    assert_eq!(t.count_events(symbol_short!("extended")), 0);
}

#[test]
fn test_bid_exactly_at_buffer_boundary() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    // 600 - 300 = 300, não é menor que o buffer
    t.set_time(300);
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);
    assert_eq!(t.house.auction().unwrap().end_time, DURATION);
}

#[test]
fn test_repeated_extensions() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();
    let bob = t.bidder();

    t.set_time(590);
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);
    assert_eq!(t.house.auction().unwrap().end_time, 890);

    t.set_time(880);
    t.house.create_bid(&bob, &0, &t.house.min_next_bid());
    assert_eq!(t.house.auction().unwrap().end_time, 1_180);
}

// ============================================================================
// ERROS
// ============================================================================

#[test]
fn test_bid_for_wrong_token_id() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    assert_eq!(
        t.house.try_create_bid(&alice, &1, &RESERVE_PRICE),
        Err(Ok(AuctionError::InvalidTokenId))
    );
}

#[test]
fn test_bid_after_end_time() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();
    let bob = t.bidder();

    // Ainda aceito no segundo final
    t.set_time(DURATION);
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);

    // O lance acima estendeu o fim para 900
    t.set_time(DURATION + TIME_BUFFER + 1);
    assert_eq!(
        t.house.try_create_bid(&bob, &0, &10_000_000),
        Err(Ok(AuctionError::AuctionOver))
    );
    assert_eq!(t.house.phase(), AuctionPhase::SettlementPending);
}

#[test]
fn test_bid_on_settled_auction() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    t.house.pause(&t.treasury);
    t.set_time(DURATION + 1);
    t.house.settle_auction();

    assert_eq!(
        t.house.try_create_bid(&alice, &0, &RESERVE_PRICE),
        Err(Ok(AuctionError::InvalidTokenId))
    );
}

#[test]
fn test_bid_without_funds_reverts() {
    let t = TestEnv::new();
    t.start();
    let broke = Address::generate(&t.env);

    assert!(t.house.try_create_bid(&broke, &0, &RESERVE_PRICE).is_err());
    assert_eq!(t.house.auction().unwrap().highest_bidder, None);
}

#[test]
fn test_non_positive_bid() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();

    assert_eq!(
        t.house.try_create_bid(&alice, &0, &0),
        Err(Ok(AuctionError::InvalidAmount))
    );
}

#[test]
fn test_zero_reserve_price_rejected() {
    let t = TestEnv::new();
    t.start();
    t.house.pause(&t.treasury);

    assert_eq!(
        t.house.try_set_reserve_price(&t.treasury, &0),
        Err(Ok(AuctionError::InvalidSettings))
    );

    // Reserva mínima de 1 unidade aceita um primeiro lance de 1
    t.house.set_reserve_price(&t.treasury, &1);
    t.house.unpause(&t.treasury);
    let alice = t.bidder();
    t.house.create_bid(&alice, &0, &1);
    assert_eq!(t.house_balance(), 1);
}
