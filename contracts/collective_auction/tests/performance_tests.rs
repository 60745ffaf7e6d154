use std::time::Instant;

use setup::{TestEnv, DURATION, RESERVE_PRICE};

// ============================================================================
// TESTES DE PERFORMANCE - CASA DE LEILÃO
// ============================================================================

#[test]
fn test_performance_create_bid_with_refund() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();
    let bob = t.bidder();
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);

    let amount = t.house.min_next_bid();
    let start = Instant::now();
    t.house.create_bid(&bob, &0, &amount);
    let duration = start.elapsed();

    println!("=== Performance: Lance com reembolso ===");
    println!("Time: {:.3}ms", duration.as_secs_f64() * 1000.0);
    t.env.budget().print();
    println!();
}

#[test]
fn test_performance_settle_and_create() {
    let t = TestEnv::new();
    t.start();
    let alice = t.bidder();
    t.house.create_bid(&alice, &0, &RESERVE_PRICE);
    t.set_time(DURATION + 1);

    let start = Instant::now();
    t.house.settle_current_and_create_new();
    let duration = start.elapsed();

    assert_eq!(t.token.owner_of(&0), alice);

    println!("=== Performance: Liquidação + novo leilão ===");
    println!("Time: {:.3}ms", duration.as_secs_f64() * 1000.0);
    t.env.budget().print();
    println!();
}
