#![no_std]

mod events;
mod founders;
mod issuer;
mod ledger;
mod reserve;
mod schedule;
mod storage;
mod types;
mod validation;

pub mod token;

pub use reserve::{ReservePredicate, ReservePredicateClient};
pub use token::{CollectiveToken, CollectiveTokenClient};
pub use types::*;
