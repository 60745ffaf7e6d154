#![no_std]

mod auction;
mod bidding;
mod events;
mod interfaces;
mod payout;
mod settlement;
mod storage;
mod types;
mod validation;

pub use auction::{CollectiveAuction, CollectiveAuctionClient};
pub use interfaces::{TokenIssuer, TokenIssuerClient};
pub use types::*;
