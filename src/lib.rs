pub mod dates;
pub mod filter;
pub mod fixture_fetch;
pub mod fixtures;
pub mod grouping;
pub mod markets;
pub mod mock;
pub mod models;
pub mod pins;
pub mod priorities;
pub mod provider;
