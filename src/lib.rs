//! Fetches an Alpaca paper-trading account's portfolio value and encodes it
//! as a big-endian uint256 in cents, the shape an oracle network relays
//! on-chain. The binary is a local simulator harness that runs the same
//! sequence and prints the decoded result.

pub mod api;
pub mod config;
pub mod credentials;
pub mod encode;
pub mod error;
pub mod source;
