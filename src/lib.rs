//! Terminal client for a Stacks NFT mint contract.
//!
//! The crate is split along the seams the app actually has:
//!
//! - [`config`]: TOML configuration (contract identity, network, app details)
//! - [`chain`]: read-only contract calls, Clarity value decoding, call submission
//! - [`wallet`]: wallet session handling behind the [`wallet::WalletConnector`] trait
//! - [`ui`]: MVI view state, event loop, and ratatui rendering

pub mod chain;
pub mod config;
pub mod ui;
pub mod wallet;
