//! Chain access: network selection, read-only contract calls, Clarity value
//! decoding, and contract-call submission via an external signer.

pub mod api;
pub mod clarity;
mod network;
pub mod submit;

pub use api::{ChainError, ReadOnlyClient};
pub use clarity::{ClarityError, ClarityValue};
pub use network::Network;
pub use submit::{CallSubmitter, ContractCallRequest, SignerSubmitter, SubmitFuture, SubmitOutcome};
