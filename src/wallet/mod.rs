//! Wallet session handling.
//!
//! Cryptography and key custody live outside this app. What remains is the
//! session surface the UI needs: connect, disconnect, and hydrating a session
//! that already exists (including one left behind by an interrupted sign-in).

mod local;
mod session;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub use local::LocalWallet;
pub use session::SessionStore;

/// Permission scopes requested when connecting.
pub const PERMISSION_SCOPES: [&str; 2] = ["write-store", "publish-data"];

/// A connected wallet session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub address: String,
    pub scopes: Vec<String>,
}

/// Result of a connect attempt. Declining is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(Session),
    Cancelled,
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Boundary to the wallet session provider.
pub trait WalletConnector: Send + Sync {
    /// Requests a session with the given permission scopes.
    fn connect(&self, scopes: &[&str]) -> Result<ConnectOutcome, WalletError>;

    /// Tears down the current session, if any.
    fn disconnect(&self) -> Result<(), WalletError>;

    fn is_signed_in(&self) -> bool;

    /// The current session, if one exists.
    fn load_session(&self) -> Option<Session>;

    /// Whether a sign-in started elsewhere is waiting to be completed.
    fn is_sign_in_pending(&self) -> bool;

    /// Promotes a pending sign-in to a full session.
    fn complete_pending_sign_in(&self) -> Result<Option<Session>, WalletError>;
}
