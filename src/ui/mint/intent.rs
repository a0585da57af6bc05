use crate::ui::mvi::Intent;

/// User actions and async completions on the mint screen.
#[derive(Debug, Clone, PartialEq)]
pub enum MintIntent {
    /// A prior session was hydrated at startup.
    SessionRestored { address: String },
    /// Connect requested; the wallet dialog is opening.
    ConnectOpened,
    ConnectFinished { address: String },
    ConnectCancelled,
    Disconnected,
    /// Mint trigger fired. The reducer guards against a missing session.
    MintRequested,
    MintFinished { txid: String },
    MintCancelled,
    CountRefreshed { value: u128 },
    CountUnavailable,
    /// The current status reached its auto-dismiss deadline.
    StatusExpired,
}

impl Intent for MintIntent {}
