use std::time::Duration;

use crate::chain::Network;
use crate::ui::mvi::UiState;

/// Connection/mint phase of the wallet.
///
/// The mint trigger is live only in `Connected { minting: false }`; there is
/// no path from `Disconnected` into a mint.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WalletPhase {
    #[default]
    Disconnected,
    Connected { address: String, minting: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Transient status message. The next status or an explicit clear always
/// supersedes it; `dismiss_after` is picked up by the runtime's tick timer.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
    pub link: Option<String>,
    pub dismiss_after: Option<Duration>,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
            link: None,
            dismiss_after: None,
        }
    }

    pub fn success(text: impl Into<String>, dismiss_after: Option<Duration>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
            link: None,
            dismiss_after,
        }
    }

    pub fn error(text: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
            link: None,
            dismiss_after: Some(dismiss_after),
        }
    }
}

/// Everything the mint screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MintViewState {
    pub network: Network,
    pub phase: WalletPhase,
    pub status: Option<StatusLine>,
    /// Last successfully fetched counter value. `None` renders as `0`,
    /// whether the fetch failed or never ran; the chain log keeps the
    /// distinction.
    pub minted: Option<u128>,
}

impl UiState for MintViewState {}

impl MintViewState {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.phase {
            WalletPhase::Connected { address, .. } => Some(address),
            WalletPhase::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.phase, WalletPhase::Connected { .. })
    }

    pub fn is_minting(&self) -> bool {
        matches!(self.phase, WalletPhase::Connected { minting: true, .. })
    }

    /// Whether the mint trigger may fire.
    pub fn mint_enabled(&self) -> bool {
        matches!(self.phase, WalletPhase::Connected { minting: false, .. })
    }
}
