use std::time::Duration;

use crate::ui::mint::intent::MintIntent;
use crate::ui::mint::state::{MintViewState, Severity, StatusLine, WalletPhase};
use crate::ui::mvi::Reducer;

/// Success confirmations linger briefly; errors a little longer.
const SUCCESS_DISMISS: Duration = Duration::from_secs(2);
const ERROR_DISMISS: Duration = Duration::from_secs(3);

pub struct MintReducer;

impl Reducer for MintReducer {
    type State = MintViewState;
    type Intent = MintIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MintIntent::SessionRestored { address } => MintViewState {
                phase: WalletPhase::Connected {
                    address,
                    minting: false,
                },
                ..state
            },

            MintIntent::ConnectOpened => MintViewState {
                status: Some(StatusLine::info("Opening wallet...")),
                ..state
            },

            MintIntent::ConnectFinished { address } => MintViewState {
                phase: WalletPhase::Connected {
                    address,
                    minting: false,
                },
                status: Some(StatusLine::success("Connected!", Some(SUCCESS_DISMISS))),
                ..state
            },

            MintIntent::ConnectCancelled => MintViewState {
                status: Some(StatusLine::error("Connection cancelled", ERROR_DISMISS)),
                ..state
            },

            MintIntent::Disconnected => MintViewState {
                phase: WalletPhase::Disconnected,
                status: None,
                ..state
            },

            MintIntent::MintRequested => {
                let MintViewState {
                    network,
                    phase,
                    status,
                    minted,
                } = state;
                match phase {
                    WalletPhase::Disconnected => MintViewState {
                        network,
                        phase: WalletPhase::Disconnected,
                        status: Some(StatusLine::error(
                            "Please connect your wallet first",
                            ERROR_DISMISS,
                        )),
                        minted,
                    },
                    // Trigger already in flight; the control is disabled, but
                    // the guard holds even if the input path regresses.
                    WalletPhase::Connected {
                        address,
                        minting: true,
                    } => MintViewState {
                        network,
                        phase: WalletPhase::Connected {
                            address,
                            minting: true,
                        },
                        status,
                        minted,
                    },
                    WalletPhase::Connected {
                        address,
                        minting: false,
                    } => MintViewState {
                        network,
                        phase: WalletPhase::Connected {
                            address,
                            minting: true,
                        },
                        status: Some(StatusLine::info("Opening wallet for approval...")),
                        minted,
                    },
                }
            }

            MintIntent::MintFinished { txid } => {
                let MintViewState {
                    network,
                    phase,
                    minted,
                    ..
                } = state;
                let link = network.explorer_tx_url(&txid);
                MintViewState {
                    network,
                    phase: settled(phase),
                    status: Some(StatusLine {
                        text: "NFT minted! View on Explorer:".to_string(),
                        severity: Severity::Success,
                        link: Some(link),
                        dismiss_after: None,
                    }),
                    minted,
                }
            }

            MintIntent::MintCancelled => {
                let MintViewState {
                    network,
                    phase,
                    minted,
                    ..
                } = state;
                MintViewState {
                    network,
                    phase: settled(phase),
                    status: Some(StatusLine::error("Transaction cancelled", ERROR_DISMISS)),
                    minted,
                }
            }

            MintIntent::CountRefreshed { value } => MintViewState {
                minted: Some(value),
                ..state
            },

            MintIntent::CountUnavailable => MintViewState {
                minted: None,
                ..state
            },

            MintIntent::StatusExpired => MintViewState {
                status: None,
                ..state
            },
        }
    }
}

/// Phase after a mint submission reached a terminal outcome: the trigger is
/// re-enabled, and a session dropped mid-mint stays dropped.
fn settled(phase: WalletPhase) -> WalletPhase {
    match phase {
        WalletPhase::Connected { address, .. } => WalletPhase::Connected {
            address,
            minting: false,
        },
        WalletPhase::Disconnected => WalletPhase::Disconnected,
    }
}
