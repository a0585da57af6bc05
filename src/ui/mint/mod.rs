//! The wallet-session and mint-status view-state machine.

mod intent;
mod reducer;
mod state;

pub use intent::MintIntent;
pub use reducer::MintReducer;
pub use state::{MintViewState, Severity, StatusLine, WalletPhase};
