use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Stacks network the app operates on. Selects the read-only API host and
/// the explorer link format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Base URL of the Hiro API for this network.
    pub fn api_base(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.mainnet.hiro.so",
            Network::Testnet => "https://api.testnet.hiro.so",
        }
    }

    /// Explorer URL for a broadcast transaction.
    ///
    /// Testnet links carry a `?chain=testnet` query so the explorer looks
    /// the transaction up on the right chain.
    pub fn explorer_tx_url(&self, txid: &str) -> String {
        match self {
            Network::Mainnet => format!("https://explorer.hiro.so/txid/{}", txid),
            Network::Testnet => format!("https://explorer.hiro.so/txid/{}?chain=testnet", txid),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
