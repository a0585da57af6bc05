use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chain::Network;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub network: Network,
    /// Mint price in micro-STX. Display only; the contract enforces the real price.
    #[serde(default = "default_mint_price")]
    pub mint_price: u64,
    #[serde(default)]
    pub app: AppIdentity,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

/// Identity of the NFT contract all calls are made against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Principal that deployed the contract.
    pub address: String,
    /// Contract name under that principal.
    pub name: String,
}

/// How the app presents itself to the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppIdentity {
    pub name: String,
    pub icon: String,
}

/// Overrides for the read-only chain API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base URL override. When unset, the network's Hiro API host is used.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Local wallet settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WalletConfig {
    /// Account address connect() resolves to. Connecting without one
    /// behaves like the user dismissing the wallet dialog.
    #[serde(default)]
    pub address: Option<String>,
    /// Endpoint of the external signer that broadcasts contract calls.
    #[serde(default)]
    pub signer_url: Option<String>,
    /// Directory for session files. Defaults to the platform data dir.
    #[serde(default)]
    pub session_dir: Option<PathBuf>,
}

fn default_mint_price() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contract: ContractConfig::default(),
            network: Network::default(),
            mint_price: default_mint_price(),
            app: AppIdentity::default(),
            api: ApiConfig::default(),
            wallet: WalletConfig::default(),
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: "SP31G2FZ5JN87BATZMP4ZRYE5F7WZQDNEXJ7G7X97".to_string(),
            name: "simple-nft-v2".to_string(),
        }
    }
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            name: "Simple NFT".to_string(),
            icon: "https://snfish.vercel.app/icon.png".to_string(),
        }
    }
}
