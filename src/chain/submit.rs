//! Contract-call submission.
//!
//! Signing and broadcasting are delegated to an external signer. The app only
//! hands over the call parameters and learns whether a transaction was
//! broadcast or the user declined.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chain::Network;
use crate::config::{AppIdentity, Config};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The mint entry point on the contract. Takes no arguments.
pub const MINT_FN: &str = "mint";

/// Parameters of a contract call handed to the signer.
#[derive(Debug, Clone, Serialize)]
pub struct ContractCallRequest {
    pub contract_address: String,
    pub contract_name: String,
    pub function: String,
    pub arguments: Vec<String>,
    pub network: Network,
    pub app: AppIdentity,
}

impl ContractCallRequest {
    /// The zero-argument mint call for the configured contract.
    pub fn mint(config: &Config) -> Self {
        Self {
            contract_address: config.contract.address.clone(),
            contract_name: config.contract.name.clone(),
            function: MINT_FN.to_string(),
            arguments: Vec::new(),
            network: config.network,
            app: config.app.clone(),
        }
    }
}

/// Terminal outcome of a submission attempt.
///
/// Declines, signer errors, and an unconfigured signer all surface as
/// `Cancelled`; the UI treats them the same way the web client treats a
/// dismissed wallet popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Broadcast { txid: String },
    Cancelled,
}

/// Future returned by [`CallSubmitter::submit`]. Boxed so the trait stays
/// object-safe.
pub type SubmitFuture<'a> = Pin<Box<dyn Future<Output = SubmitOutcome> + Send + 'a>>;

/// Boundary to whatever signs and broadcasts the call.
pub trait CallSubmitter: Send + Sync {
    fn submit(&self, request: ContractCallRequest) -> SubmitFuture<'_>;
}

#[derive(Deserialize)]
struct SignerResponse {
    txid: String,
}

/// Submitter that POSTs the call request to an HTTP signer endpoint.
pub struct SignerSubmitter {
    client: Client,
    endpoint: Option<String>,
}

impl SignerSubmitter {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build signer client");

        Self {
            client,
            endpoint: config.wallet.signer_url.clone(),
        }
    }
}

impl CallSubmitter for SignerSubmitter {
    fn submit(&self, request: ContractCallRequest) -> SubmitFuture<'_> {
        Box::pin(async move {
            let Some(endpoint) = self.endpoint.as_deref() else {
                tracing::info!("no signer configured, treating mint as cancelled");
                return SubmitOutcome::Cancelled;
            };

            let response = match self.client.post(endpoint).json(&request).send().await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!(%err, "signer unreachable");
                    return SubmitOutcome::Cancelled;
                }
            };

            if !response.status().is_success() {
                tracing::info!(status = %response.status(), "signer declined contract call");
                return SubmitOutcome::Cancelled;
            }

            match response.json::<SignerResponse>().await {
                Ok(body) => {
                    tracing::info!(txid = %body.txid, "contract call broadcast");
                    SubmitOutcome::Broadcast { txid: body.txid }
                }
                Err(err) => {
                    tracing::warn!(%err, "signer response malformed");
                    SubmitOutcome::Cancelled
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_request_uses_configured_contract() {
        let config = Config::default();
        let request = ContractCallRequest::mint(&config);
        assert_eq!(request.function, "mint");
        assert!(request.arguments.is_empty());
        assert_eq!(request.contract_address, config.contract.address);
        assert_eq!(request.contract_name, "simple-nft-v2");
    }

    #[tokio::test]
    async fn unconfigured_signer_cancels() {
        let submitter = SignerSubmitter::new(&Config::default());
        let outcome = submitter
            .submit(ContractCallRequest::mint(&Config::default()))
            .await;
        assert_eq!(outcome, SubmitOutcome::Cancelled);
    }
}
