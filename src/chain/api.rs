//! Read-only contract calls against the Hiro API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chain::clarity::{ClarityError, ClarityValue};
use crate::config::Config;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The function the contract exposes for its mint counter.
pub const TOTAL_MINTED_FN: &str = "get-total-minted";

/// Errors from a read-only contract call.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Call rejected by node: {cause}")]
    NotOkay { cause: String },

    #[error("Response carried no result value")]
    MissingResult,

    #[error("Failed to decode result: {0}")]
    Decode(#[from] ClarityError),
}

#[derive(Serialize)]
struct CallReadRequest<'a> {
    sender: &'a str,
    arguments: &'a [String],
}

#[derive(Deserialize)]
struct CallReadResponse {
    okay: bool,
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    cause: Option<String>,
}

/// Client for `POST /v2/contracts/call-read/{address}/{name}/{function}`.
#[derive(Clone)]
pub struct ReadOnlyClient {
    client: Client,
    base_url: String,
    contract_address: String,
    contract_name: String,
}

impl ReadOnlyClient {
    pub fn new(config: &Config) -> Self {
        let base_url = config
            .api
            .base_url
            .clone()
            .unwrap_or_else(|| config.network.api_base().to_string());

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build read-only client");

        Self {
            client,
            base_url,
            contract_address: config.contract.address.clone(),
            contract_name: config.contract.name.clone(),
        }
    }

    /// Calls a zero-argument read-only function and decodes its result.
    pub async fn call_read(&self, function: &str) -> Result<ClarityValue, ChainError> {
        let url = format!(
            "{}/v2/contracts/call-read/{}/{}/{}",
            self.base_url, self.contract_address, self.contract_name, function
        );
        // The contract principal doubles as the sender, same as the web client.
        let body = CallReadRequest {
            sender: &self.contract_address,
            arguments: &[],
        };

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ChainError::Status(response.status().as_u16()));
        }

        let payload: CallReadResponse = response.json().await?;
        if !payload.okay {
            return Err(ChainError::NotOkay {
                cause: payload.cause.unwrap_or_default(),
            });
        }
        let result = payload.result.ok_or(ChainError::MissingResult)?;
        Ok(ClarityValue::decode_hex(&result)?)
    }

    /// Best-effort read of the mint counter.
    ///
    /// Every failure collapses to `None`; callers render `0`. The real cause
    /// only reaches the debug log.
    pub async fn total_minted(&self) -> Option<u128> {
        match self.call_read(TOTAL_MINTED_FN).await {
            Ok(value) => match value.as_u128() {
                Some(count) => Some(count),
                None => {
                    tracing::debug!(?value, "minted count is not an unsigned integer");
                    None
                }
            },
            Err(err) => {
                tracing::debug!(%err, "failed to fetch minted count");
                None
            }
        }
    }
}
