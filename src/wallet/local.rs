use crate::config::Config;
use crate::wallet::{ConnectOutcome, Session, SessionStore, WalletConnector, WalletError};

/// Wallet connector backed by the local session store.
///
/// Connect resolves the account from configuration; an unconfigured account
/// is the decline path, same as a user dismissing a wallet dialog.
pub struct LocalWallet {
    store: SessionStore,
    account: Option<String>,
}

impl LocalWallet {
    pub fn new(config: &Config) -> Self {
        let dir = config
            .wallet
            .session_dir
            .clone()
            .unwrap_or_else(SessionStore::default_dir);
        Self {
            store: SessionStore::new(dir),
            account: config.wallet.address.clone(),
        }
    }

    pub fn with_store(store: SessionStore, account: Option<String>) -> Self {
        Self { store, account }
    }
}

impl WalletConnector for LocalWallet {
    fn connect(&self, scopes: &[&str]) -> Result<ConnectOutcome, WalletError> {
        let Some(address) = self.account.clone() else {
            tracing::info!("no wallet account configured, connect declined");
            return Ok(ConnectOutcome::Cancelled);
        };

        let session = Session {
            address,
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
        };
        self.store.save(&session)?;
        tracing::info!(address = %session.address, "wallet connected");
        Ok(ConnectOutcome::Connected(session))
    }

    fn disconnect(&self) -> Result<(), WalletError> {
        self.store.clear()?;
        tracing::info!("wallet disconnected");
        Ok(())
    }

    fn is_signed_in(&self) -> bool {
        self.store.has_session()
    }

    fn load_session(&self) -> Option<Session> {
        self.store.load()
    }

    fn is_sign_in_pending(&self) -> bool {
        self.store.has_pending()
    }

    fn complete_pending_sign_in(&self) -> Result<Option<Session>, WalletError> {
        let Some(session) = self.store.take_pending()? else {
            return Ok(None);
        };
        self.store.save(&session)?;
        tracing::info!(address = %session.address, "pending sign-in completed");
        Ok(Some(session))
    }
}
