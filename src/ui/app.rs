use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::chain::{CallSubmitter, ContractCallRequest, ReadOnlyClient, SubmitOutcome};
use crate::config::Config;
use crate::ui::events::AppEvent;
use crate::ui::mint::{MintIntent, MintReducer, MintViewState};
use crate::ui::mvi::Reducer;
use crate::wallet::{ConnectOutcome, WalletConnector, PERMISSION_SCOPES};

/// How long after a successful mint to re-read the counter, so the chain has
/// a chance to confirm the transaction.
const CONFIRMATION_REFRESH_DELAY: Duration = Duration::from_secs(10);

pub struct App {
    should_quit: bool,
    view: MintViewState,
    config: Config,
    wallet: Arc<dyn WalletConnector>,
    submitter: Arc<dyn CallSubmitter>,
    reader: ReadOnlyClient,
    runtime: tokio::runtime::Handle,
    events: Sender<AppEvent>,
    /// When the current status should auto-dismiss, if it asked to.
    status_deadline: Option<Instant>,
    /// Delay before the post-mint counter refresh.
    confirmation_delay: Duration,
}

impl App {
    pub fn new(
        config: Config,
        wallet: Arc<dyn WalletConnector>,
        submitter: Arc<dyn CallSubmitter>,
        runtime: tokio::runtime::Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let reader = ReadOnlyClient::new(&config);
        Self {
            should_quit: false,
            view: MintViewState::new(config.network),
            config,
            wallet,
            submitter,
            reader,
            runtime,
            events,
            status_deadline: None,
            confirmation_delay: CONFIRMATION_REFRESH_DELAY,
        }
    }

    /// Overrides the post-mint refresh delay. Callers that cannot wait out
    /// real chain-confirmation latency shorten it.
    pub fn set_confirmation_delay(&mut self, delay: Duration) {
        self.confirmation_delay = delay;
    }

    /// Deadline of the current auto-dismissing status, if any.
    pub fn status_deadline(&self) -> Option<Instant> {
        self.status_deadline
    }

    pub fn view(&self) -> &MintViewState {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Startup sequence: kick off the count fetch, hydrate an existing
    /// session, then complete a pending sign-in if one was left behind.
    pub fn startup(&mut self) {
        self.refresh_minted_count(None);

        if self.wallet.is_signed_in() {
            if let Some(session) = self.wallet.load_session() {
                self.dispatch(MintIntent::SessionRestored {
                    address: session.address,
                });
            }
        }

        if self.wallet.is_sign_in_pending() {
            let wallet = Arc::clone(&self.wallet);
            let tx = self.events.clone();
            self.runtime.spawn(async move {
                match wallet.complete_pending_sign_in() {
                    Ok(Some(session)) => {
                        let _ = tx.send(AppEvent::SessionRestored(session));
                    }
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(%err, "failed to complete pending sign-in");
                    }
                }
            });
        }
    }

    /// Connect trigger. Ignored while a session already exists.
    pub fn connect(&mut self) {
        if self.view.is_connected() {
            return;
        }
        self.dispatch(MintIntent::ConnectOpened);

        let wallet = Arc::clone(&self.wallet);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = match wallet.connect(&PERMISSION_SCOPES) {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::warn!(%err, "wallet connect failed");
                    ConnectOutcome::Cancelled
                }
            };
            let _ = tx.send(AppEvent::ConnectDone(outcome));
        });
    }

    /// Disconnect trigger. Clears the session and any visible status.
    ///
    /// An in-flight mint submission is not aborted; its completion is
    /// reported against whatever state exists by then.
    pub fn disconnect(&mut self) {
        if !self.view.is_connected() {
            return;
        }
        if let Err(err) = self.wallet.disconnect() {
            tracing::warn!(%err, "wallet disconnect failed");
        }
        self.dispatch(MintIntent::Disconnected);
    }

    /// Mint trigger. The reducer guards against a missing session; a
    /// submission is only spawned when the view actually entered the
    /// minting phase on this dispatch.
    pub fn mint(&mut self) {
        let was_minting = self.view.is_minting();
        self.dispatch(MintIntent::MintRequested);
        if was_minting || !self.view.is_minting() {
            return;
        }

        let request = ContractCallRequest::mint(&self.config);
        let submitter = Arc::clone(&self.submitter);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = submitter.submit(request).await;
            let _ = tx.send(AppEvent::MintDone(outcome));
        });
    }

    /// Async completion arriving from an effect task.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConnectDone(ConnectOutcome::Connected(session)) => {
                self.dispatch(MintIntent::ConnectFinished {
                    address: session.address,
                });
                self.refresh_minted_count(None);
            }
            AppEvent::ConnectDone(ConnectOutcome::Cancelled) => {
                self.dispatch(MintIntent::ConnectCancelled);
            }
            AppEvent::SessionRestored(session) => {
                self.dispatch(MintIntent::SessionRestored {
                    address: session.address,
                });
            }
            AppEvent::MintDone(SubmitOutcome::Broadcast { txid }) => {
                self.dispatch(MintIntent::MintFinished { txid });
                self.refresh_minted_count(Some(self.confirmation_delay));
            }
            AppEvent::MintDone(SubmitOutcome::Cancelled) => {
                self.dispatch(MintIntent::MintCancelled);
            }
            AppEvent::MintedCount(Some(value)) => {
                self.dispatch(MintIntent::CountRefreshed { value });
            }
            AppEvent::MintedCount(None) => {
                self.dispatch(MintIntent::CountUnavailable);
            }
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.status_deadline {
            if Instant::now() >= deadline {
                self.dispatch(MintIntent::StatusExpired);
            }
        }
    }

    fn refresh_minted_count(&self, delay: Option<Duration>) {
        let reader = self.reader.clone();
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let count = reader.total_minted().await;
            let _ = tx.send(AppEvent::MintedCount(count));
        });
    }

    fn dispatch(&mut self, intent: MintIntent) {
        tracing::debug!(?intent, "dispatch");
        // Counter and restore intents never touch the status, so they must
        // not disturb a running dismiss countdown. Every other intent owns
        // the status region and restarts the countdown, including a
        // re-emitted identical message.
        let touches_status = !matches!(
            intent,
            MintIntent::CountRefreshed { .. }
                | MintIntent::CountUnavailable
                | MintIntent::SessionRestored { .. }
        );
        self.view = MintReducer::reduce(std::mem::take(&mut self.view), intent);
        if touches_status {
            self.status_deadline = self
                .view
                .status
                .as_ref()
                .and_then(|status| status.dismiss_after)
                .map(|after| Instant::now() + after);
        }
    }
}
