//! App wiring: which effects get scheduled around the reducer, driven
//! headless through the same event channel the terminal loop uses.

use std::fs;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Json;
use axum::routing::post;
use axum::Router;
use serde_json::json;
use tempfile::TempDir;

use stacks_mint::chain::{
    CallSubmitter, ContractCallRequest, SubmitFuture, SubmitOutcome,
};
use stacks_mint::config::Config;
use stacks_mint::ui::app::App;
use stacks_mint::ui::events::AppEvent;
use stacks_mint::ui::mint::Severity;
use stacks_mint::wallet::{ConnectOutcome, LocalWallet, Session, PERMISSION_SCOPES};

const ADDRESS: &str = "SP31G2FZ5JN87BATZMP4ZRYE5F7WZQDNEXJ7G7X97";
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

fn uint_hex(value: u128) -> String {
    let mut hex = String::from("0x01");
    for byte in value.to_be_bytes() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

fn session() -> Session {
    Session {
        address: ADDRESS.to_string(),
        scopes: PERMISSION_SCOPES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Submitter that records whether it was called and resolves immediately.
struct RecordingSubmitter {
    outcome: SubmitOutcome,
    called: AtomicBool,
}

impl RecordingSubmitter {
    fn broadcast(txid: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: SubmitOutcome::Broadcast {
                txid: txid.to_string(),
            },
            called: AtomicBool::new(false),
        })
    }

    fn was_called(&self) -> bool {
        self.called.load(Ordering::SeqCst)
    }
}

impl CallSubmitter for RecordingSubmitter {
    fn submit(&self, _request: ContractCallRequest) -> SubmitFuture<'_> {
        self.called.store(true, Ordering::SeqCst);
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

struct Harness {
    app: App,
    events: Receiver<AppEvent>,
    submitter: Arc<RecordingSubmitter>,
    session_dir: TempDir,
    _runtime: tokio::runtime::Runtime,
}

/// Headless app over a tempdir wallet and a mock API that always reports a
/// minted count of 42. The confirmation delay is shortened so the deferred
/// refresh is observable within test time.
fn harness() -> Harness {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let api_addr = start_mock_api(&runtime, 42);
    let session_dir = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.api.base_url = Some(format!("http://{}", api_addr));
    config.wallet.address = Some(ADDRESS.to_string());
    config.wallet.session_dir = Some(session_dir.path().to_path_buf());

    let wallet = Arc::new(LocalWallet::new(&config));
    let submitter = RecordingSubmitter::broadcast("T");
    let submitter_dyn: Arc<dyn CallSubmitter> = submitter.clone();
    let (tx, rx) = mpsc::channel();

    let mut app = App::new(config, wallet, submitter_dyn, runtime.handle().clone(), tx);
    app.set_confirmation_delay(Duration::from_millis(50));

    Harness {
        app,
        events: rx,
        submitter,
        session_dir,
        _runtime: runtime,
    }
}

fn start_mock_api(runtime: &tokio::runtime::Runtime, count: u128) -> SocketAddr {
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = json!({ "okay": true, "result": uint_hex(count) });
        let router = Router::new().route(
            "/v2/contracts/call-read/{address}/{contract}/{function}",
            post(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    })
}

/// Blocks until an event matching `pick` arrives, skipping the rest.
fn wait_for<T>(
    events: &Receiver<AppEvent>,
    mut pick: impl FnMut(AppEvent) -> Option<T>,
) -> T {
    let deadline = Instant::now() + EVENT_TIMEOUT;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match events.recv_timeout(remaining) {
            Ok(event) => {
                if let Some(found) = pick(event) {
                    return found;
                }
            }
            Err(err) => panic!("no matching event within {:?}: {}", EVENT_TIMEOUT, err),
        }
    }
}

fn wait_for_count(events: &Receiver<AppEvent>) -> Option<u128> {
    wait_for(events, |event| match event {
        AppEvent::MintedCount(count) => Some(count),
        _ => None,
    })
}

#[test]
fn startup_restores_session_and_fetches_count() {
    let mut h = harness();
    fs::write(
        h.session_dir.path().join("session.json"),
        serde_json::to_string(&session()).unwrap(),
    )
    .unwrap();

    h.app.startup();

    // Session hydration happens before control returns.
    assert_eq!(h.app.view().address(), Some(ADDRESS));
    // The counter fetch runs as an effect and reports back on the channel.
    assert_eq!(wait_for_count(&h.events), Some(42));
}

#[test]
fn startup_completes_pending_sign_in() {
    let mut h = harness();
    fs::write(
        h.session_dir.path().join("pending.json"),
        serde_json::to_string(&session()).unwrap(),
    )
    .unwrap();

    h.app.startup();
    assert!(!h.app.view().is_connected());

    let restored = wait_for(&h.events, |event| match event {
        AppEvent::SessionRestored(session) => Some(session),
        _ => None,
    });
    h.app.on_event(AppEvent::SessionRestored(restored));

    assert_eq!(h.app.view().address(), Some(ADDRESS));
    assert!(!h.session_dir.path().join("pending.json").exists());
}

#[test]
fn connect_success_schedules_count_refresh() {
    let mut h = harness();

    h.app.connect();
    let outcome = wait_for(&h.events, |event| match event {
        AppEvent::ConnectDone(outcome) => Some(outcome),
        _ => None,
    });
    assert_eq!(outcome, ConnectOutcome::Connected(session()));
    h.app.on_event(AppEvent::ConnectDone(outcome));

    assert!(h.app.view().is_connected());
    assert_eq!(wait_for_count(&h.events), Some(42));
}

#[test]
fn mint_broadcast_schedules_deferred_count_refresh() {
    let mut h = harness();
    h.app
        .on_event(AppEvent::ConnectDone(ConnectOutcome::Connected(session())));
    // Consume the connect-triggered refresh so the next count event is the
    // post-mint one.
    assert_eq!(wait_for_count(&h.events), Some(42));

    h.app.mint();
    assert!(h.app.view().is_minting());

    let outcome = wait_for(&h.events, |event| match event {
        AppEvent::MintDone(outcome) => Some(outcome),
        _ => None,
    });
    assert!(h.submitter.was_called());
    let scheduled_at = Instant::now();
    h.app.on_event(AppEvent::MintDone(outcome));

    assert!(h.app.view().mint_enabled());
    assert_eq!(wait_for_count(&h.events), Some(42));
    // The refresh waits out the confirmation delay before hitting the API.
    assert!(scheduled_at.elapsed() >= Duration::from_millis(50));
}

#[test]
fn mint_without_session_submits_nothing() {
    let mut h = harness();

    h.app.mint();

    assert!(!h.submitter.was_called());
    let status = h.app.view().status.as_ref().expect("guard status");
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, "Please connect your wallet first");
    // No effect task was spawned, so nothing reports back.
    match h.events.recv_timeout(Duration::from_millis(200)) {
        Err(RecvTimeoutError::Timeout) => {}
        Ok(_) => panic!("unexpected effect completion after guarded mint"),
        Err(err) => panic!("event channel failed: {}", err),
    }
}

#[test]
fn repeated_guard_error_restarts_dismiss_countdown() {
    let mut h = harness();

    h.app.mint();
    let first = h.app.status_deadline().expect("dismiss deadline");

    std::thread::sleep(Duration::from_millis(30));
    // Identical status text re-emitted back to back still gets a fresh
    // countdown.
    h.app.mint();
    let second = h.app.status_deadline().expect("dismiss deadline");

    assert!(second > first);
}

#[test]
fn count_refresh_does_not_extend_dismiss_countdown() {
    let mut h = harness();

    h.app.mint();
    let before = h.app.status_deadline().expect("dismiss deadline");

    h.app.on_event(AppEvent::MintedCount(Some(7)));

    assert_eq!(h.app.status_deadline(), Some(before));
    assert_eq!(h.app.view().minted, Some(7));
}
