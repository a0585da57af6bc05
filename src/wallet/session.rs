use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::wallet::{Session, WalletError};

const SESSION_FILE: &str = "session.json";
const PENDING_FILE: &str = "pending.json";

/// File-backed session persistence under a single directory.
///
/// `session.json` holds the active session; `pending.json` is the hand-off
/// file an external sign-in flow leaves behind for the next startup to
/// promote. All file access goes through one mutex so effect tasks and the
/// UI thread cannot interleave partial writes.
pub struct SessionStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            lock: Mutex::new(()),
        }
    }

    /// Default store location under the platform data directory.
    pub fn default_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("stacks-mint")
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn pending_path(&self) -> PathBuf {
        self.dir.join(PENDING_FILE)
    }

    pub fn load(&self) -> Option<Session> {
        let _guard = self.lock.lock();
        read_session(&self.session_path())
    }

    pub fn save(&self, session: &Session) -> Result<(), WalletError> {
        let _guard = self.lock.lock();
        fs::create_dir_all(&self.dir).map_err(|e| WalletError::Io {
            path: self.dir.clone(),
            source: e,
        })?;
        let path = self.session_path();
        let json = serde_json::to_string_pretty(session).map_err(|e| WalletError::Corrupt {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, json).map_err(|e| WalletError::Io { path, source: e })
    }

    pub fn clear(&self) -> Result<(), WalletError> {
        let _guard = self.lock.lock();
        let path = self.session_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WalletError::Io { path, source: e }),
        }
    }

    pub fn has_session(&self) -> bool {
        let _guard = self.lock.lock();
        self.session_path().exists()
    }

    pub fn has_pending(&self) -> bool {
        let _guard = self.lock.lock();
        self.pending_path().exists()
    }

    /// Removes and returns the pending sign-in, if any.
    pub fn take_pending(&self) -> Result<Option<Session>, WalletError> {
        let _guard = self.lock.lock();
        let path = self.pending_path();
        let Some(session) = read_session(&path) else {
            return Ok(None);
        };
        fs::remove_file(&path).ok();
        Ok(Some(session))
    }
}

fn read_session(path: &Path) -> Option<Session> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring corrupt session file");
            None
        }
    }
}
