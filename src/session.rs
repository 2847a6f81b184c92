//! Process-wide session state
//!
//! The session is a thin view over a persisted key/value store. The bearer
//! token is looked up at every outbound request, so there is no per-request
//! pinning: whatever the store holds at dispatch time is what gets sent.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key for the logged-in flag
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Storage key for the cached identity record
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Persisted client-side key/value storage.
pub trait SessionStorage: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> std::io::Result<()>;

    /// Remove a value; removing an absent key is not an error
    fn remove(&self, key: &str) -> std::io::Result<()>;
}

/// Non-persistent storage, used by tests and `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> std::io::Result<()> {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
        Ok(())
    }
}

/// YAML-file backed storage (`~/.vendorhub/session.yaml` by default).
///
/// The file is re-read on every `get` so that a login performed by another
/// process is picked up by the next request.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_yaml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(values).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, contents)?;

        // The file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        let _guard = self.write_lock.lock().map_err(|_| std::io::Error::other("poisoned"))?;
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> std::io::Result<()> {
        let _guard = self.write_lock.lock().map_err(|_| std::io::Error::other("poisoned"))?;
        let mut values = self.read_all();
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Handle to the single process-wide session.
///
/// Cloning shares the same underlying storage. Only the interceptor pipeline
/// mutates it; everything else reads.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
    mutation: Arc<Mutex<()>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl Session {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            mutation: Arc::new(Mutex::new(())),
        }
    }

    /// Session backed by [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Current bearer token, read from storage right now
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Whether the persisted logged-in flag is set
    pub fn is_logged_in(&self) -> bool {
        self.storage.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// Cached identity record (opaque to this crate)
    pub fn current_user(&self) -> Option<String> {
        self.storage.get(CURRENT_USER_KEY)
    }

    pub(crate) fn establish(&self, token: &str, user: Option<&str>) -> std::io::Result<()> {
        let _guard = self.lock();
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(LOGGED_IN_KEY, "true")?;
        match user {
            Some(user) => self.storage.set(CURRENT_USER_KEY, user),
            None => self.storage.remove(CURRENT_USER_KEY),
        }
    }

    pub(crate) fn clear(&self) -> std::io::Result<()> {
        let _guard = self.lock();
        self.clear_locked()
    }

    /// Clear the session only if it still holds the token a failed request
    /// was dispatched with. Returns `true` for the single caller that
    /// actually performed the eviction.
    pub(crate) fn evict(&self, dispatched_with: Option<&str>) -> bool {
        let _guard = self.lock();
        let current = self.token();
        if current.is_none() || current.as_deref() != dispatched_with {
            return false;
        }
        if let Err(e) = self.clear_locked() {
            log::warn!("Failed to clear persisted session: {}", e);
        }
        true
    }

    fn clear_locked(&self) -> std::io::Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(LOGGED_IN_KEY)?;
        self.storage.remove(CURRENT_USER_KEY)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.mutation.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
