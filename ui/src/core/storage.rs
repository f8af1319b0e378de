//! Local persistence for the signed-in session.
//!
//! The session is stored as three string keys so it stays readable by any
//! other page of the site:
//!
//! ```text
//! isLoggedIn = "true"
//! userEmail  = "<address>"
//! signedInAt = "<RFC 3339 timestamp>"
//! ```
//!
//! Web builds use `window.localStorage`; native builds keep the same keys in a
//! small JSON object file under the platform data directory.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

use super::timing;

pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_SIGNED_IN_AT: &str = "signedInAt";

const SESSION_KEYS: [&str; 3] = [KEY_LOGGED_IN, KEY_USER_EMAIL, KEY_SIGNED_IN_AT];

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key-value persistence.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Write several keys. Backends that can store them in one step override
    /// this; the default writes them in order and stops at the first error.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Volatile backend used by tests and as a last resort when no durable
/// storage is reachable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Backend(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}

/// JSON object file holding the same keys the browser would keep in
/// `localStorage`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub const FILE_NAME: &'static str = "session.json";

    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_data_dir() -> Option<Self> {
        directories::ProjectDirs::from("com", "HealthHub", "healthhub")
            .map(|dirs| Self::new(dirs.data_dir().join(Self::FILE_NAME)))
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Map to modify, and whether the file on disk was corrupt. A corrupt file
    /// is replaced on the next write rather than blocking every write.
    fn read_map_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_map() {
            Ok(map) => Ok((map, false)),
            Err(StorageError::Corrupt(err)) => {
                tracing::warn!(%err, path = %self.path.display(), "discarding corrupt session file");
                Ok((BTreeMap::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    /// Replace the file atomically: write a sibling temp file, then rename.
    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        use std::io::Write;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => std::path::Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let raw = serde_json::to_string_pretty(map)?;
        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(raw.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let (mut map, corrupt) = self.read_map_for_write()?;
        if map.remove(key).is_some() || corrupt {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let (mut map, _) = self.read_map_for_write()?;
        for (key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        self.write_map(&map)
    }
}

/// Durable backend for the running platform.
pub fn default_backend() -> Rc<dyn StorageBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStorage::in_data_dir() {
            Some(storage) => Rc::new(storage),
            None => {
                tracing::warn!("no data directory available; sessions will not survive restarts");
                Rc::new(MemoryStorage::new())
            }
        }
    }
}

/// Marker of a signed-in visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_email: String,
    pub signed_in_at: OffsetDateTime,
}

impl Session {
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            signed_in_at: timing::now_utc(),
        }
    }
}

/// Reads and writes the persisted [`Session`].
///
/// Invalidation policy: entries without `isLoggedIn == "true"`, without an
/// email, or with a missing/unparseable timestamp read as absent. Sessions
/// older than `max_age` are cleared on read.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
    max_age: Option<Duration>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("max_age", &self.max_age)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>, max_age: Option<Duration>) -> Self {
        Self { backend, max_age }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()), None)
    }

    pub fn get(&self) -> Option<Session> {
        match self.read() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(%err, "failed to read session");
                None
            }
        }
    }

    fn read(&self) -> Result<Option<Session>, StorageError> {
        if self.backend.get(KEY_LOGGED_IN)?.as_deref() != Some("true") {
            return Ok(None);
        }
        let Some(user_email) = self.backend.get(KEY_USER_EMAIL)? else {
            return Ok(None);
        };
        let Some(signed_in_at) = self
            .backend
            .get(KEY_SIGNED_IN_AT)?
            .and_then(|raw| OffsetDateTime::parse(&raw, &Rfc3339).ok())
        else {
            return Ok(None);
        };

        if let Some(max_age) = self.max_age {
            if timing::now_utc() - signed_in_at > max_age {
                tracing::info!("stored session expired; clearing");
                self.clear()?;
                return Ok(None);
            }
        }

        Ok(Some(Session {
            user_email,
            signed_in_at,
        }))
    }

    /// Overwrite the stored session (last writer wins).
    ///
    /// All three keys are written or none are: if any write fails the previous
    /// values are put back before the error is returned.
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let stamp = session
            .signed_in_at
            .format(&Rfc3339)
            .map_err(|err| StorageError::Backend(err.to_string()))?;

        let previous = SESSION_KEYS
            .iter()
            .map(|key| -> Result<_, StorageError> { Ok((*key, self.backend.get(key)?)) })
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_default();

        let written = self.backend.set_many(&[
            (KEY_LOGGED_IN, "true"),
            (KEY_USER_EMAIL, session.user_email.as_str()),
            (KEY_SIGNED_IN_AT, stamp.as_str()),
        ]);
        if let Err(err) = written {
            self.restore(&previous);
            return Err(err);
        }
        tracing::info!("session stored");
        Ok(())
    }

    /// Put back a snapshot taken before a failed write. Only keys that changed
    /// are touched; keys missing from the snapshot are removed.
    fn restore(&self, previous: &[(&str, Option<String>)]) {
        let restored = SESSION_KEYS.iter().try_for_each(|key| {
            let before = previous
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| v.as_deref());
            if self.backend.get(key)?.as_deref() == before {
                return Ok(());
            }
            match before {
                Some(value) => self.backend.set(key, value),
                None => self.backend.remove(key),
            }
        });
        if let Err(err) = restored {
            tracing::warn!(%err, "could not restore previous session; clearing");
            if let Err(err) = self.clear() {
                tracing::warn!(%err, "could not clear partially written session");
            }
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        for key in SESSION_KEYS {
            self.backend.remove(key)?;
        }
        tracing::info!("session cleared");
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(backend: Rc<MemoryStorage>, max_age: Option<Duration>) -> SessionStore {
        SessionStore::new(backend, max_age)
    }

    #[test]
    fn set_writes_flat_string_keys() {
        let backend = Rc::new(MemoryStorage::new());
        let store = store_with(backend.clone(), None);
        store.set(&Session::new("u@test.com")).unwrap();

        assert_eq!(backend.get(KEY_LOGGED_IN).unwrap().as_deref(), Some("true"));
        assert_eq!(
            backend.get(KEY_USER_EMAIL).unwrap().as_deref(),
            Some("u@test.com")
        );
        assert!(backend.get(KEY_SIGNED_IN_AT).unwrap().is_some());
        assert_eq!(store.get().unwrap().user_email, "u@test.com");
    }

    #[test]
    fn clear_removes_every_key() {
        let backend = Rc::new(MemoryStorage::new());
        let store = store_with(backend.clone(), None);
        store.set(&Session::new("u@test.com")).unwrap();
        store.clear().unwrap();

        assert!(store.get().is_none());
        assert!(backend.get(KEY_USER_EMAIL).unwrap().is_none());
    }

    #[test]
    fn legacy_entry_without_timestamp_reads_as_absent() {
        let backend = Rc::new(MemoryStorage::new());
        backend.set(KEY_LOGGED_IN, "true").unwrap();
        backend.set(KEY_USER_EMAIL, "u@test.com").unwrap();
        let store = store_with(backend, None);

        assert!(store.get().is_none());
    }

    #[test]
    fn flag_other_than_true_reads_as_absent() {
        let backend = Rc::new(MemoryStorage::new());
        let store = store_with(backend.clone(), None);
        store.set(&Session::new("u@test.com")).unwrap();
        backend.set(KEY_LOGGED_IN, "false").unwrap();

        assert!(!store.is_signed_in());
    }

    #[test]
    fn expired_session_is_cleared_on_read() {
        let backend = Rc::new(MemoryStorage::new());
        let store = store_with(backend.clone(), Some(Duration::hours(24)));
        let stale = Session {
            user_email: "u@test.com".into(),
            signed_in_at: OffsetDateTime::now_utc() - Duration::hours(25),
        };
        store.set(&stale).unwrap();

        assert!(store.get().is_none());
        assert!(backend.get(KEY_LOGGED_IN).unwrap().is_none());
    }

    #[test]
    fn fresh_session_survives_max_age() {
        let store = store_with(Rc::new(MemoryStorage::new()), Some(Duration::hours(24)));
        store.set(&Session::new("u@test.com")).unwrap();
        assert!(store.is_signed_in());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FileStorage::FILE_NAME);

        let first = SessionStore::new(Rc::new(FileStorage::new(&path)), None);
        first.set(&Session::new("u@test.com")).unwrap();

        let second = SessionStore::new(Rc::new(FileStorage::new(&path)), None);
        assert_eq!(second.get().unwrap().user_email, "u@test.com");

        second.clear().unwrap();
        assert!(first.get().is_none());
    }

    #[test]
    fn corrupt_file_reads_as_absent_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStorage::FILE_NAME);
        std::fs::write(&path, r#"{"isLoggedIn": tru"#).unwrap();

        let storage = Rc::new(FileStorage::new(&path));
        assert!(matches!(
            storage.get(KEY_LOGGED_IN),
            Err(StorageError::Corrupt(_))
        ));
        let store = SessionStore::new(storage.clone(), None);
        assert!(store.get().is_none());

        store.set(&Session::new("u@test.com")).unwrap();
        assert_eq!(store.get().unwrap().user_email, "u@test.com");
    }

    #[test]
    fn clear_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStorage::FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let storage = Rc::new(FileStorage::new(&path));
        SessionStore::new(storage.clone(), None).clear().unwrap();
        assert_eq!(storage.get(KEY_LOGGED_IN).unwrap(), None);
    }

    #[test]
    fn file_write_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStorage::FILE_NAME);
        let store = SessionStore::new(Rc::new(FileStorage::new(&path)), None);
        store.set(&Session::new("u@test.com")).unwrap();
        store.set(&Session::new("v@test.com")).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(FileStorage::FILE_NAME)]);
    }

    /// Memory backend whose writes to one key fail once armed.
    struct FailingKey {
        inner: MemoryStorage,
        key: &'static str,
        armed: std::cell::Cell<bool>,
    }

    impl StorageBackend for FailingKey {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.armed.get() && key == self.key {
                return Err(StorageError::Backend("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_write_restores_previous_session() {
        let backend = Rc::new(FailingKey {
            inner: MemoryStorage::new(),
            key: KEY_SIGNED_IN_AT,
            armed: std::cell::Cell::new(false),
        });
        let store = SessionStore::new(backend.clone(), None);
        let alice = Session::new("alice@test.com");
        store.set(&alice).unwrap();

        backend.armed.set(true);
        assert!(store.set(&Session::new("bob@test.com")).is_err());

        assert_eq!(store.get().unwrap().user_email, "alice@test.com");
        assert_eq!(
            backend.get(KEY_SIGNED_IN_AT).unwrap(),
            Some(alice.signed_in_at.format(&Rfc3339).unwrap())
        );
    }

    #[test]
    fn failed_first_write_persists_nothing() {
        let backend = Rc::new(FailingKey {
            inner: MemoryStorage::new(),
            key: KEY_SIGNED_IN_AT,
            armed: std::cell::Cell::new(true),
        });
        let store = SessionStore::new(backend.clone(), None);

        assert!(store.set(&Session::new("bob@test.com")).is_err());
        assert!(store.get().is_none());
        assert!(backend.get(KEY_LOGGED_IN).unwrap().is_none());
        assert!(backend.get(KEY_USER_EMAIL).unwrap().is_none());
    }
}
