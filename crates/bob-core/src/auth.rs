//! Session ownership and token storage.
//!
//! The page never owns the session: it reads a [`Session`] snapshot from an
//! [`AuthStore`] and asks the store to log in or out.
//!
//! `FileAuthStore` keeps the session in `<base>/credentials.json` with
//! restricted permissions (0600). Tokens are never logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
}

/// Logged-in status as seen by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(user: UserInfo) -> Self {
        Self {
            is_logged_in: true,
            user: Some(user),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

/// Narrow read/mutate interface over whatever keeps the session.
pub trait AuthStore: Send {
    /// Current session snapshot.
    fn session(&self) -> Session;

    /// Stores the access token together with the user it belongs to.
    fn login(&mut self, token: String, user: UserInfo) -> Result<()>;

    /// Forgets the stored session.
    fn logout(&mut self) -> Result<()>;
}

/// Persisted form of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user: UserInfo,
    /// RFC 3339 timestamp of the login.
    pub logged_in_at: String,
}

impl StoredSession {
    fn new(access_token: String, user: UserInfo) -> Self {
        Self {
            access_token,
            user,
            logged_in_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Session kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    stored: Option<StoredSession>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.stored.as_ref().map(|s| s.access_token.as_str())
    }
}

impl AuthStore for MemoryAuthStore {
    fn session(&self) -> Session {
        self.stored
            .as_ref()
            .map_or_else(Session::logged_out, |s| Session::logged_in(s.user.clone()))
    }

    fn login(&mut self, token: String, user: UserInfo) -> Result<()> {
        self.stored = Some(StoredSession::new(token, user));
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        self.stored = None;
        Ok(())
    }
}

/// Session persisted as JSON on disk.
#[derive(Debug)]
pub struct FileAuthStore {
    path: PathBuf,
    stored: Option<StoredSession>,
}

impl FileAuthStore {
    /// Opens the store at the default credentials path.
    pub fn open_default() -> Result<Self> {
        Self::open(paths::credentials_path())
    }

    /// Opens the store at `path`, reading any existing session.
    ///
    /// A missing file means logged out.
    pub fn open(path: PathBuf) -> Result<Self> {
        let stored = Self::read(&path)?;
        Ok(Self { path, stored })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stored(&self) -> Option<&StoredSession> {
        self.stored.as_ref()
    }

    fn read(path: &Path) -> Result<Option<StoredSession>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials from {}", path.display()))?;
        let stored = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse credentials from {}", path.display()))?;
        Ok(Some(stored))
    }

    fn write(&self, stored: &StoredSession) -> Result<()> {
        let path = &self.path;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(stored).context("Failed to serialize credentials")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }
}

impl AuthStore for FileAuthStore {
    fn session(&self) -> Session {
        self.stored
            .as_ref()
            .map_or_else(Session::logged_out, |s| Session::logged_in(s.user.clone()))
    }

    fn login(&mut self, token: String, user: UserInfo) -> Result<()> {
        let stored = StoredSession::new(token, user);
        self.write(&stored)?;
        tracing::info!(email = %stored.user.email, token = %mask_token(&stored.access_token), "session stored");
        self.stored = Some(stored);
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        self.stored = None;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        tracing::info!("session cleared");
        Ok(())
    }
}

/// Masks a token for display, keeping a short prefix.
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 8;
    if token.chars().count() <= VISIBLE + 4 {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(VISIBLE).collect();
    format!("{prefix}...")
}
