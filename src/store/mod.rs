pub mod seed;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

const MIGRATION: &str = include_str!("../../migrations/001_init.sql");

/// Slot holding the full ordered array of project records.
pub const PROJECTS_KEY: &str = "projects";
/// Slot holding the bearer token from the credential login flow.
pub const TOKEN_KEY: &str = "token";
/// Slot holding the mocked GitHub session.
pub const SESSION_KEY: &str = "session";

/// Durable key-value storage: named slots, JSON values.
///
/// Mutating callers read a whole slot, modify in memory and write the whole
/// slot back. There is no multi-writer protection; a single active client
/// is assumed.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open a store at the given path, creating parent directories as needed.
    /// Enables WAL mode and runs the idempotent migration.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open store at {}", path.display()))?;

        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        if mode != "wal" {
            anyhow::bail!("failed to enable WAL mode, got: {mode}");
        }

        conn.execute_batch(MIGRATION)
            .context("failed to run storage migration")?;

        Ok(Self { conn })
    }

    /// Open the store at the default location.
    /// Uses `SHOWCASE_DB` env var if set, otherwise `~/.showcase/showcase.db`.
    pub fn open_default() -> Result<Self> {
        let path = match std::env::var("SHOWCASE_DB") {
            Ok(p) => PathBuf::from(p),
            Err(_) => {
                let home = std::env::var("HOME").context("HOME environment variable not set")?;
                PathBuf::from(home).join(".showcase").join("showcase.db")
            }
        };
        Self::open(&path)
    }

    /// Read and deserialize a slot. Absent or malformed slots read as `None`;
    /// corrupt contents are treated the same as missing data.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self
            .conn
            .prepare("SELECT value FROM storage WHERE key = ?1")?
            .query_row([key], |row| row.get(0))
            .optional()
            .with_context(|| format!("failed to read slot {key}"))?;

        Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
    }

    /// Serialize and write a slot, replacing any previous value.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).context("failed to serialize slot value")?;
        self.conn
            .execute(
                "INSERT INTO storage (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [key, &json],
            )
            .with_context(|| format!("failed to write slot {key}"))?;
        Ok(())
    }

    /// Remove a slot. No-op when absent.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM storage WHERE key = ?1", [key])
            .with_context(|| format!("failed to remove slot {key}"))?;
        Ok(())
    }

    pub fn contains(&self, key: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM storage WHERE key = ?1",
            [key],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Seed the projects slot with the sample records if it has never been
    /// written. Subsequent opens leave existing data alone.
    pub fn ensure_seeded(&self) -> Result<()> {
        if !self.contains(PROJECTS_KEY)? {
            self.put(PROJECTS_KEY, &seed::sample_projects())?;
            tracing::info!("seeded project store with sample data");
        }
        Ok(())
    }
}
