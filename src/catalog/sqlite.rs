//! SQLite catalog implementation
//!
//! Wraps a single rusqlite connection behind a mutex; every query is an
//! independent read, no transaction spans requests.

use std::path::Path;

use bytes::Bytes;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use super::{Catalog, DirChild, FileEntry, FileType, VersionRecord};
use crate::error::Result;

/// SQLite-backed file-metadata catalog
pub struct SqliteCatalog {
    /// Database connection, serialized access
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Open (or create) a catalog database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory catalog (for testing and tooling)
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "busy_timeout", 5000)?;
        Self::create_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create the three catalog tables if they do not exist
    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS file_system (
                 path            TEXT PRIMARY KEY,
                 parent          TEXT NOT NULL,
                 type            INTEGER NOT NULL,
                 mtime           INTEGER NOT NULL,
                 current_version INTEGER
             );
             CREATE INDEX IF NOT EXISTS idx_file_system_parent
                 ON file_system (parent);
             CREATE TABLE IF NOT EXISTS file_versions (
                 path           TEXT NOT NULL,
                 version        INTEGER NOT NULL,
                 size           INTEGER NOT NULL,
                 total_segments INTEGER NOT NULL,
                 PRIMARY KEY (path, version)
             );
             CREATE TABLE IF NOT EXISTS file_segments (
                 path    TEXT NOT NULL,
                 version INTEGER NOT NULL,
                 segment INTEGER NOT NULL,
                 data    BLOB NOT NULL,
                 PRIMARY KEY (path, version, segment)
             );",
        )?;
        Ok(())
    }

    // =========================================================================
    // Ingestion helpers (writer side; used by tests, tools and embedders)
    // =========================================================================

    /// Insert or replace a file_system row
    pub fn insert_entry(&self, entry: &FileEntry) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO file_system (path, parent, type, mtime, current_version)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.path,
                entry.parent,
                entry.file_type as u8,
                entry.mtime,
                entry.current_version,
            ],
        )?;
        Ok(())
    }

    /// Insert or replace a file_versions row
    pub fn insert_version(&self, path: &str, version: u64, record: &VersionRecord) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO file_versions (path, version, size, total_segments)
             VALUES (?1, ?2, ?3, ?4)",
            params![path, version, record.size, record.total_segments],
        )?;
        Ok(())
    }

    /// Insert or replace a file_segments row
    pub fn insert_segment(&self, path: &str, version: u64, segment: u64, data: &[u8]) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO file_segments (path, version, segment, data)
             VALUES (?1, ?2, ?3, ?4)",
            params![path, version, segment, data],
        )?;
        Ok(())
    }
}

impl Catalog for SqliteCatalog {
    fn file_entry(&self, path: &str) -> Result<Option<FileEntry>> {
        let conn = self.conn.lock();
        let entry = conn
            .query_row(
                "SELECT path, parent, type, mtime, current_version
                 FROM file_system WHERE path = ?1",
                params![path],
                |row| {
                    Ok(FileEntry {
                        path: row.get(0)?,
                        parent: row.get(1)?,
                        file_type: FileType::from_raw(row.get(2)?),
                        mtime: row.get(3)?,
                        current_version: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    fn version_record(&self, path: &str, version: u64) -> Result<Option<VersionRecord>> {
        let conn = self.conn.lock();
        let record = conn
            .query_row(
                "SELECT size, total_segments FROM file_versions
                 WHERE path = ?1 AND version = ?2",
                params![path, version],
                |row| {
                    Ok(VersionRecord {
                        size: row.get(0)?,
                        total_segments: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    fn segment_data(&self, path: &str, version: u64, segment: u64) -> Result<Option<Bytes>> {
        let conn = self.conn.lock();
        let data: Option<Vec<u8>> = conn
            .query_row(
                "SELECT data FROM file_segments
                 WHERE path = ?1 AND version = ?2 AND segment = ?3",
                params![path, version, segment],
                |row| row.get(0),
            )
            .optional()?;
        Ok(data.map(Bytes::from))
    }

    fn children(&self, parent: &str) -> Result<Vec<DirChild>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT type, path FROM file_system WHERE parent = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![parent], |row| {
            Ok(DirChild {
                file_type: FileType::from_raw(row.get(0)?),
                path: row.get(1)?,
            })
        })?;

        let mut children = Vec::new();
        for row in rows {
            children.push(row?);
        }
        Ok(children)
    }
}
