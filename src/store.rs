// src/store.rs

//! Read-only access to Chrome's "Login Data" SQLite store
//!
//! The store is a plain SQLite file with a single `logins` table. Chrome
//! keeps many more columns than the export format needs; only the consumed
//! subset is materialized here.

use crate::error::{Error, Result};
use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;
use tracing::debug;

/// One row of the `logins` table, limited to the columns the converter uses
#[derive(Debug, Clone)]
pub struct LoginRow {
    pub origin_url: String,
    pub action_url: String,
    pub username_element: String,
    pub username_value: String,
    pub password_element: String,
    pub password_value: Vec<u8>,
    pub signon_realm: String,
    pub blacklisted_by_user: bool,
}

impl LoginRow {
    /// Convert a database row to a LoginRow
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            origin_url: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            action_url: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            username_element: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            username_value: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            password_element: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            password_value: row.get::<_, Option<Vec<u8>>>(5)?.unwrap_or_default(),
            signon_realm: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            blacklisted_by_user: row.get::<_, Option<bool>>(7)?.unwrap_or(false),
        })
    }
}

/// Open the store read-only and return every stored credential row
///
/// Retrieval order is whatever SQLite yields; the writer sorts later. The
/// connection is dropped before this returns, whether or not the scan
/// succeeds, so the store file is never held open past the read phase.
pub fn read_logins(path: &Path) -> Result<Vec<LoginRow>> {
    let store_err = |source| Error::StoreOpen {
        path: path.display().to_string(),
        source,
    };

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(store_err)?;

    let mut stmt = conn
        .prepare(
            "SELECT origin_url, action_url, username_element, username_value,
                    password_element, password_value, signon_realm, blacklisted_by_user
             FROM logins",
        )
        .map_err(store_err)?;

    let rows = stmt
        .query_map([], LoginRow::from_row)
        .and_then(|mapped| mapped.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(store_err)?;

    debug!("Read {} login rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    /// Create a Login Data fixture with Chrome's full logins schema
    fn create_store(path: &Path) -> Connection {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE logins (
                origin_url VARCHAR NOT NULL,
                action_url VARCHAR,
                username_element VARCHAR,
                username_value VARCHAR,
                password_element VARCHAR,
                password_value BLOB,
                submit_element VARCHAR,
                signon_realm VARCHAR NOT NULL,
                preferred INTEGER,
                date_created INTEGER,
                blacklisted_by_user INTEGER NOT NULL DEFAULT 0,
                scheme INTEGER,
                password_type INTEGER,
                times_used INTEGER,
                form_data BLOB,
                date_synced INTEGER,
                display_name VARCHAR,
                icon_url VARCHAR,
                federation_url VARCHAR,
                skip_zero_click INTEGER,
                generation_upload_status INTEGER,
                possible_username_pairs BLOB
            )",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_read_logins_maps_consumed_columns() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Login Data");
        {
            let conn = create_store(&path);
            conn.execute(
                "INSERT INTO logins (origin_url, action_url, username_element, username_value,
                                     password_element, password_value, signon_realm,
                                     blacklisted_by_user, date_created, scheme)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, 0)",
                params![
                    "https://example.com/login?x=1",
                    "https://example.com/submit",
                    "login",
                    "alice",
                    "pw",
                    b"p@ss".to_vec(),
                    "https://example.com/",
                    0,
                ],
            )
            .unwrap();
        }

        let rows = read_logins(&path).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.origin_url, "https://example.com/login?x=1");
        assert_eq!(row.action_url, "https://example.com/submit");
        assert_eq!(row.username_value, "alice");
        assert_eq!(row.password_value, b"p@ss".to_vec());
        assert_eq!(row.signon_realm, "https://example.com/");
        assert!(!row.blacklisted_by_user);
    }

    #[test]
    fn test_read_logins_null_columns_become_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Login Data");
        {
            let conn = create_store(&path);
            conn.execute(
                "INSERT INTO logins (origin_url, signon_realm, blacklisted_by_user)
                 VALUES (?1, ?2, 1)",
                params!["https://blocked.example.com/", "https://blocked.example.com/"],
            )
            .unwrap();
        }

        let rows = read_logins(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].action_url, "");
        assert_eq!(rows[0].username_value, "");
        assert!(rows[0].password_value.is_empty());
        assert!(rows[0].blacklisted_by_user);
    }

    #[test]
    fn test_read_logins_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_logins(&dir.path().join("Login Data"));
        assert!(matches!(result, Err(Error::StoreOpen { .. })));
    }

    #[test]
    fn test_read_logins_not_a_database() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Login Data");
        std::fs::write(&path, b"this is not sqlite").unwrap();

        let result = read_logins(&path);
        assert!(matches!(result, Err(Error::StoreOpen { .. })));
    }

    #[test]
    fn test_read_logins_wrong_schema() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Login Data");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("CREATE TABLE notlogins (id INTEGER PRIMARY KEY)")
                .unwrap();
        }

        let result = read_logins(&path);
        assert!(matches!(result, Err(Error::StoreOpen { .. })));
    }
}
