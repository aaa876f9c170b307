use anyhow::Result;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::rusqlite::{params, OpenFlags};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use crate::storage::area::StorageArea;

/// SQLite-based local storage for a single site origin.
///
/// Several areas may point at the same database file; rows are partitioned by
/// the origin's ASCII serialization so different sites never see each other's
/// keys.
pub struct SqliteStorageArea {
    pool: Pool<SqliteConnectionManager>,
    origin: String,
}

impl SqliteStorageArea {
    /// Opens (or creates) the database at `path` and returns the area for `origin`.
    pub fn open<P: AsRef<Path>>(path: P, origin: &url::Origin) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path)
            .with_flags(
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            )
            .with_init(|c| {
                c.busy_timeout(std::time::Duration::from_millis(500))?;
                c.execute_batch(
                    "CREATE TABLE IF NOT EXISTS local_storage (
                        origin TEXT NOT NULL,
                        key TEXT NOT NULL,
                        value TEXT NOT NULL,
                        updated_at INTEGER NOT NULL DEFAULT (strftime('%s','now')),
                        PRIMARY KEY(origin, key)
                    );",
                )?;
                Ok(())
            });

        let pool = Pool::builder()
            .max_size(4)
            .connection_timeout(std::time::Duration::from_secs(5))
            .build(manager)?;

        log::debug!("local storage opened for {}", origin.ascii_serialization());

        Ok(Self {
            pool,
            origin: origin.ascii_serialization(),
        })
    }

    fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }
}

impl StorageArea for SqliteStorageArea {
    fn get_item(&self, key: &str) -> Option<String> {
        let conn = self.conn().ok()?;
        conn.query_row(
            "SELECT value FROM local_storage WHERE origin=?1 AND key=?2",
            params![self.origin, key],
            |row| row.get::<_, String>(0),
        )
        .ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO local_storage(origin,key,value) VALUES (?1,?2,?3)
             ON CONFLICT(origin,key) DO UPDATE
             SET value=excluded.value, updated_at=strftime('%s','now')",
            params![self.origin, key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM local_storage WHERE origin=?1 AND key=?2",
            params![self.origin, key],
        )?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM local_storage WHERE origin=?1",
            params![self.origin],
        )?;
        Ok(())
    }

    fn len(&self) -> usize {
        let conn = match self.conn() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row::<u32, _, _>(
            "SELECT COUNT(*) FROM local_storage WHERE origin=?1",
            params![self.origin],
            |row| row.get(0),
        )
        .unwrap_or(0) as usize
    }

    fn keys(&self) -> Vec<String> {
        let conn = match self.conn() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn
            .prepare("SELECT key FROM local_storage WHERE origin=?1 ORDER BY key")
        {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        let rows = match stmt.query_map(params![self.origin], |row| row.get::<_, String>(0)) {
            Ok(r) => r,
            Err(_) => return vec![],
        };

        rows.filter_map(|r| r.ok()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn o(s: &str) -> url::Origin {
        url::Url::parse(s).expect("valid URL").origin()
    }

    #[test]
    fn area_contract() {
        let dir = tempfile::tempdir().unwrap();
        let area = SqliteStorageArea::open(dir.path().join("local.db"), &o("https://delta.test")).unwrap();

        assert_eq!(area.len(), 0);
        assert!(area.get_item("missing").is_none());

        area.set_item("a", "1").unwrap();
        area.set_item("b", "2").unwrap();
        assert_eq!(area.len(), 2);
        assert_eq!(area.get_item("b").as_deref(), Some("2"));

        // overwrite keeps len
        area.set_item("a", "ONE").unwrap();
        assert_eq!(area.len(), 2);
        assert_eq!(area.get_item("a").as_deref(), Some("ONE"));
        assert_eq!(area.keys(), vec!["a".to_string(), "b".to_string()]);

        area.remove_item("b").unwrap();
        assert!(area.get_item("b").is_none());

        area.clear().unwrap();
        assert_eq!(area.len(), 0);
    }

    #[test]
    fn origins_are_isolated_within_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.db");
        let a = SqliteStorageArea::open(&path, &o("https://a.test")).unwrap();
        let b = SqliteStorageArea::open(&path, &o("https://b.test")).unwrap();

        a.set_item("k", "v").unwrap();
        assert!(b.get_item("k").is_none());

        b.clear().unwrap();
        assert_eq!(a.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.db");
        let origin = o("https://delta.test");

        {
            let area = SqliteStorageArea::open(&path, &origin).unwrap();
            area.set_item("deltaFavorites", "[\"abraka\"]").unwrap();
        }

        let area = SqliteStorageArea::open(&path, &origin).unwrap();
        assert_eq!(area.get_item("deltaFavorites").as_deref(), Some("[\"abraka\"]"));
    }
}
