//! Opening SQLite connections.

use rusqlite::{Connection, OpenFlags};

use crate::config::ClientConfig;
use crate::error::Error;

/// Open a new connection with the configured flags and pragmas.
pub fn establish(config: &ClientConfig) -> Result<Connection, Error> {
    let access = if config.read_only {
        OpenFlags::SQLITE_OPEN_READ_ONLY
    } else {
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
    };
    let flags = access | OpenFlags::SQLITE_OPEN_NO_MUTEX | OpenFlags::SQLITE_OPEN_URI;

    let conn = Connection::open_with_flags(&config.path, flags)?;
    conn.busy_timeout(config.busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", true)?;

    tracing::trace!(
        path = %config.path.display(),
        read_only = config.read_only,
        "opened store connection"
    );

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::new(dir.path().join("missing.db")).read_only();
        assert!(matches!(establish(&config), Err(Error::Store(_))));
    }

    #[test]
    fn test_read_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        let conn = establish(&ClientConfig::new(&path)).unwrap();

        let fk: bool = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert!(fk);
        assert!(path.exists());
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro.db");
        establish(&ClientConfig::new(&path))
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let conn = establish(&ClientConfig::new(&path).read_only()).unwrap();
        assert!(conn.execute("INSERT INTO t (x) VALUES (1)", []).is_err());
    }
}
