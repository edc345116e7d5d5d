//! Embedded schema steps for the EMS store.
//!
//! # Invariants
//! - `SCHEMA_STEPS` is ordered by version, starting at 1 with no gaps.
//! - `PRAGMA user_version` holds the last applied step.
//! - A database stamped with a version this binary does not know is never
//!   touched.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs applied in order.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Returns the schema version produced by applying every step.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |&(version, _)| version)
}

/// Brings `conn` up to [`latest_version`] in a single transaction.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stored = current_user_version(conn)?;
    let target = latest_version();
    if stored > target {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: target,
        });
    }

    let pending: Vec<_> = SCHEMA_STEPS
        .iter()
        .filter(|&&(version, _)| version > stored)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &(version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={stored} to_version={target}");
    Ok(())
}

/// Reads the schema version stamped in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, current_user_version, latest_version};
    use rusqlite::Connection;

    #[test]
    fn fresh_connection_reaches_latest_version_once() {
        let mut conn = Connection::open_in_memory().expect("raw connection should open");
        apply_migrations(&mut conn).expect("first apply should succeed");
        apply_migrations(&mut conn).expect("second apply should be a no-op");

        let version = current_user_version(&conn).expect("version should be readable");
        assert_eq!(version, latest_version());
    }
}
