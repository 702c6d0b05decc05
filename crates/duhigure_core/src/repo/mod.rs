//! Repository layer: the SQLite-backed household store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per record type.
//! - Keep SQL details out of service orchestration.
//! - Run every multi-statement write inside one immediate transaction.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to DB transport errors.
//! - A write that returns an error leaves no partial rows behind.

pub mod duty_repo;
pub mod family_repo;
pub mod household_repo;
pub mod member_repo;

use crate::db::DbError;
use crate::model::validation::ValidationError;
use crate::model::RecordRef;
use rusqlite::{Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for household persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    /// A cross-record reference check failed inside the write transaction.
    Validation(ValidationError),
    Db(DbError),
    NotFound(RecordRef),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(record) => write!(f, "{record} not found"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) type RowParser<T> = fn(&Row<'_>) -> RepoResult<T>;

/// Runs `sql` and parses every row in order.
pub(crate) fn query_all<T, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    parse: RowParser<T>,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }
    Ok(items)
}

/// Runs `sql` and parses the first row, if any.
pub(crate) fn query_first<T, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    parse: RowParser<T>,
) -> RepoResult<Option<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    match rows.next()? {
        Some(row) => Ok(Some(parse(row)?)),
        None => Ok(None),
    }
}

pub(crate) fn row_exists<P: Params>(conn: &Connection, sql: &str, params: P) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(sql, params, |row| row.get(0))?;
    Ok(exists == 1)
}

pub(crate) fn family_exists(conn: &Connection, family_id: i64) -> RepoResult<bool> {
    row_exists(
        conn,
        "SELECT EXISTS(SELECT 1 FROM families WHERE id = ?1);",
        [family_id],
    )
}

pub(crate) fn count_rows(conn: &Connection, sql: &str) -> RepoResult<u64> {
    let count: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    u64::try_from(count).map_err(|_| RepoError::InvalidData(format!("negative count {count}")))
}
