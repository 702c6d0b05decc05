//! Family repository contract and SQLite implementation.
//!
//! # Invariants
//! - Lists are ordered by `family_name ASC, id ASC`.
//! - Updates replace both `family_name` and `sector`.
//! - Callers pass already-validated, trimmed values.

use crate::model::family::{Family, FamilyId};
use crate::model::RecordRef;
use crate::repo::{query_all, query_first, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const FAMILY_SELECT_SQL: &str = "SELECT id, family_name, sector FROM families";

/// Repository interface for family rows.
pub trait FamilyRepository {
    fn create_family(&self, name: &str, sector: &str) -> RepoResult<FamilyId>;
    fn get_family(&self, id: FamilyId) -> RepoResult<Option<Family>>;
    fn list_families(&self) -> RepoResult<Vec<Family>>;
    fn update_family(&self, id: FamilyId, name: &str, sector: &str) -> RepoResult<()>;
}

/// SQLite-backed family repository.
pub struct SqliteFamilyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFamilyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FamilyRepository for SqliteFamilyRepository<'_> {
    fn create_family(&self, name: &str, sector: &str) -> RepoResult<FamilyId> {
        self.conn.execute(
            "INSERT INTO families (family_name, sector) VALUES (?1, ?2);",
            params![name, sector],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_family(&self, id: FamilyId) -> RepoResult<Option<Family>> {
        query_first(
            self.conn,
            &format!("{FAMILY_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_family_row,
        )
    }

    fn list_families(&self) -> RepoResult<Vec<Family>> {
        query_all(
            self.conn,
            &format!("{FAMILY_SELECT_SQL} ORDER BY family_name ASC, id ASC;"),
            [],
            parse_family_row,
        )
    }

    fn update_family(&self, id: FamilyId, name: &str, sector: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE families SET family_name = ?1, sector = ?2 WHERE id = ?3;",
            params![name, sector, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(RecordRef::Family(id)));
        }

        Ok(())
    }
}

pub(crate) fn parse_family_row(row: &Row<'_>) -> RepoResult<Family> {
    Ok(Family {
        id: row.get("id")?,
        name: row.get("family_name")?,
        sector: row.get("sector")?,
    })
}
