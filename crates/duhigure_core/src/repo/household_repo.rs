//! Cross-table household operations: cascading deletes and aggregates.
//!
//! # Responsibility
//! - Remove a family or member together with every dependent row.
//! - Compute store-wide counts and per-family member counts.
//!
//! # Invariants
//! - Family cascade order: duties -> members -> family row.
//! - Member cascade order: duties -> member row.
//! - Each cascade runs in one immediate transaction. A failing step or a
//!   missing parent row rolls back every earlier step.

use crate::model::family::FamilyId;
use crate::model::member::MemberId;
use crate::model::stats::{DashboardStats, FamilySummary};
use crate::model::RecordRef;
use crate::repo::family_repo::parse_family_row;
use crate::repo::{count_rows, query_all, RepoError, RepoResult};
use rusqlite::{Connection, Row, Transaction, TransactionBehavior};

/// Rows removed by one cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub duties_deleted: usize,
    pub members_deleted: usize,
}

/// Repository interface for operations spanning several tables.
pub trait HouseholdRepository {
    fn delete_family_cascade(&self, family_id: FamilyId) -> RepoResult<CascadeReport>;
    fn delete_member_cascade(&self, member_id: MemberId) -> RepoResult<CascadeReport>;
    fn dashboard_stats(&self) -> RepoResult<DashboardStats>;
    /// Families by name, each with its member count, in one joined query.
    fn list_family_summaries(&self) -> RepoResult<Vec<FamilySummary>>;
}

/// SQLite-backed household repository.
pub struct SqliteHouseholdRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHouseholdRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl HouseholdRepository for SqliteHouseholdRepository<'_> {
    fn delete_family_cascade(&self, family_id: FamilyId) -> RepoResult<CascadeReport> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let duties_deleted = tx.execute(
            "DELETE FROM performance_duties WHERE family_id = ?1;",
            [family_id],
        )?;
        let members_deleted =
            tx.execute("DELETE FROM members WHERE family_id = ?1;", [family_id])?;
        let families_deleted = tx.execute("DELETE FROM families WHERE id = ?1;", [family_id])?;

        if families_deleted == 0 {
            // Dropping `tx` rolls back the child deletes above.
            return Err(RepoError::NotFound(RecordRef::Family(family_id)));
        }

        tx.commit()?;
        Ok(CascadeReport {
            duties_deleted,
            members_deleted,
        })
    }

    fn delete_member_cascade(&self, member_id: MemberId) -> RepoResult<CascadeReport> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let duties_deleted = tx.execute(
            "DELETE FROM performance_duties WHERE member_id = ?1;",
            [member_id],
        )?;
        let members_deleted = tx.execute("DELETE FROM members WHERE id = ?1;", [member_id])?;

        if members_deleted == 0 {
            return Err(RepoError::NotFound(RecordRef::Member(member_id)));
        }

        tx.commit()?;
        Ok(CascadeReport {
            duties_deleted,
            members_deleted,
        })
    }

    fn dashboard_stats(&self) -> RepoResult<DashboardStats> {
        // One read transaction so the four counts see the same snapshot.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Deferred)?;
        let family_count = count_rows(&tx, "SELECT COUNT(*) FROM families;")?;
        let member_count = count_rows(&tx, "SELECT COUNT(*) FROM members;")?;
        let duty_count = count_rows(&tx, "SELECT COUNT(*) FROM performance_duties;")?;
        let pending_duty_count = count_rows(
            &tx,
            "SELECT COUNT(*) FROM performance_duties WHERE status = 'Pending';",
        )?;
        tx.commit()?;

        Ok(DashboardStats::from_counts(
            family_count,
            member_count,
            duty_count,
            pending_duty_count,
        ))
    }

    fn list_family_summaries(&self) -> RepoResult<Vec<FamilySummary>> {
        query_all(
            self.conn,
            "SELECT f.id, f.family_name, f.sector, COUNT(m.id) AS member_count
             FROM families f
             LEFT JOIN members m ON m.family_id = f.id
             GROUP BY f.id
             ORDER BY f.family_name ASC, f.id ASC;",
            [],
            parse_summary_row,
        )
    }
}

fn parse_summary_row(row: &Row<'_>) -> RepoResult<FamilySummary> {
    let member_count: i64 = row.get("member_count")?;
    Ok(FamilySummary {
        family: parse_family_row(row)?,
        member_count: u64::try_from(member_count).map_err(|_| {
            RepoError::InvalidData(format!("negative member count {member_count}"))
        })?,
    })
}
