//! Duty repository contract and SQLite implementation.
//!
//! # Invariants
//! - A duty is only inserted under an existing family.
//! - When `member_id` is set, the member must exist and belong to the same
//!   family; both checks run inside the insert transaction.
//! - `list_duties` is newest first; per-family and per-member lists are
//!   ordered by id ascending.

use crate::model::duty::{Duty, DutyId, DutyStatus, NewDuty};
use crate::model::family::FamilyId;
use crate::model::member::MemberId;
use crate::model::validation::ValidationError;
use crate::model::RecordRef;
use crate::repo::{family_exists, query_all, query_first, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const DUTY_SELECT_SQL: &str =
    "SELECT id, family_id, member_id, duty, status FROM performance_duties";

/// Repository interface for duty rows.
pub trait DutyRepository {
    fn create_duty(&self, duty: &NewDuty) -> RepoResult<DutyId>;
    fn get_duty(&self, id: DutyId) -> RepoResult<Option<Duty>>;
    fn list_duties(&self) -> RepoResult<Vec<Duty>>;
    fn list_duties_by_family(&self, family_id: FamilyId) -> RepoResult<Vec<Duty>>;
    fn list_duties_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Duty>>;
    fn update_duty(&self, id: DutyId, description: &str, status: &DutyStatus) -> RepoResult<()>;
    fn delete_duty(&self, id: DutyId) -> RepoResult<()>;
}

/// SQLite-backed duty repository.
pub struct SqliteDutyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDutyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DutyRepository for SqliteDutyRepository<'_> {
    fn create_duty(&self, duty: &NewDuty) -> RepoResult<DutyId> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !family_exists(&tx, duty.family_id)? {
            return Err(RepoError::Validation(ValidationError::UnknownFamily(
                duty.family_id,
            )));
        }
        if let Some(member_id) = duty.member_id {
            ensure_member_in_family(&tx, member_id, duty.family_id)?;
        }

        let status = duty.status.clone().unwrap_or_default();
        tx.execute(
            "INSERT INTO performance_duties (family_id, member_id, duty, status)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                duty.family_id,
                duty.member_id,
                duty.description.as_str(),
                status.as_str(),
            ],
        )?;
        let duty_id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(duty_id)
    }

    fn get_duty(&self, id: DutyId) -> RepoResult<Option<Duty>> {
        query_first(
            self.conn,
            &format!("{DUTY_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_duty_row,
        )
    }

    fn list_duties(&self) -> RepoResult<Vec<Duty>> {
        query_all(
            self.conn,
            &format!("{DUTY_SELECT_SQL} ORDER BY id DESC;"),
            [],
            parse_duty_row,
        )
    }

    fn list_duties_by_family(&self, family_id: FamilyId) -> RepoResult<Vec<Duty>> {
        query_all(
            self.conn,
            &format!("{DUTY_SELECT_SQL} WHERE family_id = ?1 ORDER BY id ASC;"),
            [family_id],
            parse_duty_row,
        )
    }

    fn list_duties_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Duty>> {
        query_all(
            self.conn,
            &format!("{DUTY_SELECT_SQL} WHERE member_id = ?1 ORDER BY id ASC;"),
            [member_id],
            parse_duty_row,
        )
    }

    fn update_duty(&self, id: DutyId, description: &str, status: &DutyStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE performance_duties SET duty = ?1, status = ?2 WHERE id = ?3;",
            params![description, status.as_str(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(RecordRef::Duty(id)));
        }

        Ok(())
    }

    fn delete_duty(&self, id: DutyId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM performance_duties WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(RecordRef::Duty(id)));
        }

        Ok(())
    }
}

fn ensure_member_in_family(
    conn: &Connection,
    member_id: MemberId,
    family_id: FamilyId,
) -> RepoResult<()> {
    let owner: Option<FamilyId> = conn
        .query_row(
            "SELECT family_id FROM members WHERE id = ?1;",
            [member_id],
            |row| row.get(0),
        )
        .optional()?;

    match owner {
        None => Err(RepoError::Validation(ValidationError::UnknownMember(
            member_id,
        ))),
        Some(owner) if owner != family_id => Err(RepoError::Validation(
            ValidationError::MemberOutsideFamily {
                member_id,
                family_id,
            },
        )),
        Some(_) => Ok(()),
    }
}

fn parse_duty_row(row: &Row<'_>) -> RepoResult<Duty> {
    let status: Option<String> = row.get("status")?;
    Ok(Duty {
        id: row.get("id")?,
        family_id: row.get("family_id")?,
        member_id: row.get("member_id")?,
        description: row.get("duty")?,
        status: status.map(DutyStatus::from).unwrap_or_default(),
    })
}
