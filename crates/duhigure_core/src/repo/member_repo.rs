//! Member repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist members together with their initial duties.
//! - Serve member lists in the orders the dashboard renders.
//!
//! # Invariants
//! - `create_member` inserts the member and every nested duty in one
//!   transaction; any failure rolls back all of them.
//! - A member is only inserted under a family that exists at commit time.

use crate::model::duty::DutyStatus;
use crate::model::family::FamilyId;
use crate::model::member::{Member, MemberId, MemberProfile};
use crate::model::validation::ValidationError;
use crate::model::RecordRef;
use crate::repo::{family_exists, query_all, query_first, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const MEMBER_SELECT_SQL: &str =
    "SELECT id, family_id, name, email, phone, relationship FROM members";

/// Repository interface for member rows.
pub trait MemberRepository {
    /// Inserts one member and its `duties` atomically.
    fn create_member(
        &self,
        family_id: FamilyId,
        profile: &MemberProfile,
        duties: &[String],
    ) -> RepoResult<MemberId>;
    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>>;
    /// Newest first.
    fn list_members(&self) -> RepoResult<Vec<Member>>;
    /// Sorted by name; empty when the family has no members.
    fn list_members_by_family(&self, family_id: FamilyId) -> RepoResult<Vec<Member>>;
    fn update_member(&self, id: MemberId, profile: &MemberProfile) -> RepoResult<()>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn create_member(
        &self,
        family_id: FamilyId,
        profile: &MemberProfile,
        duties: &[String],
    ) -> RepoResult<MemberId> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !family_exists(&tx, family_id)? {
            return Err(RepoError::Validation(ValidationError::UnknownFamily(
                family_id,
            )));
        }

        tx.execute(
            "INSERT INTO members (family_id, name, email, phone, relationship)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                family_id,
                profile.name.as_str(),
                profile.email.as_str(),
                profile.phone.as_str(),
                profile.relationship.as_str(),
            ],
        )?;
        let member_id = tx.last_insert_rowid();

        {
            let mut insert_duty = tx.prepare(
                "INSERT INTO performance_duties (member_id, family_id, duty, status)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            for duty in duties {
                insert_duty.execute(params![
                    member_id,
                    family_id,
                    duty.as_str(),
                    DutyStatus::Pending.as_str(),
                ])?;
            }
        }

        tx.commit()?;
        Ok(member_id)
    }

    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>> {
        query_first(
            self.conn,
            &format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_member_row,
        )
    }

    fn list_members(&self) -> RepoResult<Vec<Member>> {
        query_all(
            self.conn,
            &format!("{MEMBER_SELECT_SQL} ORDER BY id DESC;"),
            [],
            parse_member_row,
        )
    }

    fn list_members_by_family(&self, family_id: FamilyId) -> RepoResult<Vec<Member>> {
        query_all(
            self.conn,
            &format!("{MEMBER_SELECT_SQL} WHERE family_id = ?1 ORDER BY name ASC, id ASC;"),
            [family_id],
            parse_member_row,
        )
    }

    fn update_member(&self, id: MemberId, profile: &MemberProfile) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE members
             SET name = ?1, email = ?2, phone = ?3, relationship = ?4
             WHERE id = ?5;",
            params![
                profile.name.as_str(),
                profile.email.as_str(),
                profile.phone.as_str(),
                profile.relationship.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(RecordRef::Member(id)));
        }

        Ok(())
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    Ok(Member {
        id: row.get("id")?,
        family_id: row.get("family_id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        relationship: row.get("relationship")?,
    })
}
