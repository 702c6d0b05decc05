use duhigure_core::db::open_db_in_memory;
use duhigure_core::{
    AggregationService, DutyRepository, FamilyId, FamilyRepository, MemberId, MemberProfile,
    MemberRepository, NewDuty, RecordRef, ServiceError, SqliteDutyRepository,
    SqliteFamilyRepository, SqliteHouseholdRepository, SqliteMemberRepository,
};
use rusqlite::Connection;

struct Household {
    family_id: FamilyId,
    member_ids: Vec<MemberId>,
}

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

/// One family with `members` members, two duties each, plus one family-level duty.
fn seed_household(conn: &Connection, name: &str, members: usize) -> Household {
    let family_id = SqliteFamilyRepository::new(conn)
        .create_family(name, "Kibungo")
        .unwrap();
    let member_repo = SqliteMemberRepository::new(conn);
    let member_ids = (0..members)
        .map(|index| {
            let profile = MemberProfile {
                name: format!("{name} member {index}"),
                email: format!("{index}@x.com"),
                phone: "0788".to_string(),
                relationship: "Child".to_string(),
            };
            member_repo
                .create_member(
                    family_id,
                    &profile,
                    &["Plant trees".to_string(), "Fetch water".to_string()],
                )
                .unwrap()
        })
        .collect();
    SqliteDutyRepository::new(conn)
        .create_duty(&NewDuty {
            family_id,
            member_id: None,
            description: "Community work".to_string(),
            status: None,
        })
        .unwrap();
    Household {
        family_id,
        member_ids,
    }
}

fn count(conn: &Connection, sql: &str, id: i64) -> i64 {
    conn.query_row(sql, [id], |row| row.get(0)).unwrap()
}

#[test]
fn delete_family_removes_every_dependent_row() {
    let conn = setup();
    let target = seed_household(&conn, "Uwimana", 3);
    let survivor = seed_household(&conn, "Bizimana", 2);
    let aggregation = AggregationService::new(SqliteHouseholdRepository::new(&conn));

    let report = aggregation.delete_family(target.family_id).unwrap();
    assert_eq!(report.members_deleted, 3);
    assert_eq!(report.duties_deleted, 7);

    let members = SqliteMemberRepository::new(&conn);
    let duties = SqliteDutyRepository::new(&conn);
    assert!(members
        .list_members_by_family(target.family_id)
        .unwrap()
        .is_empty());
    assert!(duties
        .list_duties_by_family(target.family_id)
        .unwrap()
        .is_empty());
    for member_id in &target.member_ids {
        assert!(duties.list_duties_by_member(*member_id).unwrap().is_empty());
    }
    assert!(SqliteFamilyRepository::new(&conn)
        .get_family(target.family_id)
        .unwrap()
        .is_none());

    assert_eq!(
        members
            .list_members_by_family(survivor.family_id)
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        duties
            .list_duties_by_family(survivor.family_id)
            .unwrap()
            .len(),
        5
    );
}

#[test]
fn deleting_a_family_twice_reports_not_found() {
    let conn = setup();
    let household = seed_household(&conn, "Uwimana", 1);
    let aggregation = AggregationService::new(SqliteHouseholdRepository::new(&conn));

    aggregation.delete_family(household.family_id).unwrap();
    let err = aggregation.delete_family(household.family_id).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(RecordRef::Family(id)) if id == household.family_id));
}

#[test]
fn failing_member_step_rolls_back_the_whole_family_cascade() {
    let conn = setup();
    let household = seed_household(&conn, "Uwimana", 2);
    conn.execute_batch(
        "CREATE TRIGGER block_member_delete
         BEFORE DELETE ON members
         BEGIN
             SELECT RAISE(ABORT, 'member delete blocked');
         END;",
    )
    .unwrap();
    let aggregation = AggregationService::new(SqliteHouseholdRepository::new(&conn));

    let err = aggregation.delete_family(household.family_id).unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));

    // Duties removed by step one are restored by the rollback.
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM performance_duties WHERE family_id = ?1;",
            household.family_id
        ),
        5
    );
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM members WHERE family_id = ?1;",
            household.family_id
        ),
        2
    );
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM families WHERE id = ?1;",
            household.family_id
        ),
        1
    );
}

#[test]
fn delete_member_removes_only_that_members_duties() {
    let conn = setup();
    let household = seed_household(&conn, "Uwimana", 2);
    let removed = household.member_ids[0];
    let kept = household.member_ids[1];
    let aggregation = AggregationService::new(SqliteHouseholdRepository::new(&conn));

    let report = aggregation.delete_member(removed).unwrap();
    assert_eq!(report.duties_deleted, 2);
    assert_eq!(report.members_deleted, 1);

    let duties = SqliteDutyRepository::new(&conn);
    assert!(duties.list_duties_by_member(removed).unwrap().is_empty());
    assert_eq!(duties.list_duties_by_member(kept).unwrap().len(), 2);
    assert_eq!(
        duties
            .list_duties_by_family(household.family_id)
            .unwrap()
            .len(),
        3
    );
    assert!(SqliteMemberRepository::new(&conn)
        .get_member(removed)
        .unwrap()
        .is_none());
}

#[test]
fn delete_missing_member_reports_not_found_and_keeps_duties() {
    let conn = setup();
    let household = seed_household(&conn, "Uwimana", 1);
    let aggregation = AggregationService::new(SqliteHouseholdRepository::new(&conn));

    let err = aggregation.delete_member(9_999).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(RecordRef::Member(9_999))));
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM performance_duties WHERE family_id = ?1;",
            household.family_id
        ),
        3
    );
}
