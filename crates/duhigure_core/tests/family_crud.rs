use duhigure_core::db::open_db_in_memory;
use duhigure_core::{
    FamilyDraft, FamilyService, RecordRef, ServiceError, SqliteFamilyRepository, ValidationError,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn service(conn: &Connection) -> FamilyService<SqliteFamilyRepository<'_>> {
    FamilyService::new(SqliteFamilyRepository::new(conn), "Kibungo")
}

#[test]
fn create_then_get_returns_stored_family() {
    let conn = setup();
    let families = service(&conn);

    let id = families
        .create_family(&FamilyDraft::new("Uwimana", Some("Bumbogo".to_string())))
        .unwrap();

    let family = families.get_family(id).unwrap();
    assert_eq!(family.id, id);
    assert_eq!(family.name, "Uwimana");
    assert_eq!(family.sector, "Bumbogo");
}

#[test]
fn omitted_sector_uses_configured_default() {
    let conn = setup();
    let families = FamilyService::new(SqliteFamilyRepository::new(&conn), "Gahanga");

    let id = families
        .create_family(&FamilyDraft::new("Habimana", None))
        .unwrap();
    assert_eq!(families.get_family(id).unwrap().sector, "Gahanga");
}

#[test]
fn empty_name_is_rejected_without_writing() {
    let conn = setup();
    let families = service(&conn);

    let err = families
        .create_family(&FamilyDraft::new("  ", None))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("family_name"))
    ));
    assert!(families.list_families().unwrap().is_empty());
}

#[test]
fn list_is_sorted_by_name_and_contains_each_family_once() {
    let conn = setup();
    let families = service(&conn);

    for name in ["Uwimana", "Bizimana", "Mukamana"] {
        families
            .create_family(&FamilyDraft::new(name, None))
            .unwrap();
    }

    let names: Vec<String> = families
        .list_families()
        .unwrap()
        .into_iter()
        .map(|family| family.name)
        .collect();
    assert_eq!(names, vec!["Bizimana", "Mukamana", "Uwimana"]);
}

#[test]
fn update_replaces_both_fields() {
    let conn = setup();
    let families = service(&conn);
    let id = families
        .create_family(&FamilyDraft::new("Uwimana", Some("Bumbogo".to_string())))
        .unwrap();

    families
        .update_family(id, &FamilyDraft::new("Uwimana II", None))
        .unwrap();

    let family = families.get_family(id).unwrap();
    assert_eq!(family.name, "Uwimana II");
    assert_eq!(family.sector, "Kibungo");
}

#[test]
fn get_and_update_missing_family_return_not_found() {
    let conn = setup();
    let families = service(&conn);

    let get_err = families.get_family(42).unwrap_err();
    assert!(matches!(get_err, ServiceError::NotFound(RecordRef::Family(42))));

    let update_err = families
        .update_family(42, &FamilyDraft::new("Ghost", None))
        .unwrap_err();
    assert!(matches!(
        update_err,
        ServiceError::NotFound(RecordRef::Family(42))
    ));
}
