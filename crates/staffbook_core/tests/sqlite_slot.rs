use staffbook_core::db::open_db;
use staffbook_core::{EmployeeStore, NewEmployee, SqliteSlot, StoreConfig};

#[test]
fn store_survives_reopen_through_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staffbook.db");
    let config = StoreConfig::new("staff").unwrap();

    let created_id = {
        let slot = SqliteSlot::new(open_db(&path).unwrap());
        let mut store = EmployeeStore::open(slot, config.clone());
        assert_eq!(store.len(), 5);

        let mut data: NewEmployee = store.get_employee_by_id("emp1").unwrap().to_new_employee();
        data.email_address = "alice.two@example.com".to_string();
        data.phone_number = "321-654-0987".to_string();
        let created = store.add_employee(data).unwrap();
        assert!(store.delete_employee("emp2"));
        created.id
    };

    let reopened = EmployeeStore::open(SqliteSlot::new(open_db(&path).unwrap()), config);
    assert_eq!(reopened.len(), 5);
    assert!(reopened.get_employee_by_id(&created_id).is_some());
    assert!(reopened.get_employee_by_id("emp2").is_none());
}

#[test]
fn persisted_rows_use_camel_case_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let store = EmployeeStore::open(
        SqliteSlot::new(open_db(dir.path().join("wire.db")).unwrap()),
        StoreConfig::default(),
    );

    let raw: String = store
        .slot()
        .connection()
        .query_row(
            "SELECT slot_value FROM kv_slots WHERE slot_key = ?1;",
            [store.config().slot_key.as_str()],
            |row| row.get(0),
        )
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json[0]["id"], "emp1");
    assert_eq!(json[0]["dateOfEmployment"], "2020-01-15");
    assert_eq!(json[0]["phoneNumber"], "123-456-7890");
    assert_eq!(json[2]["department"], "HR");
    assert_eq!(json[2]["position"], "Junior");
}
