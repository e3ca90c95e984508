use chrono::NaiveDate;
use staffbook_core::{
    AutoConfirm, ConfirmationRequest, EmployeeDraft, EmployeeField, EmployeeListQuery,
    EmployeeService, EmployeeServiceError, EmployeeStore, MemorySlot, Position, StoreConfig,
    ValidationCode,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

fn service() -> EmployeeService<MemorySlot> {
    let store = EmployeeStore::open(MemorySlot::new(), StoreConfig::default());
    EmployeeService::with_clock(store, fixed_today)
}

fn new_draft() -> EmployeeDraft {
    EmployeeDraft {
        id: None,
        first_name: " Grace ".to_string(),
        last_name: "Hopper".to_string(),
        date_of_employment: "2015-03-02".to_string(),
        date_of_birth: "1985-12-09".to_string(),
        phone_number: "222-333-4444".to_string(),
        email_address: "grace.h@example.com".to_string(),
        department: "HR".to_string(),
        position: "Junior".to_string(),
    }
}

fn deny(_request: &ConfirmationRequest) -> bool {
    false
}

#[test]
fn create_validates_then_adds() {
    let mut service = service();

    let created = service.create(&new_draft(), &mut AutoConfirm).unwrap();
    assert_eq!(created.first_name, "Grace");
    assert_eq!(service.get(&created.id), Some(&created));
    assert_eq!(service.store().len(), 6);

    let err = service.create(&new_draft(), &mut AutoConfirm).unwrap_err();
    match err {
        EmployeeServiceError::Validation(report) => {
            assert_eq!(
                report.get(EmployeeField::EmailAddress),
                Some(ValidationCode::EmailTaken)
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.store().len(), 6);
}

#[test]
fn declined_create_leaves_store_unchanged() {
    let mut service = service();
    let mut prompts = Vec::new();
    let mut decline = |request: &ConfirmationRequest| {
        prompts.push(request.clone());
        false
    };

    let err = service.create(&new_draft(), &mut decline).unwrap_err();

    assert_eq!(err, EmployeeServiceError::Cancelled);
    assert_eq!(prompts, vec![ConfirmationRequest::Create]);
    assert_eq!(service.store().len(), 5);
    assert!(!service.store().is_email_taken("grace.h@example.com", None));
}

#[test]
fn invalid_create_is_rejected_before_prompting() {
    let mut service = service();
    let draft = EmployeeDraft {
        email_address: "bad".to_string(),
        ..new_draft()
    };
    let mut prompted = false;
    let mut confirmer = |_: &ConfirmationRequest| {
        prompted = true;
        true
    };

    let err = service.create(&draft, &mut confirmer).unwrap_err();
    assert!(matches!(err, EmployeeServiceError::Validation(_)));
    assert!(!prompted);
}

#[test]
fn create_ignores_draft_id() {
    let mut service = service();
    let draft = EmployeeDraft {
        id: Some("emp1".to_string()),
        ..new_draft()
    };

    let created = service.create(&draft, &mut AutoConfirm).unwrap();
    assert_ne!(created.id, "emp1");
    assert_eq!(service.get("emp1").unwrap().first_name, "Alice");
}

#[test]
fn update_asks_for_confirmation_before_writing() {
    let mut service = service();
    let mut draft = service.draft_for("emp2").unwrap();
    draft.position = "Senior".to_string();

    let err = service.update(&draft, &mut deny).unwrap_err();
    assert_eq!(err, EmployeeServiceError::Cancelled);
    assert_eq!(service.get("emp2").unwrap().position, Position::Medior);

    let mut prompts = Vec::new();
    let mut approve = |request: &ConfirmationRequest| {
        prompts.push(request.clone());
        true
    };
    let updated = service.update(&draft, &mut approve).unwrap();
    assert_eq!(updated.id, "emp2");
    assert_eq!(service.get("emp2").unwrap().position, Position::Senior);
    assert_eq!(
        prompts,
        vec![ConfirmationRequest::Update {
            id: "emp2".to_string()
        }]
    );
}

#[test]
fn update_of_missing_record_is_not_found_without_prompt() {
    let mut service = service();
    let draft = EmployeeDraft {
        id: Some("missing".to_string()),
        ..new_draft()
    };
    let mut prompted = false;
    let mut confirmer = |_: &ConfirmationRequest| {
        prompted = true;
        true
    };

    let err = service.update(&draft, &mut confirmer).unwrap_err();
    assert_eq!(err, EmployeeServiceError::NotFound("missing".to_string()));
    assert!(!prompted);
}

#[test]
fn delete_and_bulk_delete_follow_confirmation() {
    let mut service = service();

    assert_eq!(
        service.delete("emp1", &mut deny),
        Err(EmployeeServiceError::Cancelled)
    );
    assert_eq!(service.delete("emp1", &mut AutoConfirm), Ok(()));
    assert_eq!(
        service.delete("emp1", &mut AutoConfirm),
        Err(EmployeeServiceError::NotFound("emp1".to_string()))
    );

    assert_eq!(service.delete_selected(&[], &mut deny), Ok(0));
    let selection = vec!["emp2".to_string(), "emp3".to_string()];
    assert_eq!(
        service.delete_selected(&selection, &mut deny),
        Err(EmployeeServiceError::Cancelled)
    );
    assert_eq!(service.delete_selected(&selection, &mut AutoConfirm), Ok(2));
    assert_eq!(service.store().len(), 2);
}

#[test]
fn list_pages_through_search_results() {
    let service = service();

    let page = service.list(&EmployeeListQuery {
        search: Some("example.com".to_string()),
        page: 2,
        per_page: Some(3),
    });

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 2);
    let ids: Vec<_> = page.items.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["emp4", "emp5"]);
}

#[test]
fn draft_for_unknown_id_is_not_found() {
    let service = service();
    assert_eq!(
        service.draft_for("nope"),
        Err(EmployeeServiceError::NotFound("nope".to_string()))
    );
}

#[test]
fn subscribers_registered_through_service_see_writes() {
    let store = EmployeeStore::open(MemorySlot::new(), StoreConfig::default());
    let mut service = EmployeeService::new(store);
    let counts = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&counts);
    let subscription = service
        .store_mut()
        .subscribe(move |rows| sink.borrow_mut().push(rows.len()));

    service.create(&new_draft(), &mut AutoConfirm).unwrap();
    service.delete("emp1", &mut AutoConfirm).unwrap();
    assert!(service.store_mut().unsubscribe(subscription));

    assert_eq!(*counts.borrow(), vec![5, 6, 5]);
    assert_eq!(service.into_store().len(), 5);
}
