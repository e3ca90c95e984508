//! Employee record store over a durable slot.
//!
//! # Responsibility
//! - Load the collection once at construction, falling back to the seed set.
//! - Provide the add/update/delete entry points and uniqueness queries.
//! - Persist and notify synchronously after every successful mutation.
//!
//! # Invariants
//! - Ids, emails and phone numbers are unique within the collection.
//! - Ids are never reassigned; generated ids never collide with live ones.
//! - Only this type mutates the collection; readers get copies or slices.

use crate::config::StoreConfig;
use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use crate::slot::DurableSlot;
use crate::store::seed::seed_employees;
use crate::store::subscribers::{SubscriberRegistry, Subscription};
use log::{debug, error, info, warn};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Read-only uniqueness and lookup queries used by validation.
pub trait EmployeeLookup {
    fn is_email_taken(&self, email: &str, exclude_id: Option<&str>) -> bool;
    fn is_phone_number_taken(&self, phone: &str, exclude_id: Option<&str>) -> bool;
    fn get_employee_by_id(&self, id: &str) -> Option<&Employee>;
}

enum LoadOutcome {
    Missing,
    Empty,
    Corrupt(String),
    Loaded(Vec<Employee>),
}

/// Authoritative in-memory employee collection.
pub struct EmployeeStore<S: DurableSlot> {
    slot: S,
    config: StoreConfig,
    employees: Vec<Employee>,
    subscribers: SubscriberRegistry,
}

impl<S: DurableSlot> EmployeeStore<S> {
    /// Opens the store, loading from `slot` or seeding it.
    ///
    /// Never fails: unreadable or malformed slot contents are logged and
    /// treated as absent.
    pub fn open(slot: S, config: StoreConfig) -> Self {
        let mut store = Self {
            slot,
            config,
            employees: Vec::new(),
            subscribers: SubscriberRegistry::new(),
        };

        let loaded = match store.load() {
            LoadOutcome::Loaded(employees) => Some(employees),
            LoadOutcome::Missing => {
                info!("event=store_load module=store status=fallback reason=missing");
                None
            }
            LoadOutcome::Empty => {
                info!("event=store_load module=store status=fallback reason=empty");
                None
            }
            LoadOutcome::Corrupt(reason) => {
                warn!(
                    "event=store_load module=store status=fallback reason=corrupt error={}",
                    reason
                );
                None
            }
        };

        match loaded {
            Some(employees) => {
                info!(
                    "event=store_load module=store status=ok source=slot count={}",
                    employees.len()
                );
                store.employees = employees;
            }
            None if store.config.seed_when_empty => {
                store.employees = seed_employees();
                store.persist();
                info!(
                    "event=store_seed module=store status=ok count={}",
                    store.employees.len()
                );
            }
            None => {}
        }

        store
    }

    fn load(&self) -> LoadOutcome {
        let raw = match self.slot.read(&self.config.slot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Missing,
            Err(err) => return LoadOutcome::Corrupt(format!("slot read failed: {err}")),
        };

        let employees: Vec<Employee> = match serde_json::from_str(&raw) {
            Ok(employees) => employees,
            Err(err) => return LoadOutcome::Corrupt(err.to_string()),
        };
        if employees.is_empty() {
            return LoadOutcome::Empty;
        }
        for conflict in find_conflicts(&employees) {
            warn!(
                "event=store_load module=store status=conflict kind={} id={} other_id={}",
                conflict.kind, conflict.id, conflict.other_id
            );
        }

        LoadOutcome::Loaded(employees)
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.employees) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error error_code=serialize_failed error={}",
                    err
                );
                return;
            }
        };

        match self.slot.write(&self.config.slot_key, &serialized) {
            Ok(()) => debug!(
                "event=store_persist module=store status=ok count={} bytes={}",
                self.employees.len(),
                serialized.len()
            ),
            Err(err) => error!(
                "event=store_persist module=store status=error error_code=slot_write_failed error={}",
                err
            ),
        }
    }

    fn commit(&mut self) {
        self.persist();
        self.subscribers.notify(&self.employees);
    }

    fn generate_id(&self) -> EmployeeId {
        loop {
            let candidate = Uuid::new_v4().to_string();
            if !self.contains_id(&candidate) {
                return candidate;
            }
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.employees.iter().any(|employee| employee.id == id)
    }

    /// Registers a snapshot callback.
    ///
    /// The callback runs immediately with the current collection and then
    /// once after every mutation until unsubscribed.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Employee]) + 'static) -> Subscription {
        self.subscribers.register(Box::new(callback), &self.employees)
    }

    /// Cancels a subscription. Repeated calls are no-ops returning `false`.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.subscribers.remove(subscription)
    }

    /// Adds a record with a freshly generated id.
    ///
    /// Returns `None` without touching the collection when the email or
    /// phone number is already taken.
    pub fn add_employee(&mut self, data: NewEmployee) -> Option<Employee> {
        if self.is_email_taken(&data.email_address, None)
            || self.is_phone_number_taken(&data.phone_number, None)
        {
            info!("event=employee_add module=store status=rejected reason=duplicate");
            return None;
        }

        let employee = data.with_id(self.generate_id());
        self.employees.push(employee.clone());
        info!(
            "event=employee_add module=store status=ok id={} count={}",
            employee.id,
            self.employees.len()
        );
        self.commit();
        Some(employee)
    }

    /// Replaces the full record stored under `employee.id`.
    ///
    /// Returns `false` when the id is unknown or when email/phone belong to
    /// a different record.
    pub fn update_employee(&mut self, employee: Employee) -> bool {
        let Some(index) = self.position_of(&employee.id) else {
            info!(
                "event=employee_update module=store status=rejected reason=not_found id={}",
                employee.id
            );
            return false;
        };

        if self.is_email_taken(&employee.email_address, Some(&employee.id))
            || self.is_phone_number_taken(&employee.phone_number, Some(&employee.id))
        {
            info!(
                "event=employee_update module=store status=rejected reason=duplicate id={}",
                employee.id
            );
            return false;
        }

        info!(
            "event=employee_update module=store status=ok id={}",
            employee.id
        );
        self.employees[index] = employee;
        self.commit();
        true
    }

    /// Removes one record. Returns `false` when the id is unknown.
    pub fn delete_employee(&mut self, id: &str) -> bool {
        let Some(index) = self.position_of(id) else {
            info!("event=employee_delete module=store status=rejected reason=not_found id={id}");
            return false;
        };

        self.employees.remove(index);
        info!(
            "event=employee_delete module=store status=ok id={} count={}",
            id,
            self.employees.len()
        );
        self.commit();
        true
    }

    /// Removes every listed record as one mutation.
    ///
    /// Unknown ids are skipped. Persists and notifies once, and only when at
    /// least one record was removed. Returns the number removed.
    pub fn delete_employees(&mut self, ids: &[EmployeeId]) -> usize {
        let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let before = self.employees.len();
        self.employees
            .retain(|employee| !targets.contains(employee.id.as_str()));
        let removed = before - self.employees.len();

        info!(
            "event=employee_bulk_delete module=store status=ok requested={} removed={}",
            targets.len(),
            removed
        );
        if removed > 0 {
            self.commit();
        }
        removed
    }

    /// Returns whether another record (not `exclude_id`) uses `email`.
    pub fn is_email_taken(&self, email: &str, exclude_id: Option<&str>) -> bool {
        self.employees.iter().any(|employee| {
            employee.email_address == email && Some(employee.id.as_str()) != exclude_id
        })
    }

    /// Returns whether another record (not `exclude_id`) uses `phone`.
    pub fn is_phone_number_taken(&self, phone: &str, exclude_id: Option<&str>) -> bool {
        self.employees.iter().any(|employee| {
            employee.phone_number == phone && Some(employee.id.as_str()) != exclude_id
        })
    }

    /// Returns an owned copy of the collection.
    pub fn get_all_employees(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    pub fn get_employee_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Borrowed view of the collection in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }
}

impl<S: DurableSlot> EmployeeLookup for EmployeeStore<S> {
    fn is_email_taken(&self, email: &str, exclude_id: Option<&str>) -> bool {
        EmployeeStore::is_email_taken(self, email, exclude_id)
    }

    fn is_phone_number_taken(&self, phone: &str, exclude_id: Option<&str>) -> bool {
        EmployeeStore::is_phone_number_taken(self, phone, exclude_id)
    }

    fn get_employee_by_id(&self, id: &str) -> Option<&Employee> {
        EmployeeStore::get_employee_by_id(self, id)
    }
}

/// Uniqueness violation found in a persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Conflict {
    kind: &'static str,
    id: EmployeeId,
    other_id: EmployeeId,
}

/// Lists rows sharing an id, email or phone with an earlier row.
///
/// Conflicting rows are still loaded; later writes of either record are
/// checked against the other as usual.
fn find_conflicts(employees: &[Employee]) -> Vec<Conflict> {
    let mut ids: HashMap<&str, &str> = HashMap::new();
    let mut emails: HashMap<&str, &str> = HashMap::new();
    let mut phones: HashMap<&str, &str> = HashMap::new();
    let mut conflicts = Vec::new();

    for employee in employees {
        let id = employee.id.as_str();
        let keyed = [
            ("id", &mut ids, id),
            ("email", &mut emails, employee.email_address.as_str()),
            ("phone", &mut phones, employee.phone_number.as_str()),
        ];
        for (kind, seen, key) in keyed {
            if let Some(other_id) = seen.get(key) {
                conflicts.push(Conflict {
                    kind,
                    id: id.to_string(),
                    other_id: (*other_id).to_string(),
                });
            } else {
                seen.insert(key, id);
            }
        }
    }

    conflicts
}
