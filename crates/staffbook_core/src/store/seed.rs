//! Sample records used when the durable slot holds nothing usable.

use crate::model::employee::{Department, Employee, Position};
use chrono::NaiveDate;

struct SeedRow {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    employed: (i32, u32, u32),
    born: (i32, u32, u32),
    phone: &'static str,
    email: &'static str,
    department: Department,
    position: Position,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        id: "emp1",
        first_name: "Alice",
        last_name: "Smith",
        employed: (2020, 1, 15),
        born: (1990, 5, 20),
        phone: "123-456-7890",
        email: "alice.smith@example.com",
        department: Department::Tech,
        position: Position::Senior,
    },
    SeedRow {
        id: "emp2",
        first_name: "Bob",
        last_name: "Johnson",
        employed: (2021, 3, 1),
        born: (1992, 11, 10),
        phone: "098-765-4321",
        email: "bob.j@example.com",
        department: Department::Analytics,
        position: Position::Medior,
    },
    SeedRow {
        id: "emp3",
        first_name: "Charlie",
        last_name: "Brown",
        employed: (2022, 7, 20),
        born: (1995, 2, 28),
        phone: "555-123-4567",
        email: "charlie.b@example.com",
        department: Department::Hr,
        position: Position::Junior,
    },
    SeedRow {
        id: "emp4",
        first_name: "Diana",
        last_name: "Prince",
        employed: (2019, 9, 1),
        born: (1988, 8, 12),
        phone: "777-888-9999",
        email: "diana.p@example.com",
        department: Department::Marketing,
        position: Position::Senior,
    },
    SeedRow {
        id: "emp5",
        first_name: "Eve",
        last_name: "Adams",
        employed: (2023, 2, 14),
        born: (1998, 4, 3),
        phone: "111-222-3333",
        email: "eve.a@example.com",
        department: Department::Sales,
        position: Position::Medior,
    },
];

/// Returns the fixed seed collection.
pub fn seed_employees() -> Vec<Employee> {
    SEED_ROWS
        .iter()
        .filter_map(|row| {
            Some(Employee {
                id: row.id.to_string(),
                first_name: row.first_name.to_string(),
                last_name: row.last_name.to_string(),
                date_of_employment: ymd(row.employed)?,
                date_of_birth: ymd(row.born)?,
                phone_number: row.phone.to_string(),
                email_address: row.email.to_string(),
                department: row.department,
                position: row.position,
            })
        })
        .collect()
}

fn ymd((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::seed_employees;
    use std::collections::HashSet;

    #[test]
    fn seed_set_is_complete_and_unique() {
        let seed = seed_employees();
        assert_eq!(seed.len(), 5);

        let ids: HashSet<_> = seed.iter().map(|e| e.id.as_str()).collect();
        let emails: HashSet<_> = seed.iter().map(|e| e.email_address.as_str()).collect();
        let phones: HashSet<_> = seed.iter().map(|e| e.phone_number.as_str()).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(emails.len(), 5);
        assert_eq!(phones.len(), 5);
        assert!(seed
            .iter()
            .all(|e| e.date_of_employment >= e.date_of_birth));
    }
}
