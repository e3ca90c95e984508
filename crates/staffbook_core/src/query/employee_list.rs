//! Employee list search/pagination.

use crate::model::employee::Employee;

/// Page size used by the list view.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Upper bound for caller-provided page sizes.
pub const MAX_PAGE_SIZE: u32 = 100;

/// List view request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeListQuery {
    /// Case-insensitive substring; blank matches everything.
    pub search: Option<String>,
    /// 1-based page number; `0` is treated as `1`.
    pub page: u32,
    /// Defaults to `DEFAULT_PAGE_SIZE` when unset.
    pub per_page: Option<u32>,
}

/// One page of matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePage {
    pub items: Vec<Employee>,
    /// Effective page after clamping.
    pub page: u32,
    /// At least 1, even for an empty result.
    pub total_pages: u32,
    /// Number of records matching the search.
    pub total: usize,
    pub per_page: u32,
}

impl EmployeePage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Clamps a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn normalize_page_size(per_page: Option<u32>) -> u32 {
    per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Returns whether a record matches a lowercase search needle.
///
/// Matches first name, last name, email, department and position.
pub fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email_address.as_str(),
        employee.department.as_str(),
        employee.position.as_str(),
    ]
    .iter()
    .any(|value| value.to_lowercase().contains(needle))
}

/// Filters and paginates a snapshot.
pub fn list_employees(employees: &[Employee], query: &EmployeeListQuery) -> EmployeePage {
    let needle = query
        .search
        .as_deref()
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_default();
    let per_page = normalize_page_size(query.per_page);

    let matching: Vec<&Employee> = employees
        .iter()
        .filter(|employee| matches_search(employee, &needle))
        .collect();
    let total = matching.len();
    let total_pages = u32::try_from(total.div_ceil(per_page as usize))
        .unwrap_or(u32::MAX)
        .max(1);
    let page = query.page.clamp(1, total_pages);

    let start = (page as usize - 1) * per_page as usize;
    let items = matching
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    EmployeePage {
        items,
        page,
        total_pages,
        total,
        per_page,
    }
}
