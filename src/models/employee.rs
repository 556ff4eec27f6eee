use super::role::Role;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i32,
    pub employee_id: String, // ⇔ employees.employee_id (TEXT, unique)
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub project_id: String, // empty = unassigned
    pub manager_id: String, // employee_id of the manager, empty = none
    pub joining_date: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match on name or employee id, used by `user --search`.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.full_name().to_lowercase().contains(&q)
            || self.employee_id.to_lowercase().contains(&q)
    }
}
