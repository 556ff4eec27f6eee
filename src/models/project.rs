use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i32,
    pub project_id: String, // ⇔ projects.project_id (TEXT, unique)
    pub project_name: String,
}
