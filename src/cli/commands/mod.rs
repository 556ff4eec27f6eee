pub mod apply;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod project;
pub mod report;
pub mod user;
pub mod withdraw;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;

/// Resolve the operator's role from the config (overrides are already
/// applied by the dispatcher).
pub(crate) fn operator_role(cfg: &Config) -> AppResult<Role> {
    Role::from_cli_str(&cfg.operator_role)
        .ok_or_else(|| AppError::InvalidRole(cfg.operator_role.clone()))
}

/// Resolve who a command acts on: a named subordinate (checked against the
/// employees table and against the operator's role) or the operator
/// themselves. Returns `(target_id, viewing_subordinate)`.
pub(crate) fn resolve_target(
    pool: &mut DbPool,
    cfg: &Config,
    role: Role,
    employee: Option<&str>,
) -> AppResult<(String, bool)> {
    match employee {
        Some(id) => {
            if !role.can_target_others() {
                return Err(AppError::Forbidden(
                    "only managers and admins can act on another employee's calendar".into(),
                ));
            }
            if crate::db::queries::find_employee(pool, id)?.is_none() {
                return Err(AppError::UnknownEmployee(id.to_string()));
            }
            Ok((id.to_string(), true))
        }
        None => Ok((cfg.operator_id.clone(), false)),
    }
}
