use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::lvlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_employee, find_employee, insert_employee, load_employees, update_employee,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::role::Role;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Employee management. Mutations are admin-only; listing and searching
/// are open to managers as well.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        update,
        list,
        del,
        search,
        id,
        first,
        last,
        email,
        role,
        project,
        manager,
        joined,
    } = cmd
    {
        let operator = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) ADD
        //
        if *add {
            require_admin(operator)?;

            let emp_id = required(id, "--id")?;
            let first = required(first, "--first")?;
            let last = required(last, "--last")?;

            if find_employee(&mut pool, &emp_id)?.is_some() {
                return Err(AppError::DuplicateEmployee(emp_id));
            }

            let new_role = match role {
                Some(r) => {
                    Role::from_cli_str(r).ok_or_else(|| AppError::InvalidRole(r.clone()))?
                }
                None => Role::Employee,
            };

            let emp = Employee {
                id: 0,
                employee_id: emp_id.clone(),
                first_name: first,
                last_name: last,
                email: email.clone().unwrap_or_default(),
                role: new_role,
                project_id: project.clone().unwrap_or_default(),
                manager_id: manager.clone().unwrap_or_default(),
                joining_date: joined.clone().unwrap_or_default(),
            };

            insert_employee(&pool.conn, &emp)?;
            lvlog(
                &pool.conn,
                "user_add",
                &emp_id,
                &format!("Added {} ({})", emp.full_name(), emp.role.to_db_str()),
            )?;
            success(format!("Employee {} added.", emp_id));
        }

        //
        // 2) UPDATE
        //
        if *update {
            require_admin(operator)?;

            let emp_id = required(id, "--id")?;
            let current = find_employee(&mut pool, &emp_id)?
                .ok_or_else(|| AppError::UnknownEmployee(emp_id.clone()))?;

            let new_role = match role {
                Some(r) => {
                    Role::from_cli_str(r).ok_or_else(|| AppError::InvalidRole(r.clone()))?
                }
                None => current.role,
            };

            let merged = Employee {
                id: current.id,
                employee_id: emp_id.clone(),
                first_name: first.clone().unwrap_or(current.first_name),
                last_name: last.clone().unwrap_or(current.last_name),
                email: email.clone().unwrap_or(current.email),
                role: new_role,
                project_id: project.clone().unwrap_or(current.project_id),
                manager_id: manager.clone().unwrap_or(current.manager_id),
                joining_date: joined.clone().unwrap_or(current.joining_date),
            };

            update_employee(&pool.conn, &merged)?;
            lvlog(&pool.conn, "user_update", &emp_id, "Employee updated")?;
            success(format!("Employee {} updated.", emp_id));
        }

        //
        // 3) DELETE
        //
        if let Some(emp_id) = del {
            require_admin(operator)?;

            let n = delete_employee(&pool.conn, emp_id)?;
            if n == 0 {
                return Err(AppError::UnknownEmployee(emp_id.clone()));
            }
            lvlog(&pool.conn, "user_del", emp_id, "Employee deleted")?;
            success(format!("Employee {} deleted.", emp_id));
        }

        //
        // 4) LIST / SEARCH
        //
        if *list || search.is_some() {
            if !operator.can_target_others() {
                return Err(AppError::Forbidden(
                    "only managers and admins can list employees".into(),
                ));
            }

            let employees = load_employees(&mut pool)?;

            // client-side filtering, same as the search box behavior
            let filtered: Vec<&Employee> = match search {
                Some(q) => employees.iter().filter(|e| e.matches(q)).collect(),
                None => employees.iter().collect(),
            };

            if filtered.is_empty() {
                println!("No employees found.");
                return Ok(());
            }

            print_employees(&filtered);
        }
    }

    Ok(())
}

fn require_admin(role: Role) -> AppResult<()> {
    if !role.is_admin() {
        return Err(AppError::Forbidden("admin role required".into()));
    }
    Ok(())
}

fn required(value: &Option<String>, flag: &str) -> AppResult<String> {
    value
        .clone()
        .ok_or_else(|| AppError::Other(format!("missing required argument {}", flag)))
}

fn print_employees(employees: &[&Employee]) {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("NAME", 16),
        Column::new("EMAIL", 16),
        Column::new("ROLE", 8),
        Column::new("PROJECT", 8),
        Column::new("MANAGER", 8),
        Column::new("JOINED", 10),
    ]);

    for e in employees {
        table.add_row(vec![
            e.employee_id.clone(),
            e.full_name(),
            e.email.clone(),
            e.role.to_db_str().to_string(),
            e.project_id.clone(),
            e.manager_id.clone(),
            e.joining_date.clone(),
        ]);
    }

    print!("{}", table.render());
}
