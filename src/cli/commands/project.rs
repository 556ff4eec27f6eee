use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::lvlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_project, insert_project, load_projects};
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Project management (admin for mutations).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project {
        add,
        list,
        id,
        name,
    } = cmd
    {
        let operator = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        if *add {
            if !operator.is_admin() {
                return Err(AppError::Forbidden("admin role required".into()));
            }

            let project_id = id
                .clone()
                .ok_or_else(|| AppError::Other("missing required argument --id".into()))?;
            let project_name = name
                .clone()
                .ok_or_else(|| AppError::Other("missing required argument --name".into()))?;

            if find_project(&mut pool, &project_id)?.is_some() {
                return Err(AppError::Other(format!(
                    "Project already exists: {}",
                    project_id
                )));
            }

            let p = Project {
                id: 0,
                project_id: project_id.clone(),
                project_name,
            };

            insert_project(&pool.conn, &p)?;
            lvlog(
                &pool.conn,
                "project_add",
                &project_id,
                &format!("Added project {}", p.project_name),
            )?;
            success(format!("Project {} added.", project_id));
        }

        if *list {
            let projects = load_projects(&mut pool)?;

            if projects.is_empty() {
                println!("No projects found.");
                return Ok(());
            }

            let mut table = Table::new(vec![Column::new("ID", 6), Column::new("NAME", 20)]);
            for p in &projects {
                table.add_row(vec![p.project_id.clone(), p.project_name.clone()]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
