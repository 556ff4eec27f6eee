use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::ViewContext;
use crate::core::import::ImportLogic;
use crate::db::log::lvlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Datelike;
use std::path::Path;

/// Bulk-import leave records from a JSON timeline file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, employee } = cmd {
        let role = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let (target_id, viewing_subordinate) =
            super::resolve_target(&mut pool, cfg, role, employee.as_deref())?;

        let today = date::today();
        // month/year are per-entry; the lock gate recomputes them from
        // each record's date
        let ctx = ViewContext::new(role, viewing_subordinate, today.year(), today.month());

        let outcome = ImportLogic::import(
            &mut pool,
            &ctx,
            today,
            &target_id,
            Path::new(file),
            &cfg.default_reason,
        )?;

        lvlog(
            &pool.conn,
            "import",
            &target_id,
            &format!(
                "Imported {} record(s) from {} ({} skipped)",
                outcome.applied, file, outcome.skipped
            ),
        )?;

        success(format!(
            "Import completed: {} applied, {} skipped.",
            outcome.applied, outcome.skipped
        ));
    }

    Ok(())
}
