use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for leavelogger
/// CLI application to track attendance and leave days with SQLite
#[derive(Parser)]
#[command(
    name = "leavelogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: apply and review leave days with role-based calendar locking",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act with this role instead of the configured one (ADMIN, MANAGER, EMPLOYEE)
    #[arg(global = true, long = "as")]
    pub act_role: Option<String>,

    /// Act as this employee id instead of the configured one
    #[arg(global = true, long = "me")]
    pub me: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Apply a status to one day (leave, half-day, holiday; present = clear)
    Apply {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "status",
            help = "Status to apply: leave, half-day, holiday, present (= clear)"
        )]
        status: String,

        #[arg(long = "reason", help = "Free-text reason attached to the record")]
        reason: Option<String>,

        /// Target employee id (manager/admin override mode)
        #[arg(long = "employee", help = "Apply on a subordinate's calendar")]
        employee: Option<String>,
    },

    /// Withdraw the active record(s) of one day (soft delete)
    Withdraw {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Withdraw on a subordinate's calendar")]
        employee: Option<String>,
    },

    /// Show the month calendar with per-day records and lock state
    Calendar {
        #[arg(long, short, help = "Month to display (YYYY-MM, default: current)")]
        period: Option<String>,

        #[arg(long = "employee", help = "Show a subordinate's calendar")]
        employee: Option<String>,
    },

    /// List leave records
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "upcoming", help = "Only active leaves (non-withdrawn, non-present)")]
        upcoming: bool,

        #[arg(long = "withdrawn", help = "Include withdrawn records")]
        withdrawn: bool,

        #[arg(long = "employee", help = "List a subordinate's records")]
        employee: Option<String>,
    },

    /// Manage employees (admin)
    User {
        #[arg(long = "add", help = "Add a new employee")]
        add: bool,

        #[arg(long = "update", help = "Update an existing employee")]
        update: bool,

        #[arg(long = "list", help = "List all employees")]
        list: bool,

        #[arg(long = "del", value_name = "ID", help = "Delete an employee by id")]
        del: Option<String>,

        #[arg(
            long = "search",
            value_name = "QUERY",
            help = "Search employees by name or id"
        )]
        search: Option<String>,

        #[arg(long = "id", help = "Employee id (e.g. E0042)")]
        id: Option<String>,

        #[arg(long = "first", help = "First name")]
        first: Option<String>,

        #[arg(long = "last", help = "Last name")]
        last: Option<String>,

        #[arg(long = "email", help = "Project email address")]
        email: Option<String>,

        #[arg(long = "role", help = "Role: ADMIN, MANAGER or EMPLOYEE")]
        role: Option<String>,

        #[arg(long = "project", help = "Project id the employee belongs to")]
        project: Option<String>,

        #[arg(long = "manager", help = "Employee id of the manager")]
        manager: Option<String>,

        #[arg(long = "joined", help = "Joining date (YYYY-MM-DD)")]
        joined: Option<String>,
    },

    /// Manage projects (admin)
    Project {
        #[arg(long = "add", help = "Add a new project")]
        add: bool,

        #[arg(long = "list", help = "List all projects")]
        list: bool,

        #[arg(long = "id", help = "Project id (e.g. P001)")]
        id: Option<String>,

        #[arg(long = "name", help = "Project name")]
        name: Option<String>,
    },

    /// Bulk-import leave records from a JSON timeline file
    Import {
        /// Path of the JSON file to import
        file: String,

        #[arg(long = "employee", help = "Import into a subordinate's calendar")]
        employee: Option<String>,
    },

    /// Produce the monthly attendance report (manager/admin)
    Report {
        #[arg(long, value_enum, default_value = "csv")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Month of the report (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long, help = "Restrict the report to one project")]
        project: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
