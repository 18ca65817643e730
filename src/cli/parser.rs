use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rStudents
/// CLI application to manage student records with SQLite
#[derive(Parser)]
#[command(
    name = "rstudents",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple student records CLI: add, edit, list and delete students using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new student
    Add {
        #[arg(long = "name", help = "Full name")]
        name: Option<String>,

        #[arg(long = "sid", help = "Student ID")]
        sid: Option<String>,

        /// Average grade; anything that is not a number is stored as 0
        #[arg(long = "grade", allow_hyphen_values = true, help = "Average grade")]
        grade: Option<String>,

        #[arg(long = "graduated", help = "Mark the student as graduated")]
        graduated: bool,

        #[arg(long = "photo", help = "Path or URI of the student's photo")]
        photo: Option<String>,
    },

    /// Edit an existing student (fields not given keep their value)
    Edit {
        /// Student id (as shown by `list`)
        id: i64,

        #[arg(long = "name", help = "Full name")]
        name: Option<String>,

        #[arg(long = "sid", help = "Student ID")]
        sid: Option<String>,

        #[arg(long = "grade", allow_hyphen_values = true, help = "Average grade")]
        grade: Option<String>,

        #[arg(
            long = "graduated",
            action = ArgAction::Set,
            value_name = "BOOL",
            help = "Graduation status (true/false)"
        )]
        graduated: Option<bool>,

        #[arg(long = "photo", help = "Path or URI of the student's photo")]
        photo: Option<String>,
    },

    /// Delete a student by id
    Del {
        /// Student id (as shown by `list`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List all students
    List,

    /// Show the details of one student
    Show {
        /// Student id (as shown by `list`)
        id: i64,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export all students
    Export {
        #[arg(long, value_enum, help = "Output format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
