use crate::export::ExportFormat;
use crate::models::habit_type::HabitType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabit
/// CLI application to track habits to build or quit, with SQLite
#[derive(Parser)]
#[command(
    name = "rhabit",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker CLI: log the habits you build or quit and follow your streaks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (overrides `current_user` from the configuration)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

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

        #[arg(long = "check", help = "Validate the configuration values")]
        check: bool,

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

        #[arg(long = "last", value_name = "N", help = "Only the N most recent rows")]
        last: Option<usize>,
    },

    /// Register or list users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Create, list, show, edit or delete habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Log a habit for a day (default: today), or remove that log
    Track {
        /// Habit id
        id: i64,

        /// Day to log (YYYY-MM-DD, `today` or `yesterday`)
        date: Option<String>,

        #[arg(long = "remove", help = "Remove the log for that day instead")]
        remove: bool,
    },

    /// Show current and longest streak of a habit
    Stats {
        /// Habit id
        id: i64,

        #[arg(long = "json", help = "Print JSON instead of text")]
        json: bool,
    },

    /// Current streak of every habit
    Dashboard {
        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Export habits with their streaks
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a new user
    Register {
        username: String,

        #[arg(long)]
        email: Option<String>,
    },

    /// List registered users
    List,
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a habit
    Add {
        name: String,

        /// build = do more of it, quit = avoid it
        #[arg(long = "type", short = 't', value_enum, default_value = "build")]
        habit_type: HabitType,

        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Start date (YYYY-MM-DD) when the habit began before today
        #[arg(long)]
        since: Option<String>,
    },

    /// List your habits
    List {
        #[arg(long = "json")]
        json: bool,
    },

    /// Show a habit with its streaks and every logged day
    Show {
        id: i64,

        #[arg(long = "json")]
        json: bool,
    },

    /// Rename or re-describe a habit (the type can not change)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Delete a habit and all of its logs
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
