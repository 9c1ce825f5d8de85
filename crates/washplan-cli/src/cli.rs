//! CLI definition using clap

use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use washplan_types::OutputFormat;

#[derive(Parser)]
#[command(name = "washplan")]
#[command(version)]
#[command(about = "Wash-service appointment scheduling")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new appointment request
    Request {
        /// Client name
        #[arg(long)]
        name: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Vehicle plate (e.g. "AB-1234")
        #[arg(long)]
        plate: String,

        /// Wash type (e.g. "Simple", "Complete")
        #[arg(long)]
        wash_type: String,

        /// Extra service option, may repeat
        #[arg(long = "option")]
        options: Vec<String>,
    },

    /// Show one appointment
    Show {
        /// Appointment id
        id: u64,
    },

    /// List all appointments
    List,

    /// Show the day's agenda
    Agenda {
        /// Day to show, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Edit an appointment. Unset flags keep the current value.
    Edit {
        /// Appointment id
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        plate: Option<String>,

        #[arg(long)]
        wash_type: Option<String>,

        /// Replacement service options, may repeat. Passing any clears the
        /// previous list.
        #[arg(long = "option")]
        options: Vec<String>,

        /// Rewrite the creation timestamp (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        created_at: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Accept a pending appointment
    Accept {
        /// Appointment id
        id: u64,
    },

    /// Set the status of an appointment
    SetStatus {
        /// Appointment id
        id: u64,

        /// New status (any non-empty value)
        status: String,
    },

    /// Filtered appointment report
    Report {
        /// Client-name prefix
        #[arg(long)]
        client: Option<String>,

        /// Plate prefix (hyphens ignored)
        #[arg(long)]
        plate: Option<String>,

        /// Month, YYYY-MM
        #[arg(long)]
        month: Option<String>,

        /// Acceptable status, may repeat
        #[arg(long = "status")]
        statuses: Vec<String>,

        /// Print-formatted output (ignores the month criterion)
        #[arg(long)]
        print: bool,
    },

    /// Manage staff accounts
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the data directory
        #[arg(long)]
        set_data_dir: Option<std::path::PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List accounts
    List,

    /// Register a new account
    Add {
        username: String,
        password: String,
    },

    /// Overwrite an account's username and password
    Edit {
        id: u64,
        username: String,
        password: String,
    },

    /// Delete an account
    Remove {
        id: u64,
    },

    /// Check a credential pair
    Verify {
        username: String,
        password: String,
    },
}
