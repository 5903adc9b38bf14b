use crate::core::search::SortKey;
use crate::export::ExportFormat;
use crate::models::risk_type::RiskType;
use crate::models::status::Status;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fleetwatch
#[derive(Parser)]
#[command(
    name = "fleetwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fleet risk monitoring console: driver status, driving-time accrual, alerts and exports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Pin the clock to an instant (RFC 3339 or "YYYY-MM-DD HH:MM", UTC)
    #[arg(global = true, long = "clock", value_name = "INSTANT")]
    pub clock: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// One line typed at the `shell` prompt.
#[derive(Parser)]
#[command(name = "fleetwatch", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Dashboard list of every driver
    List {
        #[arg(long, value_enum, default_value = "risk")]
        sort: SortKey,

        #[arg(long, value_enum)]
        status: Option<Status>,

        #[arg(long, help = "Show only the first N rows")]
        limit: Option<usize>,
    },

    /// Search drivers by name, id or location
    Search {
        /// Substring to look for (case-insensitive)
        term: Option<String>,

        #[arg(long, value_enum)]
        status: Option<Status>,

        #[arg(long = "risk", value_enum)]
        risk_type: Option<RiskType>,

        #[arg(long, value_enum, default_value = "risk")]
        sort: SortKey,
    },

    /// Detailed view of one driver, with live driving time
    Show { id: String },

    /// Switch a driver between driving and resting
    Toggle { id: String },

    /// Print the live driving-time readout of a driver
    Live { id: String },

    /// Replace fields of a driver record
    Update {
        id: String,

        #[arg(long, value_enum)]
        status: Option<Status>,

        #[arg(long = "risk", value_enum)]
        risk_type: Option<RiskType>,

        #[arg(long = "risk-level")]
        risk_level: Option<u32>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long = "vehicle")]
        vehicle_type: Option<String>,
    },

    /// Refresh the live readout of a driver periodically
    Watch {
        id: String,

        #[arg(long = "interval-ms", help = "Refresh period in milliseconds (default: config)")]
        interval_ms: Option<u64>,

        #[arg(long, help = "Stop after N refreshes (default: until Ctrl-C)")]
        ticks: Option<u32>,
    },

    /// Alert management
    Alerts {
        #[command(subcommand)]
        action: AlertAction,
    },

    /// Notification feed
    Notifications {
        #[arg(long = "read", value_name = "ID", help = "Mark one notification as read")]
        read: Option<String>,

        #[arg(long = "read-all", help = "Mark every notification as read")]
        read_all: bool,
    },

    /// Fleet statistics
    Stats,

    /// Best drivers of the month
    Top {
        #[arg(long, help = "How many drivers to show (default: config)")]
        limit: Option<usize>,
    },

    /// Export driver data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_delimiter = ',', help = "Comma-separated driver ids to export")]
        ids: Vec<String>,

        #[arg(long, help = "Only drivers matching this term")]
        term: Option<String>,

        #[arg(long, value_enum)]
        status: Option<Status>,

        #[arg(long = "risk", value_enum)]
        risk_type: Option<RiskType>,

        #[arg(long, value_enum, default_value = "risk")]
        sort: SortKey,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Move a pinned clock forward
    Advance {
        /// Minutes to add to the clock
        minutes: u32,
    },

    /// Interactive session: read commands from stdin against one store
    Shell,
}

#[derive(Subcommand)]
pub enum AlertAction {
    /// Alert history, newest first
    List,

    /// Send an alert to one or more drivers
    Send {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        #[arg(long, value_enum, help = "Template to use (default: the driver's risk type)")]
        template: Option<RiskType>,

        #[arg(long, help = "Custom message (overrides the template)")]
        message: Option<String>,
    },

    /// Mark an alert as acknowledged
    Ack { id: String },

    /// Mark an alert as resolved
    Resolve { id: String },

    /// Alert every driver over the threshold that has no open alert
    Auto,

    /// Drivers at or above the alert threshold
    HighRisk {
        #[arg(long, help = "Risk level threshold (default: config)")]
        threshold: Option<u8>,
    },
}
