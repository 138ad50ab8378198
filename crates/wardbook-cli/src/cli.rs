//! Command-line definitions for `wb`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default for verbose)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables
    Table,
    /// JSON to stdout
    Json,
}

#[derive(Parser)]
#[command(name = "wb")]
#[command(about = "wb - Wardbook CLI - manage CDAs, streets, and properties")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/wardbook/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory holding the registry collections (overrides config)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage Community Development Associations
    Cda {
        #[command(subcommand)]
        command: CdaCommands,
    },

    /// Manage streets
    Street {
        #[command(subcommand)]
        command: StreetCommands,
    },

    /// Manage properties
    Property {
        #[command(subcommand)]
        command: PropertyCommands,
    },

    /// Ward overview with registry totals
    Dashboard,

    /// Filtered, grouped CDA directory
    Directory(DirectoryArgs),

    /// Export printable reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },

    /// Remove properties whose street no longer exists
    Prune,

    /// Remove all registry data
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Filter flags for the directory view, mirroring the filter panel state.
#[derive(clap::Args)]
pub struct DirectoryArgs {
    /// Show a single ward (keeps its empty CDAs visible)
    #[arg(short, long)]
    pub ward: Option<String>,

    /// Free-text search over CDA, ward, and street names; a known
    /// property-type label switches to property search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep only these CDA names (repeatable)
    #[arg(long = "cda")]
    pub cdas: Vec<String>,

    /// Minimum total properties per CDA
    #[arg(long)]
    pub min_properties: Option<u32>,

    /// Maximum total properties per CDA
    #[arg(long)]
    pub max_properties: Option<u32>,

    /// Streets registered on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Streets registered on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Keep streets carrying one of these property types (repeatable)
    #[arg(long = "type")]
    pub property_types: Vec<String>,

    /// Substring match on street names
    #[arg(long)]
    pub street_search: Option<String>,

    /// Minimum properties per street
    #[arg(long)]
    pub street_min: Option<u32>,

    /// Maximum properties per street
    #[arg(long)]
    pub street_max: Option<u32>,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// CDAs per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum CdaCommands {
    /// Register a new CDA
    Register {
        /// Display name
        name: String,

        #[arg(short, long)]
        ward: String,

        /// Local-government-area label
        #[arg(long)]
        lg: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Registration date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, requires = "chairman_contact")]
        chairman_name: Option<String>,

        #[arg(long, requires = "chairman_name")]
        chairman_contact: Option<String>,
    },

    /// List CDAs with live street and property counts
    List {
        #[arg(short, long)]
        ward: Option<String>,
    },

    /// Show one CDA with its streets
    Show { id: i64 },

    /// Update fields of an existing CDA
    Update {
        id: i64,

        /// New display name; the streets referencing the old name are
        /// rewritten in the same operation
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        ward: Option<String>,

        #[arg(long)]
        lg: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a CDA, its streets, and their properties
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum StreetCommands {
    /// Register a new street under a CDA
    Register {
        /// Street name
        name: String,

        /// Owning CDA name
        #[arg(long)]
        cda: String,

        #[arg(short, long)]
        ward: String,

        #[arg(long, default_value = "")]
        lg: String,

        #[arg(long, default_value = "")]
        lcda: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Registration date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, requires = "owner_contact")]
        owner_name: Option<String>,

        #[arg(long, requires = "owner_name")]
        owner_contact: Option<String>,

        /// Street photo to embed as a data URI
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// List streets
    List {
        #[arg(short, long)]
        ward: Option<String>,

        #[arg(long)]
        cda: Option<String>,
    },

    /// Show one street with its properties
    Show { id: i64 },

    /// Update fields of an existing street
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        cda: Option<String>,

        #[arg(long)]
        ward: Option<String>,

        #[arg(long)]
        lg: Option<String>,

        #[arg(long)]
        lcda: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a street and its properties
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PropertyCommands {
    /// Register a new property on a street
    Register {
        /// Owning street id
        #[arg(long)]
        street: i64,

        /// Unit identifier, e.g. "15A"
        #[arg(long)]
        number: String,

        /// Property type, e.g. "House", "Shop", "Hotel"
        #[arg(long = "type")]
        type_name: String,

        #[arg(long)]
        owner: String,

        #[arg(long, default_value = "")]
        contact: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Registration date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Number of shops inside a house-type property
        #[arg(long)]
        shops: Option<u32>,

        /// Image files to embed (repeatable)
        #[arg(long = "image")]
        images: Vec<PathBuf>,

        /// Document files to embed (repeatable)
        #[arg(long = "document")]
        documents: Vec<PathBuf>,
    },

    /// List properties
    List {
        /// Restrict to one street
        #[arg(long)]
        street: Option<i64>,

        /// Substring search over number, type, and owner
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one property in full
    Show { id: i64 },

    /// Update fields of an existing property
    Update {
        id: i64,

        #[arg(long)]
        street: Option<i64>,

        #[arg(long)]
        number: Option<String>,

        #[arg(long = "type")]
        type_name: Option<String>,

        #[arg(long)]
        owner: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        shops: Option<u32>,
    },

    /// Delete a property
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// CDA report: name, ward, street and property counts
    Cdas {
        /// Write CSV to this path instead of printing a table
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Street report: name, ward, CDA, property count
    Streets {
        /// Write CSV to this path instead of printing a table
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}
