//! RoadReg CLI - person registry operations from the command line
//!
//! Usage:
//! ```bash
//! roadreg person add --id '56s_d%&fAB' --first Alice --last Nguyen \
//!     --address '32|Highland Street|Melbourne|Victoria|Australia' \
//!     --birthdate 15-11-1990
//! roadreg person update '56s_d%&fAB' --first Bob
//! roadreg person show '56s_d%&fAB' --json
//! roadreg demerits add '56s_d%&fAB' --date 01-05-2025 --points 3
//! roadreg demerits list '56s_d%&fAB'
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{demerits, person};

/// RoadReg - a Victorian person registry with demerit-point tracking
#[derive(Parser)]
#[command(name = "roadreg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Person records file
    #[arg(long, default_value = "data/people.txt", global = true)]
    pub people_file: PathBuf,

    /// Demerit log file
    #[arg(long, default_value = "data/demerit_points.txt", global = true)]
    pub demerits_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Person record management
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Demerit point management
    Demerits {
        #[command(subcommand)]
        action: DemeritAction,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Register a new person
    Add {
        /// 10-character person ID
        #[arg(long)]
        id: String,
        /// First name
        #[arg(long)]
        first: String,
        /// Last name
        #[arg(long)]
        last: String,
        /// Address as "number|street|city|Victoria|country"
        #[arg(long)]
        address: String,
        /// Birth date, DD-MM-YYYY
        #[arg(long)]
        birthdate: String,
    },
    /// Update an existing person's details
    Update {
        /// ID of the record to update
        existing_id: String,
        /// New person ID (defaults to unchanged)
        #[arg(long)]
        id: Option<String>,
        /// New first name
        #[arg(long)]
        first: Option<String>,
        /// New last name
        #[arg(long)]
        last: Option<String>,
        /// New address
        #[arg(long)]
        address: Option<String>,
        /// New birth date, DD-MM-YYYY
        #[arg(long)]
        birthdate: Option<String>,
    },
    /// Show a person record
    Show {
        /// Person ID
        id: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum DemeritAction {
    /// Record an offense against a person
    Add {
        /// Person ID
        person_id: String,
        /// Offense date, DD-MM-YYYY
        #[arg(long)]
        date: String,
        /// Demerit points (1-6)
        #[arg(long)]
        points: u32,
    },
    /// List a person's offense history
    List {
        /// Person ID
        person_id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Person { action } => {
            person::handle(&cli.people_file, &cli.demerits_file, action)?;
        }
        Commands::Demerits { action } => {
            demerits::handle(&cli.people_file, &cli.demerits_file, action)?;
        }
    }

    Ok(())
}
