//! # Staff Directory - Employee records over HTML forms
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - CLI, logging, dependency injection       │
//! │    │                                                            │
//! │    ├── Creates: SqliteEmployeeRepository or InMemory (adapter)  │
//! │    ├── Creates: EmployeeService (use case)                      │
//! │    ├── Creates: PageRenderer (presenter)                        │
//! │    └── Runs: the axum HTTP controller                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   staffdb                       - Serve with ./staffdb.json or defaults
//!   staffdb serve [--port 8080]   - Serve with overrides
//!   staffdb init [dir]            - Write a default staffdb.json

mod commands;

use clap::{Parser, Subcommand};
use commands::{InitCommand, ServeCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "staffdb")]
#[command(about = "Staff Directory - manage employee records through HTML forms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web application
    Serve(ServeCommand),
    /// Write a default config file
    Init(InitCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(cmd)) => cmd.run().await,
        Some(Commands::Init(cmd)) => cmd.run(),
        None => ServeCommand::default().run().await,
    }
}
