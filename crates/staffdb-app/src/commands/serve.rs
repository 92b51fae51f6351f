//! staffdb serve command

use anyhow::Context;
use clap::Args;
use shared::{AppConfig, StorageBackend, DEFAULT_CONFIG_FILE};
use staffdb_adapter::controller::{self, AppState};
use staffdb_adapter::presenter::PageRenderer;
use staffdb_adapter::repository::{InMemoryEmployeeRepository, SqliteEmployeeRepository};
use staffdb_domain::EmployeeRepository;
use staffdb_usecase::EmployeeService;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Default, Args)]
pub struct ServeCommand {
    /// Config file (defaults to ./staffdb.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long, conflicts_with = "in_memory")]
    pub database: Option<PathBuf>,

    /// Keep employees in memory only
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeCommand {
    /// File settings first, then command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                AppConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => AppConfig::default(),
        };

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.database {
            config.database.backend = StorageBackend::Sqlite;
            config.database.path = path.clone();
        }
        if self.in_memory {
            config.database.backend = StorageBackend::Memory;
        }

        Ok(config)
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let config = self.resolve_config()?;

        // ========================================
        // Dependency Injection - Wire up the system
        // ========================================

        let repository = open_repository(&config)?;
        let service = EmployeeService::new(repository);
        let pages = PageRenderer::new().context("failed to load page templates")?;
        let state = AppState::new(service, pages);

        let addr = config.server.socket_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        controller::serve(listener, state, shutdown_signal()).await?;
        info!("staff directory stopped");
        Ok(())
    }
}

/// Adapters are chosen here; everything above the port is unaware of the choice
fn open_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn EmployeeRepository>> {
    match config.database.backend {
        StorageBackend::Sqlite => {
            let path = &config.database.path;
            let repo = SqliteEmployeeRepository::open(path)
                .with_context(|| format!("failed to open database {}", path.display()))?;
            Ok(Arc::new(repo))
        }
        StorageBackend::Memory => {
            warn!("using in-memory store, employees are lost on exit");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
