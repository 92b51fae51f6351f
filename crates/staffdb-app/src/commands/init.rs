//! staffdb init command

use clap::Args;
use shared::{AppConfig, StorageBackend, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the config file into
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Configure the in-memory store instead of SQLite
    #[arg(long)]
    pub memory: bool,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.directory)?;

        let mut config = AppConfig::default();
        if self.memory {
            config.database.backend = StorageBackend::Memory;
        }

        let path = self.directory.join(DEFAULT_CONFIG_FILE);
        config.write_to(&path, self.force)?;

        println!("✓ Wrote {}", path.display());
        Ok(())
    }
}
