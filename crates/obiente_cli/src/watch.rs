//! Rebuild-on-change
//!
//! Watches the config file and the theme definition directory, re-running
//! the build whenever either changes. The config is reloaded on every
//! rebuild so edits to the watched set itself take effect.

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crate::build::run_build;
use crate::config::ObienteConfig;

pub fn run_watch(config_path: &Path) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("creating file watcher")?;

    if config_path.exists() {
        watcher
            .watch(config_path, RecursiveMode::NonRecursive)
            .with_context(|| format!("watching {}", config_path.display()))?;
    }

    let config = ObienteConfig::load_or_default(config_path)?;
    if let Some(dir) = config.themes.dir.as_deref().filter(|dir| dir.exists()) {
        watcher
            .watch(dir, RecursiveMode::Recursive)
            .with_context(|| format!("watching {}", dir.display()))?;
    }

    if let Err(err) = run_build(&config) {
        tracing::error!(%err, "initial build failed");
    }
    tracing::info!("watching for changes, Ctrl-C to stop");

    loop {
        match rx.recv() {
            Ok(Ok(event)) if event.kind.is_access() => {}
            Ok(Ok(_)) => {
                // Editors fire bursts of events per save; drain them before
                // rebuilding once.
                while rx.recv_timeout(Duration::from_millis(100)).is_ok() {}

                match ObienteConfig::load_or_default(config_path) {
                    Ok(config) => {
                        if let Err(err) = run_build(&config) {
                            tracing::error!(%err, "rebuild failed");
                        } else {
                            tracing::info!("rebuilt");
                        }
                    }
                    Err(err) => tracing::error!(%err, "config reload failed"),
                }
            }
            Ok(Err(err)) => tracing::warn!(%err, "watch error"),
            Err(err) => {
                tracing::warn!(%err, "watch channel closed");
                return Ok(());
            }
        }
    }
}
