use anyhow::Context;
use clap::Parser;

use mapsize::args::{Cli, derive_args};
use mapsize::config::{LoadedConfig, load_mapsize_config, load_mapsize_config_from_path};

fn debug_env_enabled() -> bool {
    std::env::var("MAPSIZE_DEBUG")
        .ok()
        .is_some_and(|value| !value.trim().is_empty() && value.trim() != "0")
}

fn init_tracing(verbose: bool) {
    let level = if verbose || debug_env_enabled() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => LoadedConfig {
            config: load_mapsize_config_from_path(path)?,
            path: Some(path.to_path_buf()),
        },
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
            load_mapsize_config(&cwd)?
        }
    };
    let parsed = derive_args(&cli, &loaded.config);
    init_tracing(parsed.verbose);
    match loaded.path.as_deref() {
        Some(path) => tracing::debug!(path = %path.display(), "using config file"),
        None => tracing::debug!("no config file found, using defaults"),
    }
    tracing::debug!(?parsed, "effective options");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    mapsize::run::run_report(&parsed, &mut out)
        .with_context(|| format!("failed to analyze {}", parsed.mapfile.display()))?;
    Ok(())
}
