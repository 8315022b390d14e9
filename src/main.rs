#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tourguard_core::{DirectoryConfig, StorageLocation};
use tracing_subscriber::EnvFilter;

/// Global directory configuration, set from command line
static DIRECTORY_CONFIG: OnceLock<DirectoryConfig> = OnceLock::new();

/// Get the directory configuration (set from command line or default)
pub fn get_directory_config() -> DirectoryConfig {
    DIRECTORY_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| DirectoryConfig::in_dir(default_data_dir(None)))
}

fn default_data_dir(name: Option<&str>) -> PathBuf {
    let dir_name = match name {
        Some(name) => format!("tourguard-{}", name),
        None => "tourguard".to_string(),
    };
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(dir_name)
}

/// Tourguard - Smart Tourist Safety Monitoring System
#[derive(Parser, Debug)]
#[command(name = "tourguard-desktop")]
#[command(about = "Tourguard - tourist registration and safety portal")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: tourguard-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Keep all records in memory; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Do not insert the demo tourist (alice@demo.com)
    #[arg(long)]
    no_demo: bool,

    /// Simulated digital-identity issuance time in milliseconds
    #[arg(long, default_value_t = 800)]
    registration_delay_ms: u64,
}

impl Args {
    fn directory_config(&self) -> DirectoryConfig {
        let location = if self.ephemeral {
            StorageLocation::InMemory
        } else {
            let data_dir = self
                .data_dir
                .clone()
                .unwrap_or_else(|| default_data_dir(self.name.as_deref()));
            StorageLocation::File(data_dir.join("tourists.redb"))
        };

        DirectoryConfig {
            location,
            seed_demo: !self.no_demo,
            registration_delay: Duration::from_millis(self.registration_delay_ms),
        }
    }

    fn window_title(&self) -> String {
        match &self.name {
            Some(name) => format!("Tourguard - {}", name),
            None => "Tourguard".to_string(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.directory_config();
    tracing::info!("Starting '{}' with storage {:?}", args.window_title(), config.location);

    // Store directory config globally
    let _ = DIRECTORY_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(args.window_title())
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_storage_with_demo_seed() {
        let args = Args::parse_from(["tourguard-desktop", "--data-dir", "/tmp/tg"]);
        let config = args.directory_config();

        assert_eq!(
            config.location,
            StorageLocation::File(PathBuf::from("/tmp/tg/tourists.redb"))
        );
        assert!(config.seed_demo);
        assert_eq!(config.registration_delay, Duration::from_millis(800));
    }

    #[test]
    fn ephemeral_flags() {
        let args = Args::parse_from([
            "tourguard-desktop",
            "--ephemeral",
            "--no-demo",
            "--registration-delay-ms",
            "0",
        ]);
        let config = args.directory_config();

        assert_eq!(config.location, StorageLocation::InMemory);
        assert!(!config.seed_demo);
        assert!(config.registration_delay.is_zero());
    }

    #[test]
    fn instance_name_picks_data_dir_and_title() {
        let args = Args::parse_from(["tourguard-desktop", "--name", "kiosk"]);

        match args.directory_config().location {
            StorageLocation::File(path) => {
                assert!(path.ends_with("tourguard-kiosk/tourists.redb"));
            }
            other => panic!("unexpected location {:?}", other),
        }
        assert_eq!(args.window_title(), "Tourguard - kiosk");
    }
}
