// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override**: parameter to the `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`, `--cache-dir`), set via [`init_cli_overrides`]
//! 3. **Environment variables** (`LOGO_STAMP_DATA_DIR`, `LOGO_STAMP_CONFIG_DIR`, `LOGO_STAMP_CACHE_DIR`)
//! 4. **Platform default** via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "LogoStamp";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "LOGO_STAMP_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOGO_STAMP_CONFIG_DIR";

/// Environment variable to override the cache directory.
pub const ENV_CACHE_DIR: &str = "LOGO_STAMP_CACHE_DIR";

#[derive(Debug, Default, Clone)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Initializes CLI overrides for the data, config and cache directories.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_overrides(
    data_dir: Option<String>,
    config_dir: Option<String>,
    cache_dir: Option<String>,
) {
    let overrides = CliOverrides {
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
        cache_dir: cache_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        tracing::debug!("CLI path overrides already initialized");
    }
}

fn cli_override(select: fn(&CliOverrides) -> Option<PathBuf>) -> Option<PathBuf> {
    CLI_OVERRIDES.get().and_then(select)
}

fn env_override(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve(
    override_path: Option<PathBuf>,
    select: fn(&CliOverrides) -> Option<PathBuf>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(|| cli_override(select))
        .or_else(|| env_override(env_var))
        .or_else(|| {
            platform().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the application data directory (session state lives here).
///
/// - Linux: `~/.local/share/LogoStamp/`
/// - macOS: `~/Library/Application Support/LogoStamp/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LogoStamp\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        |o| o.data_dir.clone(),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Returns the application config directory (`settings.toml` lives here).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        |o| o.config_dir.clone(),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

/// Returns the application cache directory, the well-known location for
/// share artifacts when no native share facility is available.
///
/// - Linux: `~/.cache/LogoStamp/`
/// - macOS: `~/Library/Caches/LogoStamp/`
/// - Windows: `C:\Users\<User>\AppData\Local\LogoStamp\`
pub fn get_app_cache_dir() -> Option<PathBuf> {
    get_app_cache_dir_with_override(None)
}

pub fn get_app_cache_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        |o| o.cache_dir.clone(),
        ENV_CACHE_DIR,
        dirs::cache_dir,
    )
}
