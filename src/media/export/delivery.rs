// SPDX-License-Identifier: MPL-2.0
//! Delivery backends for exported images.
//!
//! The pipeline asks each backend, in priority order, whether it can run on
//! this machine and hands the artifact to the first that can. Files are
//! written to a `.part` sibling and renamed into place, so a failed write
//! never leaves a truncated image behind.

use crate::app::paths;
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Encoded image ready to be handed off.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    /// Suggested file name, e.g. `Pizza_Palace.png`.
    pub file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    NativeShare,
    WebDownload,
    CacheSave,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::NativeShare => "native-share",
            BackendKind::WebDownload => "download",
            BackendKind::CacheSave => "cache",
        })
    }
}

/// What a backend did with the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivered {
    Shared(PathBuf),
    Downloaded(PathBuf),
    Saved(PathBuf),
    /// The user closed the share facility without picking a target.
    Dismissed,
}

pub trait DeliveryBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Runtime capability check; unavailable backends are skipped.
    fn is_available(&self) -> bool;

    /// Blocking hand-off. Called from a blocking worker thread.
    fn deliver(&self, artifact: &Artifact) -> Result<Delivered>;
}

/// First backend whose capability check passes.
#[must_use]
pub fn select_backend(backends: &[Box<dyn DeliveryBackend>]) -> Option<&dyn DeliveryBackend> {
    backends
        .iter()
        .map(|backend| &**backend)
        .find(|backend| backend.is_available())
}

/// Backends in priority order for the given settings.
///
/// `interactive` is false for scripted runs, which must never block on a
/// dialog.
#[must_use]
pub fn default_backends(config: &ExportConfig, interactive: bool) -> Vec<Box<dyn DeliveryBackend>> {
    vec![
        Box::new(NativeShare::new(config.native_dialog && interactive)),
        Box::new(WebDownload::new(config.prefer_downloads)),
        Box::new(CacheSave::new(
            paths::get_app_cache_dir(),
            config.file_name.clone(),
        )),
    ]
}

/// Writes `bytes` to `path` through a `.part` file and a rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Delivery(format!("not a file path: {}", path.display())))?;
    let mut part_name = file_name.to_os_string();
    part_name.push(".part");
    let part = path.with_file_name(part_name);

    let written = fs::write(&part, bytes).and_then(|()| fs::rename(&part, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&part);
        return Err(err.into());
    }
    Ok(())
}

// =============================================================================
// Native share
// =============================================================================

/// Native save dialog, the desktop stand-in for a share sheet.
#[derive(Debug)]
pub struct NativeShare {
    enabled: bool,
}

impl NativeShare {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

fn has_display() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    std::env::var_os("WAYLAND_DISPLAY").is_some() || std::env::var_os("DISPLAY").is_some()
}

impl DeliveryBackend for NativeShare {
    fn kind(&self) -> BackendKind {
        BackendKind::NativeShare
    }

    fn is_available(&self) -> bool {
        self.enabled && has_display()
    }

    fn deliver(&self, artifact: &Artifact) -> Result<Delivered> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Share Image")
            .set_file_name(&artifact.file_name)
            .add_filter("PNG", &["png"]);
        if let Some(dir) = dirs::picture_dir() {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(Delivered::Dismissed);
        };
        write_atomic(&path, &artifact.bytes)?;
        Ok(Delivered::Shared(path))
    }
}

// =============================================================================
// Download
// =============================================================================

/// Saves into the user's downloads folder under the suggested name.
#[derive(Debug)]
pub struct WebDownload {
    dir: Option<PathBuf>,
}

impl WebDownload {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self::with_dir(if enabled { dirs::download_dir() } else { None })
    }

    #[must_use]
    pub fn with_dir(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

impl DeliveryBackend for WebDownload {
    fn kind(&self) -> BackendKind {
        BackendKind::WebDownload
    }

    fn is_available(&self) -> bool {
        self.dir.is_some()
    }

    fn deliver(&self, artifact: &Artifact) -> Result<Delivered> {
        let dir = self
            .dir
            .as_ref()
            .ok_or_else(|| Error::Delivery("no downloads directory".to_string()))?;
        let path = dir.join(plain_file_name(&artifact.file_name)?);
        write_atomic(&path, &artifact.bytes)?;
        Ok(Delivered::Downloaded(path))
    }
}

/// Accepts only a bare file name, so a join can never leave the target dir.
fn plain_file_name(name: &str) -> Result<&str> {
    match Path::new(name).file_name().and_then(|f| f.to_str()) {
        Some(file) if file == name => Ok(name),
        _ => Err(Error::Delivery(format!("not a plain file name: {name:?}"))),
    }
}

// =============================================================================
// Cache
// =============================================================================

/// Last-resort save to a well-known path in the app cache directory.
#[derive(Debug)]
pub struct CacheSave {
    dir: Option<PathBuf>,
    file_name: String,
}

impl CacheSave {
    #[must_use]
    pub fn new(dir: Option<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }

    /// Where the artifact lands, if a cache directory is known.
    #[must_use]
    pub fn target(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(&self.file_name))
    }
}

impl DeliveryBackend for CacheSave {
    fn kind(&self) -> BackendKind {
        BackendKind::CacheSave
    }

    fn is_available(&self) -> bool {
        self.dir.is_some()
    }

    fn deliver(&self, artifact: &Artifact) -> Result<Delivered> {
        let path = self
            .target()
            .ok_or_else(|| Error::Delivery("no cache directory".to_string()))?;
        write_atomic(&path, &artifact.bytes)?;
        Ok(Delivered::Saved(path))
    }
}
