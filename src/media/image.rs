// SPDX-License-Identifier: MPL-2.0
//! Base image loading with placeholder fallback.
//!
//! Restaurant photos come from a remote URL or a local file. Any failure to
//! obtain or decode them switches [`BaseImage`] to the bundled placeholder for
//! the rest of its lifetime; a later load of the same source does not clear
//! the fallback.

use crate::error::{Error, Result};
use crate::media::assets;
use image_rs::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the base image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    File(PathBuf),
    /// No image available; draw the placeholder.
    Placeholder,
}

impl ImageSource {
    /// Interprets `http(s)://` references as remote, anything else as a path.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();
        if reference.is_empty() {
            Self::Placeholder
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Remote(reference.to_string())
        } else {
            Self::File(PathBuf::from(reference))
        }
    }
}

/// Decodes encoded bytes (PNG, JPEG, ...) into RGBA pixels.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image_rs::load_from_memory(bytes)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::Decode("image has no pixels".to_string()));
    }
    Ok(image.to_rgba8())
}

pub fn load_path(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Downloads and decodes a remote image, authenticating with `token` when given.
pub async fn fetch(client: &reqwest::Client, url: &str, token: Option<&str>) -> Result<RgbaImage> {
    let mut request = client.get(url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }
    let bytes = response.bytes().await?;
    decode(&bytes)
}

/// Base image loader for one detail-screen session.
#[derive(Debug, Default)]
pub struct BaseImage {
    fallback_active: bool,
}

impl BaseImage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a previous failure switched this session to the placeholder.
    #[must_use]
    pub fn is_fallback_active(&self) -> bool {
        self.fallback_active
    }

    /// Resolves `source` to pixels, falling back to the placeholder.
    ///
    /// Only fails if the bundled placeholder itself cannot be decoded.
    pub async fn resolve(
        &mut self,
        source: &ImageSource,
        client: &reqwest::Client,
        token: Option<&str>,
    ) -> Result<RgbaImage> {
        if self.fallback_active {
            return assets::placeholder();
        }
        let loaded = match source {
            ImageSource::Remote(url) => fetch(client, url, token).await,
            ImageSource::File(path) => load_path(path),
            ImageSource::Placeholder => return assets::placeholder(),
        };
        self.accept(loaded)
    }

    /// Applies the outcome of a load attempt.
    pub fn accept(&mut self, loaded: Result<RgbaImage>) -> Result<RgbaImage> {
        if self.fallback_active {
            return assets::placeholder();
        }
        match loaded {
            Ok(image) => Ok(image),
            Err(err) => {
                tracing::warn!(error = %err, "base image unavailable, using placeholder");
                self.fallback_active = true;
                assets::placeholder()
            }
        }
    }
}
