// SPDX-License-Identifier: MPL-2.0
//! Bundled images: the default logo and the base-image placeholder.

use crate::error::{Error, Result};
use image_rs::RgbaImage;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

const PLACEHOLDER: &str = "restaurant_placeholder.png";
const DEFAULT_LOGO: &str = "logo.png";

fn load(name: &str) -> Result<RgbaImage> {
    let file = Asset::get(name).ok_or_else(|| Error::Decode(format!("missing asset {name}")))?;
    Ok(image_rs::load_from_memory(file.data.as_ref())?.to_rgba8())
}

/// Image drawn in place of a base image that failed to load.
pub fn placeholder() -> Result<RgbaImage> {
    load(PLACEHOLDER)
}

/// Logo used when none is supplied.
pub fn default_logo() -> Result<RgbaImage> {
    load(DEFAULT_LOGO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_decode() {
        let placeholder = placeholder().expect("placeholder");
        assert_eq!(placeholder.dimensions(), (320, 180));

        let logo = default_logo().expect("logo");
        assert_eq!(logo.dimensions(), (120, 60));
    }
}
