//! Bundled files (site copy, panorama, logo) and the panorama decoder.

use flik_studio::SiteContent;
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

/// The `assets/` folder. Debug builds read it from disk on every access,
/// release builds carry it compressed inside the executable.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const SITE_FILE: &str = "site.ron";

/// Why the bundled site copy could not be used.
#[derive(Error, Debug)]
pub enum ContentLoadError {
    #[error("bundled site copy (site.ron) is missing")]
    NotFound,
    #[error("site copy is not UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("site copy has a syntax error: {0}")]
    Parse(#[from] ron::de::SpannedError),
}

/// Why a panorama could not be turned into pixels.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("no bundled image named '{0}'")]
    AssetNotFound(String),
    #[error("could not read panorama file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{path}' is not a readable PNG or JPEG: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
}

/// Where the panorama image comes from.
#[derive(Debug, Clone)]
pub enum PanoramaSource {
    /// Path inside the embedded assets folder
    Embedded(String),
    /// Image on disk, given on the command line
    File(PathBuf),
}

/// Straight RGBA8 pixels, row by row.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl From<image::RgbaImage> for DecodedImage {
    fn from(rgba: image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self {
            pixels: rgba.into_raw(),
            width,
            height,
        }
    }
}

/// Panorama lifecycle, polled once per frame.
pub enum AssetLoadState {
    /// Decoder thread still running; its result arrives on this channel.
    Loading(mpsc::Receiver<Result<DecodedImage, ImageLoadError>>),
    /// Pixels waiting to be uploaded on the UI thread.
    Ready(DecodedImage),
    /// On the GPU; the CPU copy was dropped.
    Uploaded,
    /// Gave up. The message was already toasted and is drawn in the tour.
    Error(String),
}

pub fn load_panorama(source: &PanoramaSource) -> Result<DecodedImage, ImageLoadError> {
    match source {
        PanoramaSource::Embedded(path) => load_and_decode_image(path),
        PanoramaSource::File(path) => load_image_file(path),
    }
}

pub fn load_and_decode_image(path: &str) -> Result<DecodedImage, ImageLoadError> {
    match Assets::get(path) {
        Some(file) => decode(&file.data, path),
        None => Err(ImageLoadError::AssetNotFound(path.to_owned())),
    }
}

pub fn load_image_file(path: &Path) -> Result<DecodedImage, ImageLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes, &path.display().to_string())
}

fn decode(bytes: &[u8], path: &str) -> Result<DecodedImage, ImageLoadError> {
    image::load_from_memory(bytes)
        .map(|img| DecodedImage::from(img.to_rgba8()))
        .map_err(|source| ImageLoadError::Decode {
            path: path.to_owned(),
            source,
        })
}

/// Parses the bundled `site.ron`.
pub fn load_site_content() -> Result<SiteContent, ContentLoadError> {
    let file = Assets::get(SITE_FILE).ok_or(ContentLoadError::NotFound)?;
    let text = std::str::from_utf8(&file.data)?;
    Ok(ron::from_str(text)?)
}
