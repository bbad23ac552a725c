// Card image loading: resolve `imageSrc` against the asset dir and decode to RGBA.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image source is empty")]
    EmptySource,

    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Raw RGBA image data, ready to upload as a texture.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(
            rgba.len(),
            (width * height * 4) as usize,
            "RGBA buffer size mismatch"
        );
        Self {
            width,
            height,
            rgba,
        }
    }
}

/// `/mango.jpg` → `<asset_dir>/mango.jpg`. A leading slash means "from the asset
/// root", not the filesystem root.
pub fn resolve_image_path(asset_dir: &Path, image_src: &str) -> Result<PathBuf, AssetError> {
    let rel = image_src.trim().trim_start_matches('/');
    if rel.is_empty() {
        return Err(AssetError::EmptySource);
    }
    Ok(asset_dir.join(rel))
}

pub fn load_image(asset_dir: &Path, image_src: &str) -> Result<ImageData, AssetError> {
    let path = resolve_image_path(asset_dir, image_src)?;
    let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })?;
    let img = image::load_from_memory(&bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    log::info!("loaded card image {} ({}x{})", path.to_string_lossy(), w, h);
    Ok(ImageData::new(w, h, rgba.into_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_slash_is_relative_to_asset_dir() {
        let p = resolve_image_path(Path::new("public"), "/mango.jpg").unwrap();
        assert_eq!(p, PathBuf::from("public").join("mango.jpg"));
        let p = resolve_image_path(Path::new("public"), "img/mango.jpg").unwrap();
        assert_eq!(p, PathBuf::from("public").join("img/mango.jpg"));
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(
            resolve_image_path(Path::new("public"), " / "),
            Err(AssetError::EmptySource)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = std::env::temp_dir();
        let name = format!("no_such_card_image_{}.jpg", std::process::id());
        match load_image(&dir, &name) {
            Err(AssetError::Io { path, .. }) => assert!(path.ends_with(&name)),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn decodes_png_from_disk() {
        let mut path = std::env::temp_dir();
        path.push(format!("card_image_{}.png", std::process::id()));
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let dir = path.parent().unwrap().to_path_buf();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let data = load_image(&dir, &format!("/{name}")).unwrap();
        assert_eq!((data.width, data.height), (3, 2));
        assert_eq!(&data.rgba[..4], &[10, 20, 30, 255]);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn undecodable_bytes_are_decode_errors() {
        let mut path = std::env::temp_dir();
        path.push(format!("card_image_bad_{}.jpg", std::process::id()));
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        let dir = path.parent().unwrap().to_path_buf();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(matches!(load_image(&dir, &name), Err(AssetError::Decode(_))));
        let _ = std::fs::remove_file(path);
    }
}
