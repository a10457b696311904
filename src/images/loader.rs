use iced::widget::image::Handle;
use image::imageops::FilterType;

use super::LoadError;

/// Decoded photo ready to hand to the renderer
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// Fetch a photo over HTTP and decode it.
/// Network I/O runs on the async runtime; decoding is CPU-bound so it
/// moves to a blocking worker.
pub async fn fetch(uri: String, max_size: u32) -> Result<LoadedImage, LoadError> {
    let url = reqwest::Url::parse(&uri).map_err(|e| LoadError::InvalidUri {
        uri: uri.clone(),
        reason: e.to_string(),
    })?;

    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;

    tracing::debug!("⬇️  Downloaded {} bytes from {}", bytes.len(), uri);

    tokio::task::spawn_blocking(move || decode(&bytes, max_size))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

/// Decode an encoded image and shrink it so the longest edge is at most
/// `max_size`. Smaller images are left alone.
pub fn decode(bytes: &[u8], max_size: u32) -> Result<LoadedImage, LoadError> {
    let img = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;

    let img = if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([30, 120, 60, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_downscales_large_images() {
        let loaded = decode(&png_bytes(400, 200), 100).unwrap();
        assert_eq!((loaded.width, loaded.height), (100, 50));
    }

    #[test]
    fn test_decode_keeps_small_images() {
        let loaded = decode(&png_bytes(40, 30), 100).unwrap();
        assert_eq!((loaded.width, loaded.height), (40, 30));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"definitely not an image", 100).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_fetch_rejects_relative_uri() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let err = runtime
            .block_on(fetch("placeholder-url-1".to_string(), 100))
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidUri { .. }));
    }
}
