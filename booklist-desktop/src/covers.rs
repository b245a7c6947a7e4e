//! Cover image resolution for book entries.
//!
//! Each cover is requested once. `http`/`https` references are fetched over
//! the network; anything else is read as a local path (an optional
//! `file://` prefix is accepted). The bytes are decoded before a cover counts
//! as loaded. A failure is reported to the entry, which falls back to its
//! placeholder for good.

use iced::widget::image::Handle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decoder task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Loads and decodes the cover at `url` into an RGBA image handle.
///
/// # Errors
///
/// Returns [`CoverError::Http`] for a failed or non-2xx request,
/// [`CoverError::Io`] for an unreadable file, and [`CoverError::Decode`]
/// when the bytes are empty, in an unsupported format or not a valid image.
pub async fn load_cover(url: String) -> Result<Handle, CoverError> {
    let bytes = if is_remote(&url) {
        let response = reqwest::get(&url).await?.error_for_status()?;
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(local_path(&url)).await?
    };
    tokio::task::spawn_blocking(move || decode(&bytes)).await?
}

fn decode(bytes: &[u8]) -> Result<Handle, CoverError> {
    let pixels = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = pixels.dimensions();
    Ok(Handle::from_rgba(width, height, pixels.into_raw()))
}

fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn local_path(url: &str) -> &str {
    url.strip_prefix("file://").unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn http_and_https_are_remote() {
        assert!(is_remote("https://via.placeholder.com/100x150"));
        assert!(is_remote("http://example.com/a.png"));
        assert!(!is_remote("/home/me/covers/a.png"));
        assert!(!is_remote("file:///tmp/a.png"));
    }

    #[test]
    fn file_prefix_is_stripped() {
        assert_eq!(local_path("file:///tmp/a.png"), "/tmp/a.png");
        assert_eq!(local_path("covers/a.png"), "covers/a.png");
    }

    #[test]
    fn local_png_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([200, 40, 40, 255]))
            .save(&path)
            .unwrap();

        let result = block_on(load_cover(format!("file://{}", path.display())));
        assert!(result.is_ok());
    }

    #[test]
    fn junk_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"this is plainly not an image").unwrap();

        let result = block_on(load_cover(path.display().to_string()));
        assert!(matches!(result, Err(CoverError::Decode(_))));
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let result = block_on(load_cover(path.display().to_string()));
        assert!(matches!(result, Err(CoverError::Decode(_))));
    }

    #[test]
    fn empty_local_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let result = block_on(load_cover(path.display().to_string()));
        assert!(matches!(result, Err(CoverError::Decode(_))));
    }

    #[test]
    fn missing_local_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");

        let result = block_on(load_cover(path.display().to_string()));
        assert!(matches!(result, Err(CoverError::Io(_))));
    }
}
