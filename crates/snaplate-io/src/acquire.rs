use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use snaplate_types::EncodedImage;

#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("could not read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("not a supported image format")]
    UnsupportedMediaType,
}

/// Read an image file from disk, sniff its media type from the content and
/// produce the inline representation. Anything the sniffer does not
/// recognize as an image is rejected without touching session state.
pub fn load_image_file(path: &Path) -> Result<EncodedImage, AcquireError> {
    let bytes = std::fs::read(path)?;
    from_bytes(&bytes)
}

/// Encode raw bytes whose format is sniffed from the content.
pub fn from_bytes(bytes: &[u8]) -> Result<EncodedImage, AcquireError> {
    let format =
        image::guess_format(bytes).map_err(|_| AcquireError::UnsupportedMediaType)?;
    Ok(encode(format.to_mime_type(), bytes))
}

/// Encode bytes whose media type is already known (e.g. a clipboard grab
/// re-encoded as PNG).
pub fn encode(mime_type: &str, bytes: &[u8]) -> EncodedImage {
    EncodedImage {
        mime_type: mime_type.to_string(),
        data: STANDARD.encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn png_bytes_are_accepted_with_sniffed_mime() {
        let encoded = from_bytes(&tiny_png()).unwrap();
        assert_eq!(encoded.mime_type, "image/png");
        assert!(!encoded.data.is_empty());
        assert!(encoded.data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let result = from_bytes(b"plain text, definitely not pixels");
        assert!(matches!(result, Err(AcquireError::UnsupportedMediaType)));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let result = load_image_file(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(AcquireError::Read(_))));
    }

    #[test]
    fn load_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("snaplate-acquire-{}.png", std::process::id()));
        std::fs::write(&path, tiny_png()).unwrap();
        let encoded = load_image_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(encoded.mime_type, "image/png");
    }
}
