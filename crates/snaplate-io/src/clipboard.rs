use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use arboard::Clipboard;
use snaplate_types::EncodedImage;
use tokio::time;

/// Poll the clipboard for images and hand every newly copied one to the
/// callback, re-encoded as PNG. The content present at startup only primes
/// the dedupe state so stale clipboards do not auto-load.
pub async fn watch_clipboard_images<F>(poll: Duration, mut on_image: F) -> Result<(), anyhow::Error>
where
    F: FnMut(EncodedImage) + Send + 'static,
{
    let mut clipboard = Clipboard::new()?;
    let mut last_seen: Option<u64> = None;
    let mut primed = false;

    let mut interval = time::interval(poll);

    loop {
        interval.tick().await;
        let Ok(grab) = clipboard.get_image() else {
            // No image on the clipboard right now.
            primed = true;
            continue;
        };

        let digest = digest_rgba(&grab.bytes);
        if last_seen == Some(digest) {
            continue;
        }
        last_seen = Some(digest);

        if !primed {
            primed = true;
            continue;
        }

        match encode_clipboard_image(grab.width, grab.height, grab.bytes.into_owned()) {
            Ok(image) => on_image(image),
            Err(e) => tracing::warn!("failed to encode clipboard image: {e}"),
        }
    }
}

/// Put text on the clipboard (copy affordance of the text panes).
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

fn digest_rgba(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

fn encode_clipboard_image(
    width: usize,
    height: usize,
    rgba: Vec<u8>,
) -> Result<EncodedImage, anyhow::Error> {
    let img = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .ok_or_else(|| anyhow::anyhow!("clipboard image has inconsistent dimensions"))?;

    let mut png_bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img).write_to(&mut png_bytes, image::ImageFormat::Png)?;

    Ok(crate::acquire::encode("image/png", &png_bytes.into_inner()))
}
