use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use snaplate_types::TextPane;

/// Write the displayed text of a pane to `{dir}/{pane}_{unix_millis}.txt`
/// and return the full path.
pub fn save_text(dir: &Path, pane: TextPane, text: &str) -> Result<PathBuf, anyhow::Error> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let path = dir.join(format!("{}_{}.txt", pane.as_str(), millis));
    std::fs::write(&path, text)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_file_carries_pane_and_timestamp() {
        let dir = std::env::temp_dir();
        let path = save_text(&dir, TextPane::Translated, "Hola").unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("translated_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hola");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = Path::new("/definitely/not/a/directory");
        assert!(save_text(dir, TextPane::Extracted, "x").is_err());
    }
}
