//! Bundled text and drawable resources.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Mutex;

use tint_config::ResourcesConfig;

use crate::error::{Result, UtilsError};

/// Read a UTF-8 text resource, normalising every line ending to `\n`.
///
/// Malformed UTF-8 is replaced with U+FFFD. A resource that cannot be opened
/// yields an empty string. A read error part way through is logged and
/// whatever was read up to that point is returned.
pub fn read_raw_text(path: &Path) -> String {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("Unable to load resource {}: {}", path.display(), e);
            return String::new();
        }
    };

    let mut reader = BufReader::new(file);
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = buf
                    .strip_suffix(b"\n")
                    .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
                    .unwrap_or(&buf);
                text.push_str(&String::from_utf8_lossy(line));
                text.push('\n');
            }
            Err(e) => {
                log::warn!("Unable to load resource {}: {}", path.display(), e);
                break;
            }
        }
    }
    text
}

/// The changelog shown after an upgrade.
pub fn changelog(resources: &ResourcesConfig) -> String {
    read_raw_text(&resources.changelog)
}

/// Bookmark thumbnail dimensions, taken once from the intrinsic size of the
/// thumbnail drawable.
#[derive(Debug, Default)]
pub struct ThumbnailDimensions {
    cached: Mutex<Option<(u32, u32)>>,
}

impl ThumbnailDimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(width, height)` of the drawable at `path`. Only successful reads are cached.
    pub fn get(&self, path: &Path) -> Result<(u32, u32)> {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(dims) = *cached {
            return Ok(dims);
        }

        let dims = image::image_dimensions(path).map_err(|source| UtilsError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        *cached = Some(dims);
        Ok(dims)
    }
}
