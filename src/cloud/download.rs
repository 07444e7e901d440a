// SPDX-License-Identifier: MPL-2.0
//! Saving a fetched image into the download directory.
//!
//! The payload is written to a temporary file next to its destination and
//! then persisted under the first free name (`image.png`, `image (1).png`,
//! ...). An existing file is never overwritten.

use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Upper bound on `name (n).ext` candidates before giving up.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// File extension matching the payload's image format, if recognised.
#[must_use]
pub fn extension_for(bytes: &[u8]) -> Option<&'static str> {
    image_rs::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
}

/// Candidate file name for attempt `n` (0 is the plain name).
#[must_use]
pub fn candidate_name(stem: &str, extension: Option<&str>, n: u32) -> String {
    let base = if n == 0 {
        stem.to_string()
    } else {
        format!("{stem} ({n})")
    };
    match extension {
        Some(ext) => format!("{base}.{ext}"),
        None => base,
    }
}

/// Writes `bytes` into `directory` as `stem` plus a detected extension.
///
/// Returns the path that was written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created, the temporary
/// file cannot be written, or no free file name is found.
pub fn save(directory: &Path, stem: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;

    let mut temp = tempfile::NamedTempFile::new_in(directory)?;
    temp.write_all(bytes)?;
    temp.flush()?;

    let extension = extension_for(bytes);

    for n in 0..MAX_NAME_ATTEMPTS {
        let target = directory.join(candidate_name(stem, extension, n));
        match temp.persist_noclobber(&target) {
            Ok(_) => {
                tracing::info!(path = %target.display(), size = bytes.len(), "image saved");
                return Ok(target);
            }
            Err(err) if err.error.kind() == ErrorKind::AlreadyExists => {
                temp = err.file;
            }
            Err(err) => return Err(err.error.into()),
        }
    }

    Err(Error::Io(format!(
        "no free file name for {stem} in {}",
        directory.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn extension_is_detected_from_content() {
        assert_eq!(extension_for(&PNG_HEADER), Some("png"));
        assert_eq!(extension_for(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("jpg"));
        assert_eq!(extension_for(b"plain text"), None);
    }

    #[test]
    fn candidate_names_are_numbered() {
        assert_eq!(candidate_name("image", Some("png"), 0), "image.png");
        assert_eq!(candidate_name("image", Some("png"), 2), "image (2).png");
        assert_eq!(candidate_name("image", None, 0), "image");
        assert_eq!(candidate_name("image", None, 1), "image (1)");
    }

    #[test]
    fn save_writes_payload() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = save(dir.path(), "image", &PNG_HEADER).expect("saved");

        assert_eq!(path, dir.path().join("image.png"));
        assert_eq!(std::fs::read(&path).expect("readable"), PNG_HEADER);
    }

    #[test]
    fn save_never_overwrites() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first = save(dir.path(), "image", &PNG_HEADER).expect("first");
        let second = save(dir.path(), "image", &PNG_HEADER).expect("second");

        assert_ne!(first, second);
        assert_eq!(second, dir.path().join("image (1).png"));
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("a").join("b");
        let path = save(&nested, "image", b"raw").expect("saved");
        assert_eq!(path, nested.join("image"));
    }

    #[test]
    fn no_temporary_files_are_left_behind() {
        let dir = tempfile::tempdir().expect("temp dir");
        save(dir.path(), "image", &PNG_HEADER).expect("saved");

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("listable")
            .filter_map(std::result::Result::ok)
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
