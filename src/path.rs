use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Substring of the input file name that marks a HIRC recording.
pub const SOURCE_MARKER: &str = ".hirc";

/// Replacement for [`SOURCE_MARKER`] in the output file name.
pub const DESTINATION_MARKER: &str = "-decimal.hirc";

/// Derives the output path by replacing the first `.hirc` in the file name
/// with `-decimal.hirc`. The directory part is left as is.
///
/// A file name without the marker is rejected: the derived path would equal
/// the input, and creating it would truncate the input before it is read.
pub fn destination_path(source: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| Error::InvalidPath {
            path: source.to_path_buf(),
            reason: "no file name".to_string(),
        })?
        .to_str()
        .ok_or_else(|| Error::InvalidPath {
            path: source.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })?;

    if !name.contains(SOURCE_MARKER) {
        return Err(Error::MissingMarker {
            path: source.to_path_buf(),
            marker: SOURCE_MARKER,
        });
    }

    Ok(source.with_file_name(name.replacen(SOURCE_MARKER, DESTINATION_MARKER, 1)))
}
