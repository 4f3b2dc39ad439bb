pub mod converter;
pub mod decimal;
pub mod error;
pub mod path;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::converter::{Converter, DecimalConverter};
use crate::error::{Error, Result};

/// Outcome of a successful [`convert_file`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Writes the decimal rendering of `source` next to it, under the name given
/// by [`path::destination_path`].
///
/// An existing output file is truncated. If reading or writing fails midway,
/// whatever was written so far stays on disk.
pub fn convert_file(source: &Path) -> Result<Conversion> {
    let destination = path::destination_path(source)?;

    let mut input =
        File::open(source).map_err(|e| Error::opening_source(source.to_path_buf(), e))?;
    let file = File::create(&destination)
        .map_err(|e| Error::creating_destination(destination.clone(), e))?;

    let mut writer = BufWriter::new(file);
    let bytes = DecimalConverter.convert(&mut input, &mut writer)?;
    writer.flush()?;

    Ok(Conversion { destination, bytes })
}
