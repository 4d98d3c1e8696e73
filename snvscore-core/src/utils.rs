use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Pick the column delimiter of a delimited text table from its header line.
/// Tabs win over commas.
///
pub fn guess_delimiter(header: &str) -> char {
    if header.contains('\t') { '\t' } else { ',' }
}
