//! Reading noise corpus list files.
//!
//! A list file is plain text with one noise-source identifier per line.
//! Lines are kept verbatim apart from their terminator; empty lines are
//! skipped. There is no comment or quoting syntax.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SfxError};

/// Reads the identifiers listed in the file at `path`.
///
/// # Errors
///
/// - [`SfxError::CorpusOpen`] if the file cannot be opened
/// - [`SfxError::CorpusRead`] if a line cannot be read
/// - [`SfxError::EmptyCorpus`] if the file lists no identifiers
pub fn read_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SfxError::CorpusOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_list(BufReader::new(file), path)
}

/// Collects the non-empty lines of `reader`. `path` is only used for error
/// context.
pub fn parse_list<R: BufRead>(reader: R, path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut ids = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| SfxError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        // `lines` strips "\n" and "\r\n" but nothing else.
        if !line.is_empty() {
            ids.push(line);
        }
    }

    if ids.is_empty() {
        return Err(SfxError::EmptyCorpus {
            path: path.to_path_buf(),
        });
    }
    Ok(ids)
}
