use std::{fs, io::ErrorKind};

use anyhow::Context;
use log::debug;

use crate::accounting::{file_counts::FileCountsAndSizes, file_type::parse_filename};

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub counts: FileCountsAndSizes,

    /// Regular files whose names are not storage engine files.
    pub skipped: u64,
}

/// Tallies every storage engine file directly under `dir`.
/// Not recursive, sub-directories are ignored.
pub fn scan_directory(dir: &str, is_local: bool) -> anyhow::Result<ScanResult> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot list data directory: {}", dir))?;

    let mut result = ScanResult::default();
    for entry in entries {
        let entry = entry.with_context(|| format!("cannot read entry in: {}", dir))?;

        // follows symlinks, a linked table is accounted at its target size
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // deleted under us, or a dangling link
                debug!("File vanished during scan: {:?}", entry.path());
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("cannot stat {:?}", entry.path()));
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let filename = entry.file_name();
        let filename = match filename.to_str() {
            Some(filename) => filename,
            None => {
                debug!("Skipping non utf-8 filename: {:?}", entry.path());
                result.skipped += 1;
                continue;
            }
        };

        match parse_filename(filename) {
            Ok((file_type, _)) => result.counts.inc(file_type, metadata.len(), is_local),
            Err(e) => {
                debug!("Skipping {}/{}: {}", dir, filename, e);
                result.skipped += 1;
            }
        }
    }

    Ok(result)
}
