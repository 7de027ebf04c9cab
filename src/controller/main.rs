use log::info;

use crate::accounting::file_counts::FileCountsAndSizes;
use crate::proto::generated_proto::accounting::FileAccountingSnapshot;
use crate::proto::generated_proto::common::DeletePacerConfig;
use crate::scan::{scan_directory, ScanResult};
use crate::utils;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

/// Reports file accounting for a storage engine data directory to the
/// delete pacer. Every scan builds a fresh aggregate.
pub struct AccountingController {
    data_directory: String,
    is_local: bool,
}

impl AccountingController {
    pub fn open(config: &DeletePacerConfig) -> anyhow::Result<Self> {
        utils::logging::configure_logging(config)?;

        let data_directory = utils::paths::data_directory(config)?;
        let is_local = utils::paths::data_directory_is_local(config);
        info!(
            "Opened file accounting for: {} (local: {})",
            &data_directory, is_local
        );

        Ok(AccountingController {
            data_directory,
            is_local,
        })
    }

    pub fn data_directory(&self) -> &str {
        &self.data_directory
    }

    pub fn scan(&self) -> anyhow::Result<ScanResult> {
        let result = scan_directory(&self.data_directory, self.is_local)?;
        log_counts(&self.data_directory, &result.counts);
        if result.skipped > 0 {
            info!(
                "Skipped {} unrecognized files in: {}",
                result.skipped, &self.data_directory
            );
        }
        Ok(result)
    }

    /// Scans and converts the totals for metrics export.
    pub fn snapshot(&self) -> anyhow::Result<FileAccountingSnapshot> {
        let result = self.scan()?;
        Ok(result.counts.to_snapshot())
    }

    pub fn close(self) -> anyhow::Result<()> {
        info!("Closing file accounting for: {}", &self.data_directory);
        Ok(())
    }
}

fn log_counts(data_directory: &str, counts: &FileCountsAndSizes) {
    let total = counts.total();
    info!(
        "File accounting for {}: {} files, {} bytes",
        data_directory, total.count, total.bytes
    );
    info!(
        "Tables: {:?} local: {:?}",
        &counts.tables.all, &counts.tables.local
    );
    info!(
        "Blob files: {:?} local: {:?}",
        &counts.blob_files.all, &counts.blob_files.local
    );
    info!("Other: {:?}", &counts.other);
}
