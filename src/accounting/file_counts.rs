use anyhow::bail;
use protobuf::MessageField;

use crate::proto::generated_proto::accounting::{CountAndSizeSnapshot, FileAccountingSnapshot};

use super::{
    count_and_size::{BlobFileCountsAndSizes, CountAndSize, TableCountsAndSizes},
    file_type::{FileNum, FileType},
};

#[cfg(test)]
#[path = "file_counts_test.rs"]
mod file_counts_test;

/// A single file reported to the accounting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteFile {
    pub file_type: FileType,
    pub file_num: FileNum,
    pub size: u64,
    pub is_local: bool,
}

/// Counts and sizes for all file types.
///
/// Not synchronized: one instance belongs to one accounting pass.
/// Concurrent contributors should each build their own and combine
/// them with [`FileCountsAndSizes::merge_with`] or
/// [`FileCountsAndSizes::aggregate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileCountsAndSizes {
    pub tables: TableCountsAndSizes,
    pub blob_files: BlobFileCountsAndSizes,

    /// Log, lock, manifest, options and temp files.
    /// Not separated by locality.
    pub other: CountAndSize,
}

impl FileCountsAndSizes {
    /// Increases the relevant count and size for a single file.
    pub fn inc(&mut self, file_type: FileType, file_size: u64, is_local: bool) {
        match file_type {
            FileType::Table => self.tables.inc(file_size, is_local),
            FileType::Blob => self.blob_files.inc(file_size, is_local),
            FileType::Log
            | FileType::Lock
            | FileType::Manifest
            | FileType::Options
            | FileType::OldTemp
            | FileType::Temp => self.other.inc(file_size),
        }
    }

    /// Same as [`FileCountsAndSizes::inc`] for a raw file type code.
    /// Codes outside of the known enumeration count as other files.
    pub fn inc_code(&mut self, code: i32, file_size: u64, is_local: bool) {
        match FileType::try_from(code) {
            Ok(file_type) => self.inc(file_type, file_size, is_local),
            Err(_) => self.other.inc(file_size),
        }
    }

    pub fn from_files<'a, I>(files: I) -> Self
    where
        I: IntoIterator<Item = &'a ObsoleteFile>,
    {
        let mut counts = FileCountsAndSizes::default();
        for file in files {
            counts.inc(file.file_type, file.size, file.is_local);
        }
        counts
    }

    pub fn merge_with(&mut self, other: &Self) {
        self.tables.merge_with(&other.tables);
        self.blob_files.merge_with(&other.blob_files);
        self.other.merge_with(&other.other);
    }

    pub fn aggregate(partials: &[FileCountsAndSizes]) -> FileCountsAndSizes {
        let mut total = FileCountsAndSizes::default();
        for partial in partials.iter() {
            total.merge_with(partial);
        }
        total
    }

    /// Totals across every file type, regardless of locality.
    pub fn total(&self) -> CountAndSize {
        let mut total = self.tables.all;
        total.merge_with(&self.blob_files.all);
        total.merge_with(&self.other);
        total
    }

    pub fn to_snapshot(&self) -> FileAccountingSnapshot {
        let mut snapshot = FileAccountingSnapshot::new();
        snapshot.tables_all = to_snapshot_field(&self.tables.all);
        snapshot.tables_local = to_snapshot_field(&self.tables.local);
        snapshot.blob_files_all = to_snapshot_field(&self.blob_files.all);
        snapshot.blob_files_local = to_snapshot_field(&self.blob_files.local);
        snapshot.other = to_snapshot_field(&self.other);
        snapshot
    }

    /// Missing fields read back as zero. Rejects snapshots where a
    /// local bucket exceeds its `all` bucket.
    pub fn from_snapshot(snapshot: &FileAccountingSnapshot) -> anyhow::Result<Self> {
        let tables = TableCountsAndSizes {
            all: from_snapshot_field(&snapshot.tables_all),
            local: from_snapshot_field(&snapshot.tables_local),
        };
        check_locality("tables", &tables.all, &tables.local)?;

        let blob_files = BlobFileCountsAndSizes {
            all: from_snapshot_field(&snapshot.blob_files_all),
            local: from_snapshot_field(&snapshot.blob_files_local),
        };
        check_locality("blob files", &blob_files.all, &blob_files.local)?;

        Ok(FileCountsAndSizes {
            tables,
            blob_files,
            other: from_snapshot_field(&snapshot.other),
        })
    }
}

fn check_locality(kind: &str, all: &CountAndSize, local: &CountAndSize) -> anyhow::Result<()> {
    if local.count > all.count || local.bytes > all.bytes {
        bail!(
            "corrupt snapshot, local {} {:?} exceed all {} {:?}",
            kind,
            local,
            kind,
            all
        );
    }
    Ok(())
}

fn to_snapshot_field(cs: &CountAndSize) -> MessageField<CountAndSizeSnapshot> {
    let mut field = CountAndSizeSnapshot::new();
    field.count = cs.count;
    field.bytes = cs.bytes;
    MessageField::some(field)
}

fn from_snapshot_field(field: &MessageField<CountAndSizeSnapshot>) -> CountAndSize {
    let field = field.get_or_default();
    CountAndSize::new(field.count, field.bytes)
}
