#[cfg(test)]
#[path = "count_and_size_test.rs"]
mod count_and_size_test;

/// Count and total size of a set of files.
///
/// Both counters saturate at `u64::MAX` instead of wrapping, so a
/// long lived aggregate can pin at the limit but never goes backwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountAndSize {
    /// Number of files.
    pub count: u64,

    /// Total size of all files, in bytes.
    pub bytes: u64,
}

impl CountAndSize {
    pub fn new(count: u64, bytes: u64) -> Self {
        Self { count, bytes }
    }

    /// Increases the count and size for a single file.
    pub fn inc(&mut self, file_size: u64) {
        self.count = self.count.saturating_add(1);
        self.bytes = self.bytes.saturating_add(file_size);
    }

    pub fn merge_with(&mut self, other: &Self) {
        self.count = self.count.saturating_add(other.count);
        self.bytes = self.bytes.saturating_add(other.bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Counts and sizes for tables, broken down by locality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableCountsAndSizes {
    /// All tables (local and remote).
    pub all: CountAndSize,

    /// Local tables only.
    pub local: CountAndSize,
}

impl TableCountsAndSizes {
    /// Increases the count and size for a single table.
    pub fn inc(&mut self, table_size: u64, is_local: bool) {
        self.all.inc(table_size);
        if is_local {
            self.local.inc(table_size);
        }
    }

    pub fn merge_with(&mut self, other: &Self) {
        self.all.merge_with(&other.all);
        self.local.merge_with(&other.local);
    }

    /// Tables stored on remote storage.
    pub fn remote(&self) -> CountAndSize {
        CountAndSize {
            count: self.all.count.saturating_sub(self.local.count),
            bytes: self.all.bytes.saturating_sub(self.local.bytes),
        }
    }
}

// TODO: shares its shape with TableCountsAndSizes, fold both into a
// generic once a third locality-aware file type shows up.
/// Counts and sizes for blob files, broken down by locality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlobFileCountsAndSizes {
    /// All blob files (local and remote).
    pub all: CountAndSize,

    /// Local blob files only.
    pub local: CountAndSize,
}

impl BlobFileCountsAndSizes {
    /// Increases the count and size for a single blob file.
    pub fn inc(&mut self, file_size: u64, is_local: bool) {
        self.all.inc(file_size);
        if is_local {
            self.local.inc(file_size);
        }
    }

    pub fn merge_with(&mut self, other: &Self) {
        self.all.merge_with(&other.all);
        self.local.merge_with(&other.local);
    }

    /// Blob files stored on remote storage.
    pub fn remote(&self) -> CountAndSize {
        CountAndSize {
            count: self.all.count.saturating_sub(self.local.count),
            bytes: self.all.bytes.saturating_sub(self.local.bytes),
        }
    }
}
