use core::fmt;

use super::error::FilenameError;

#[cfg(test)]
#[path = "file_type_test.rs"]
mod file_type_test;

/// Number embedded in a storage engine filename.
pub type FileNum = u64;

/// Kind of on-disk file, used as the routing key for accounting.
/// Discriminants follow declaration order and are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Log = 0,
    Lock = 1,
    Table = 2,
    Manifest = 3,
    Options = 4,
    OldTemp = 5,
    Temp = 6,
    Blob = 7,
}

impl FileType {
    pub const ALL: [FileType; 8] = [
        FileType::Log,
        FileType::Lock,
        FileType::Table,
        FileType::Manifest,
        FileType::Options,
        FileType::OldTemp,
        FileType::Temp,
        FileType::Blob,
    ];

    /// Whether files of this type are tallied per locality.
    pub fn is_locality_aware(&self) -> bool {
        matches!(self, FileType::Table | FileType::Blob)
    }

    fn name(&self) -> &'static str {
        match self {
            FileType::Log => "log",
            FileType::Lock => "lock",
            FileType::Table => "table",
            FileType::Manifest => "manifest",
            FileType::Options => "options",
            FileType::OldTemp => "old-temp",
            FileType::Temp => "temp",
            FileType::Blob => "blob",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i32> for FileType {
    type Error = FilenameError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| FileType::ALL.get(idx).copied())
            .ok_or(FilenameError::UnknownFileType(value))
    }
}

/// Filename for a file of the given type and number.
/// Lock files carry no number, `file_num` is ignored for them.
pub fn make_filename(file_type: FileType, file_num: FileNum) -> String {
    match file_type {
        FileType::Log => format!("{:06}.log", file_num),
        FileType::Lock => String::from("LOCK"),
        FileType::Table => format!("{:06}.sst", file_num),
        FileType::Manifest => format!("MANIFEST-{:06}", file_num),
        FileType::Options => format!("OPTIONS-{:06}", file_num),
        FileType::OldTemp => format!("CURRENT.{:06}.dbtmp", file_num),
        FileType::Temp => format!("temporary.{:06}.dbtmp", file_num),
        FileType::Blob => format!("{:06}.blob", file_num),
    }
}

/// Classifies a filename (no directory component).
pub fn parse_filename(filename: &str) -> Result<(FileType, FileNum), FilenameError> {
    let invalid = || FilenameError::InvalidFilename(filename.to_string());

    if filename == "LOCK" {
        return Ok((FileType::Lock, 0));
    }

    if let Some(num) = filename.strip_prefix("MANIFEST-") {
        return Ok((FileType::Manifest, parse_file_num(num).ok_or_else(invalid)?));
    }
    if let Some(num) = filename.strip_prefix("OPTIONS-") {
        return Ok((FileType::Options, parse_file_num(num).ok_or_else(invalid)?));
    }

    if let Some(rest) = filename.strip_suffix(".dbtmp") {
        if let Some(num) = rest.strip_prefix("CURRENT.") {
            return Ok((FileType::OldTemp, parse_file_num(num).ok_or_else(invalid)?));
        }
        if let Some(num) = rest.strip_prefix("temporary.") {
            return Ok((FileType::Temp, parse_file_num(num).ok_or_else(invalid)?));
        }
        return Err(invalid());
    }

    let (num, extension) = filename.split_once('.').ok_or_else(invalid)?;
    let file_type = match extension {
        "log" => FileType::Log,
        "sst" => FileType::Table,
        "blob" => FileType::Blob,
        _ => return Err(invalid()),
    };

    Ok((file_type, parse_file_num(num).ok_or_else(invalid)?))
}

// digits only, no sign or whitespace
fn parse_file_num(s: &str) -> Option<FileNum> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<FileNum>().ok()
}
