use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    /// Raw file type code outside of the known enumeration.
    UnknownFileType(i32),

    /// Name does not follow any storage engine naming scheme.
    InvalidFilename(String),
}

impl fmt::Display for FilenameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilenameError::UnknownFileType(code) => write!(f, "unknown file type code: {}", code),
            FilenameError::InvalidFilename(name) => {
                write!(f, "not a storage engine filename: {}", name)
            }
        }
    }
}

impl std::error::Error for FilenameError {}
