pub mod count_and_size;
pub mod error;
pub mod file_counts;
pub mod file_type;

pub use count_and_size::{BlobFileCountsAndSizes, CountAndSize, TableCountsAndSizes};
pub use error::FilenameError;
pub use file_counts::{FileCountsAndSizes, ObsoleteFile};
pub use file_type::{make_filename, parse_filename, FileNum, FileType};
