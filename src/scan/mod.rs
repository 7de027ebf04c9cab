pub mod directory;

pub use directory::{scan_directory, ScanResult};
