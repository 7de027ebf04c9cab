pub mod accounting;
pub mod controller;
pub mod proto;
pub mod scan;
mod utils;

pub use accounting::{
    BlobFileCountsAndSizes, CountAndSize, FileCountsAndSizes, FileType, TableCountsAndSizes,
};
pub use controller::main::AccountingController;
