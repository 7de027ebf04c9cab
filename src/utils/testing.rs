// Testing util methods.

use std::{collections::HashMap, fs, io::Write};

use crate::{
    accounting::file_type::{make_filename, FileNum, FileType},
    proto::generated_proto::common::DeletePacerConfig,
};

pub fn setup_pacer_cfg(data_dir: &str) -> DeletePacerConfig {
    let mut config = DeletePacerConfig::new();
    config.stringConfigs = HashMap::new();
    config
        .stringConfigs
        .insert("data_directory".to_string(), data_dir.to_string());
    config
        .stringConfigs
        .insert("log_level".to_string(), "info".to_string());

    config.booleanConfigs = HashMap::new();
    config
        .booleanConfigs
        .insert("log_to_console".to_string(), true);

    config
}

/// Creates an empty data directory, wiping any previous contents.
pub fn fresh_directory(dir: &str) {
    let _ = fs::remove_dir_all(dir);
    fs::create_dir_all(dir).unwrap();
}

/// Writes a storage engine file of `size` bytes, returns its name.
pub fn create_file(dir: &str, file_type: FileType, file_num: FileNum, size: usize) -> String {
    let filename = make_filename(file_type, file_num);
    write_named_file(dir, &filename, size);
    filename
}

pub fn write_named_file(dir: &str, filename: &str, size: usize) {
    let mut file = fs::File::create(format!("{}/{}", dir, filename)).unwrap();
    file.write_all(&vec![7u8; size]).unwrap();
    file.flush().unwrap();
}
