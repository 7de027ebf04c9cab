use crate::{
    accounting::{count_and_size::CountAndSize, file_type::FileType},
    utils::testing::{create_file, fresh_directory, setup_pacer_cfg},
};

use super::AccountingController;

#[test]
pub fn open_scan_close() {
    let data_directory = "/tmp/main_test_open_scan_close";
    fresh_directory(data_directory);

    create_file(data_directory, FileType::Table, 1, 100);
    create_file(data_directory, FileType::Table, 2, 200);
    create_file(data_directory, FileType::Blob, 3, 50);
    create_file(data_directory, FileType::Log, 4, 10);

    let config = setup_pacer_cfg(data_directory);
    let controller = AccountingController::open(&config).unwrap();
    assert_eq!(controller.data_directory(), data_directory);

    let result = controller.scan().unwrap();
    assert_eq!(result.counts.tables.all, CountAndSize::new(2, 300));
    assert_eq!(result.counts.blob_files.local, CountAndSize::new(1, 50));
    assert_eq!(result.counts.other, CountAndSize::new(1, 10));

    // every scan starts from zero
    let again = controller.scan().unwrap();
    assert_eq!(again, result);

    controller.close().unwrap();
    let _ = std::fs::remove_dir_all(data_directory);
}

#[test]
pub fn remote_snapshot() {
    let data_directory = "/tmp/main_test_remote_snapshot";
    fresh_directory(data_directory);

    create_file(data_directory, FileType::Table, 1, 128);
    create_file(data_directory, FileType::Temp, 2, 4);

    let mut config = setup_pacer_cfg(data_directory);
    config
        .booleanConfigs
        .insert("data_directory_is_local".to_string(), false);

    let controller = AccountingController::open(&config).unwrap();
    let snapshot = controller.snapshot().unwrap();
    assert_eq!(snapshot.tables_all.count, 1);
    assert_eq!(snapshot.tables_all.bytes, 128);
    assert_eq!(snapshot.tables_local.count, 0);
    assert_eq!(snapshot.other.bytes, 4);

    controller.close().unwrap();
    let _ = std::fs::remove_dir_all(data_directory);
}

#[test]
pub fn missing_data_directory_config() {
    let mut config = setup_pacer_cfg("/tmp/main_test_missing_data_directory_config");
    config.stringConfigs.remove("data_directory");

    assert!(AccountingController::open(&config).is_err());
}
