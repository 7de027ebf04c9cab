use super::{make_filename, parse_filename, FileType};
use crate::accounting::error::FilenameError;

#[test]
pub fn filenames_round_trip() {
    for file_type in FileType::ALL {
        let filename = make_filename(file_type, 42);
        let (parsed_type, file_num) = parse_filename(&filename).unwrap();
        assert_eq!(parsed_type, file_type);
        if file_type != FileType::Lock {
            assert_eq!(file_num, 42);
        }
    }
}

#[test]
pub fn filename_formats() {
    assert_eq!(make_filename(FileType::Table, 7), "000007.sst");
    assert_eq!(make_filename(FileType::Log, 1234567), "1234567.log");
    assert_eq!(make_filename(FileType::Manifest, 1), "MANIFEST-000001");
    assert_eq!(make_filename(FileType::OldTemp, 3), "CURRENT.000003.dbtmp");
    assert_eq!(make_filename(FileType::Temp, 3), "temporary.000003.dbtmp");
    assert_eq!(make_filename(FileType::Lock, 99), "LOCK");
}

#[test]
pub fn unpadded_numbers_parse() {
    assert_eq!(parse_filename("5.sst").unwrap(), (FileType::Table, 5));
    assert_eq!(parse_filename("000123.blob").unwrap(), (FileType::Blob, 123));
}

#[test]
pub fn rejects_unknown_names() {
    for name in [
        "",
        "CURRENT",
        "foo.sst",
        "000001.txt",
        "000001",
        "MANIFEST-",
        "MANIFEST-abc",
        "OPTIONS--1",
        "000001.sst.bak",
        "bogus.000001.dbtmp",
        "+1.log",
    ] {
        assert_eq!(
            parse_filename(name),
            Err(FilenameError::InvalidFilename(name.to_string())),
            "{} should not parse",
            name
        );
    }
}

#[test]
pub fn raw_codes() {
    assert_eq!(FileType::try_from(0).unwrap(), FileType::Log);
    assert_eq!(FileType::try_from(2).unwrap(), FileType::Table);
    assert_eq!(FileType::try_from(7).unwrap(), FileType::Blob);
    for (code, file_type) in FileType::ALL.iter().enumerate() {
        assert_eq!(*file_type as i32, code as i32);
    }

    assert_eq!(
        FileType::try_from(8),
        Err(FilenameError::UnknownFileType(8))
    );
    assert_eq!(
        FileType::try_from(-1),
        Err(FilenameError::UnknownFileType(-1))
    );
}

#[test]
pub fn display_names() {
    assert_eq!(FileType::OldTemp.to_string(), "old-temp");
    assert_eq!(FileType::Blob.to_string(), "blob");
    assert!(FileType::Table.is_locality_aware());
    assert!(FileType::Blob.is_locality_aware());
    assert!(!FileType::Manifest.is_locality_aware());
}
