//! File-based implementation of RecordGateway

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use carshop_domain::RecordGateway;
use carshop_types::{Error, FormatError, Result, VehicleRecord};

use crate::codec;

const LOAD: &str = "load";
const SAVE: &str = "save";
const CREATE_DIR: &str = "directory creation";

/// File-based implementation of RecordGateway
///
/// Stores one record per line in a flat text file. Saves are staged in a
/// sibling `.tmp` file and renamed into place, so a failed save leaves the
/// previous content untouched.
#[derive(Debug, Clone)]
pub struct FileRecordGateway {
    path: PathBuf,
}

impl FileRecordGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_staged(staging: &Path, records: &[VehicleRecord]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(staging)?);
        for record in records {
            writer.write_all(codec::encode(record).as_bytes())?;
        }
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

impl RecordGateway for FileRecordGateway {
    fn load(&self) -> Result<Vec<VehicleRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io(LOAD, &self.path, e)),
        };

        let mut records = Vec::new();
        for (idx, bytes) in BufReader::new(file).split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| Error::io(LOAD, &self.path, e))?;
            let record = String::from_utf8(bytes)
                .map_err(|_| FormatError::InvalidEncoding)
                .and_then(|line| codec::decode(&line))
                .map_err(|source| Error::Format {
                    operation: LOAD,
                    line: idx + 1,
                    source,
                })?;
            records.push(record);
        }

        debug!(path = %self.path.display(), count = records.len(), "loaded vehicle records");
        Ok(records)
    }

    fn save(&self, records: &[VehicleRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(CREATE_DIR, parent, e))?;
        }

        let staging = self.staging_path();
        if let Err(e) = Self::write_staged(&staging, records) {
            warn!(path = %staging.display(), error = %e, "staged write failed");
            let _ = fs::remove_file(&staging);
            return Err(Error::io(SAVE, &self.path, e));
        }
        if let Err(e) = fs::rename(&staging, &self.path) {
            warn!(path = %self.path.display(), error = %e, "rename of staged file failed");
            let _ = fs::remove_file(&staging);
            return Err(Error::io(SAVE, &self.path, e));
        }

        debug!(path = %self.path.display(), count = records.len(), "saved vehicle records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carshop_types::FuelType;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn record(id: i32, manufacturer: &str) -> VehicleRecord {
        VehicleRecord::new(
            id,
            manufacturer,
            "Model",
            10_000 + id as i64,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            FuelType::Diesel,
            100,
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let gateway = FileRecordGateway::new(dir.path().join("cars.csv"));
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = tempdir().unwrap();
        let gateway = FileRecordGateway::new(dir.path().join("cars.csv"));
        let records = vec![record(3, "Opel"), record(1, "Audi"), record(2, "BMW")];

        gateway.save(&records).unwrap();

        assert_eq!(gateway.load().unwrap(), records);
    }

    #[test]
    fn test_save_writes_line_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        let gateway = FileRecordGateway::new(&path);

        gateway.save(&[record(1, "Audi")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1, Audi, Model, 10001, 01.01.2020, DIESEL, 100\n");
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let gateway = FileRecordGateway::new(dir.path().join("cars.csv"));

        gateway.save(&[record(1, "Audi"), record(2, "BMW")]).unwrap();
        gateway.save(&[record(2, "BMW")]).unwrap();

        assert_eq!(gateway.load().unwrap(), vec![record(2, "BMW")]);
    }

    #[test]
    fn test_save_empty_collection_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        let gateway = FileRecordGateway::new(&path);

        gateway.save(&[record(1, "Audi")]).unwrap();
        gateway.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("cars.csv");
        let gateway = FileRecordGateway::new(&path);

        gateway.save(&[record(1, "Audi")]).unwrap();

        assert!(path.exists());
        assert!(!gateway.staging_path().exists());
    }

    #[test]
    fn test_directory_creation_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        let gateway = FileRecordGateway::new(blocker.join("cars.csv"));

        let err = gateway.save(&[record(1, "Audi")]).unwrap_err();

        assert!(matches!(err, Error::Io { operation: "directory creation", .. }));
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        let gateway = FileRecordGateway::new(&path);
        gateway.save(&[record(1, "Audi")]).unwrap();

        // A directory squatting on the staging path makes the staged write fail
        fs::create_dir(gateway.staging_path()).unwrap();
        let err = gateway.save(&[record(1, "Audi"), record(2, "BMW")]).unwrap_err();

        assert!(matches!(err, Error::Io { operation: "save", .. }));
        assert_eq!(gateway.load().unwrap(), vec![record(1, "Audi")]);
    }

    #[test]
    fn test_failed_rename_removes_staging_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        // A non-empty directory at the target path cannot be replaced by rename
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();
        let gateway = FileRecordGateway::new(&path);

        let err = gateway.save(&[record(1, "Audi")]).unwrap_err();

        assert!(matches!(err, Error::Io { operation: "save", .. }));
        assert!(!gateway.staging_path().exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_load_malformed_line_aborts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        fs::write(
            &path,
            "1, Audi, A4, 30000, 01.01.2020, DIESEL, 150\n2, BMW, 320d, 35000, 01.01.2020, DIESEL\n",
        )
        .unwrap();
        let gateway = FileRecordGateway::new(&path);

        let err = gateway.load().unwrap_err();

        match err {
            Error::Format {
                operation, line, ..
            } => {
                assert_eq!(operation, "load");
                assert_eq!(line, 2);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_utf8_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        let mut content = b"1, Audi, A4, 30000, 01.01.2020, DIESEL, 150\n2, ".to_vec();
        content.extend_from_slice(&[0xff, 0xfe]);
        content.extend_from_slice(b", 320d, 35000, 01.01.2020, DIESEL, 190\n");
        fs::write(&path, content).unwrap();
        let gateway = FileRecordGateway::new(&path);

        let err = gateway.load().unwrap_err();

        match err {
            Error::Format {
                operation,
                line,
                source,
            } => {
                assert_eq!(operation, "load");
                assert_eq!(line, 2);
                assert_eq!(source, FormatError::InvalidEncoding);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_accepts_crlf_and_lowercase_fuel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.csv");
        fs::write(&path, "4, Kia, Niro, 29000, 12.12.2021, hybrid, 139\r\n").unwrap();
        let gateway = FileRecordGateway::new(&path);

        let records = gateway.load().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fuel_type, FuelType::Hybrid);
    }
}
