//! Metrics file loading.

use super::schema::{MeasurementRecord, MetricsTable};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a metrics JSON file into a table
///
/// **Public** - main entry point of the input side
///
/// # Errors
/// * `LoadError::NotFound` - the path does not name an existing file
/// * `LoadError::Io` - the file could not be read
/// * `LoadError::Json` - the content is not an array of measurement records
pub fn load_metrics(path: impl AsRef<Path>) -> Result<MetricsTable, LoadError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    debug!("Reading metrics from: {}", path.display());

    let file = File::open(path)?;
    let records: Vec<MeasurementRecord> = serde_json::from_reader(BufReader::new(file))?;

    info!("Loaded {} measurement records from {}", records.len(), path.display());

    Ok(MetricsTable::new(records))
}

/// Parse metrics from an in-memory JSON string
///
/// **Public** - useful for tests and piping
pub fn parse_metrics(json: &str) -> Result<MetricsTable, LoadError> {
    let records: Vec<MeasurementRecord> = serde_json::from_str(json)?;
    Ok(MetricsTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("metrics_output.json");

        let err = load_metrics(&missing).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(ref p) if p == &missing));
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_metrics(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"contract":"A","action":"deploy","gasUsed":1000,"feeWei":"1000000000000000","bytecodeSizeBytes":500}}]"#
        )
        .unwrap();

        let table = load_metrics(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].gas_used, 1000);
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_metrics(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_parse_object_instead_of_array() {
        let err = parse_metrics(r#"{"contract":"A"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_parse_empty_array() {
        let table = parse_metrics("[]").unwrap();
        assert!(table.is_empty());
    }
}
