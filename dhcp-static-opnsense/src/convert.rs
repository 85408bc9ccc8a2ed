//! CSV to OPNsense static-map conversion.
//!
//! The pipeline is read, normalize, build, write. Every CSV data row becomes
//! exactly one `<staticmap>`, in file order. Hostnames are cleaned up, and the
//! MAC and IP values are written through as given. Audit findings from
//! [`crate::validate::audit`] are reported as debug events only.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use xml_tree_core::{write_file, WriteError, WriteOptions, XmlNode};

use crate::csv_input::read_records;
use crate::document::build_document;
use crate::record::MappingRecord;
use crate::validate::audit;

/// Errors returned by [`convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Output could not be serialized or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: WriteError },
    /// Input could not be parsed as CSV.
    #[error("malformed CSV in {}: {source}", .path.display())]
    Format { path: PathBuf, source: csv::Error },
    /// Input has no header row.
    #[error("{} has no CSV header row", .path.display())]
    MissingHeader { path: PathBuf },
}

impl ConvertError {
    /// Classify a CSV-layer error: I/O failures stay I/O, everything else is
    /// a format problem.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let path = path.to_path_buf();
        if err.is_io_error() {
            return Self::Read {
                path,
                source: std::io::Error::from(err),
            };
        }
        Self::Format { path, source: err }
    }
}

/// Knobs for [`convert_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Interface element under `<dhcpd>` that receives the static maps.
    pub interface: String,
    /// Spaces per nesting level in the output.
    pub indent: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            interface: "lan".to_string(),
            indent: 4,
        }
    }
}

/// Convert the CSV at `input` into a `<opnsense>` static-map document at
/// `output`, overwriting any existing file.
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    convert_with_options(input, output, &ConvertOptions::default())
}

/// [`convert`] with explicit options.
pub fn convert_with_options(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let records = normalize_records(read_records(input)?);
    let document = build_document(&records, &options.interface);
    write_document(&document, output, options)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        entries = records.len(),
        "wrote static mappings"
    );
    Ok(())
}

/// Normalize each record and report anything a strict check would flag.
pub fn normalize_records(records: Vec<MappingRecord>) -> Vec<MappingRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let row = index + 1;
            let original = raw.hostname.trim().to_string();
            let record = raw.normalized();
            if record.hostname != original {
                debug!(row, from = %original, to = %record.hostname, "hostname normalized");
            }
            for issue in audit(&record) {
                debug!(row, %issue, "passing record through unvalidated");
            }
            record
        })
        .collect()
}

fn write_document(
    document: &XmlNode,
    output: &Path,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let write_options = WriteOptions {
        indent: options.indent,
        ..WriteOptions::default()
    };
    write_file(document, output, write_options).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    const OFFICE_PC_XML: &str = r#"<?xml version="1.0"?>
<opnsense>
    <dhcpd>
        <lan>
            <staticmap>
                <mac>AA:BB:CC:DD:EE:FF</mac>
                <ipaddr>192.168.1.10</ipaddr>
                <hostname>office-pc</hostname>
                <descr/>
                <winsserver/>
                <dnsserver/>
                <ntpserver/>
            </staticmap>
        </lan>
    </dhcpd>
</opnsense>
"#;

    #[test]
    fn converts_single_row_without_optional_columns() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("leases.csv");
        let output = dir.path().join("leases.xml");
        fs::write(
            &input,
            "hostname,mac_address,ip_address\nOffice PC,AA:BB:CC:DD:EE:FF,192.168.1.10\n",
        )
        .expect("seed csv");

        convert(&input, &output).expect("convert");

        assert_eq!(fs::read_to_string(&output).expect("read xml"), OFFICE_PC_XML);
    }

    #[test]
    fn options_change_interface_and_indent() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("leases.csv");
        let output = dir.path().join("leases.xml");
        fs::write(&input, "hostname,mac_address,ip_address\ncam,AA:BB:CC:DD:EE:01,10.9.0.4\n")
            .expect("seed csv");

        let options = ConvertOptions {
            interface: "opt1".to_string(),
            indent: 2,
        };
        convert_with_options(&input, &output, &options).expect("convert");

        let xml = fs::read_to_string(&output).expect("read xml");
        assert!(xml.contains("\n    <opt1>\n"));
        assert!(xml.contains("\n        <hostname>cam</hostname>\n"));
    }

    #[test]
    fn missing_input_is_a_read_error_naming_the_path() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("absent.csv");
        let output = dir.path().join("out.xml");

        let err = convert(&input, &output).expect_err("should fail");
        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(err.to_string().contains("absent.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_a_write_error() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("leases.csv");
        fs::write(&input, "hostname\nweb\n").expect("seed csv");
        let output = dir.path().join("no-such-dir").join("out.xml");

        let err = convert(&input, &output).expect_err("should fail");
        assert!(matches!(err, ConvertError::Write { .. }));
        assert!(err.to_string().contains("out.xml"));
    }

    #[test]
    fn normalize_records_keeps_invalid_values() {
        let records = normalize_records(vec![
            MappingRecord {
                hostname: "123".to_string(),
                mac_address: "garbage".to_string(),
                ..MappingRecord::default()
            },
            MappingRecord {
                hostname: "___".to_string(),
                ..MappingRecord::default()
            },
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hostname, "123");
        assert_eq!(records[0].mac_address, "garbage");
        assert_eq!(records[1].hostname, "");
    }
}
