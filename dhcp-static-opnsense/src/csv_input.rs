//! Header-driven CSV reading.
//!
//! Columns are found by exact header name. A column that is not present reads
//! as an empty string for every row, and short rows read their missing
//! trailing cells as empty. No row is ever rejected for its content.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::convert::ConvertError;
use crate::record::MappingRecord;

pub const HOSTNAME: &str = "hostname";
pub const MAC_ADDRESS: &str = "mac_address";
pub const IP_ADDRESS: &str = "ip_address";
pub const DESCR: &str = "descr";
pub const WINS_SERVER: &str = "winsserver";
pub const DNS_SERVER: &str = "dnsserver";
pub const NTP_SERVER: &str = "ntpserver";

/// Header name to column position. When a name repeats, the last wins.
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index))
            .collect();
        Self { positions }
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&index| record.get(index))
            .unwrap_or("")
    }

    fn record(&self, row: &StringRecord) -> MappingRecord {
        MappingRecord {
            hostname: self.get(row, HOSTNAME).to_string(),
            mac_address: self.get(row, MAC_ADDRESS).to_string(),
            ip_address: self.get(row, IP_ADDRESS).to_string(),
            description: self.get(row, DESCR).to_string(),
            wins_server: self.get(row, WINS_SERVER).to_string(),
            dns_server: self.get(row, DNS_SERVER).to_string(),
            ntp_server: self.get(row, NTP_SERVER).to_string(),
        }
    }
}

/// Read every data row of the CSV at `path`, in file order.
///
/// Records are returned as read; see [`MappingRecord::normalize`].
pub fn read_records(path: &Path) -> Result<Vec<MappingRecord>, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_records_from(file, path)
}

/// Read records from any reader. `path` only labels errors.
pub fn read_records_from<R: Read>(
    source: R,
    path: &Path,
) -> Result<Vec<MappingRecord>, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|err| ConvertError::from_csv(path, err))?
        .clone();
    if headers.is_empty() {
        return Err(ConvertError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let columns = ColumnIndex::new(&headers);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|err| ConvertError::from_csv(path, err))?;
        records.push(columns.record(&row));
    }

    Ok(records)
}
