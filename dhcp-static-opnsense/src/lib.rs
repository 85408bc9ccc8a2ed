//! CSV to OPNsense static DHCP mapping conversion.
//!
//! Reads a CSV of static leases (hostname, MAC, IPv4, optional description
//! and per-host WINS/DNS/NTP servers) and writes the matching
//! `<opnsense><dhcpd><lan><staticmap>` XML fragment.
//!
//! # Pipeline
//!
//! 1. [`csv_input`] reads rows by header name, defaulting absent columns to
//!    empty strings.
//! 2. [`record`] trims every field and applies the [`hostname`] cleanup.
//! 3. [`document`] builds the fixed-shape XML tree.
//! 4. [`convert`] writes it with 4-space indentation.
//!
//! The conversion is lenient: every data row becomes one `<staticmap>`, and
//! MAC and IP values are written as given. The predicates in [`validate`]
//! are available for callers that want stricter checks.
//!
//! # Examples
//!
//! ```ignore
//! use std::path::Path;
//! use dhcp_static_opnsense::convert::convert;
//!
//! convert(Path::new("leases.csv"), Path::new("staticmaps.xml"))?;
//! ```
//!
//! # Built on xml-tree-core
//!
//! Tree construction and pretty-printing come from `xml-tree-core`. Only the
//! DHCP-specific mapping lives in this crate.

pub mod convert;
pub mod csv_input;
pub mod document;
pub mod hostname;
pub mod record;
pub mod validate;

pub use convert::{convert, convert_with_options, ConvertError, ConvertOptions};
pub use record::MappingRecord;
