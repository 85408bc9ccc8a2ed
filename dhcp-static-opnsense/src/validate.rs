//! Address predicates and a non-gating record audit.
//!
//! Nothing here decides whether a row is written. The conversion writes every
//! row as-is and only reports audit findings as debug events.

use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::hostname::is_valid_hostname;
use crate::record::MappingRecord;

static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$").expect("MAC pattern compiles")
});

/// Six two-hex-digit groups separated by `:` or `-`, case-insensitive.
///
/// Separators are checked per group, so `AA:BB-CC:DD-EE:FF` is accepted.
pub fn is_valid_mac(mac: &str) -> bool {
    MAC_PATTERN.is_match(mac)
}

/// Dotted-decimal IPv4.
pub fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<Ipv4Addr>().is_ok()
}

/// Dotted-decimal IPv4 in a private-use range.
///
/// Covers the RFC 1918 blocks plus the other non-global ranges usually
/// classed as private: this-network, loopback, link-local, IETF protocol
/// assignments, documentation, benchmarking, reserved, and broadcast.
pub fn is_rfc1918_ip(ip: &str) -> bool {
    ip.parse::<Ipv4Addr>().is_ok_and(is_private_range)
}

fn is_private_range(addr: Ipv4Addr) -> bool {
    let [a, b, c, _] = addr.octets();
    addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_unspecified()
        || addr.is_documentation()
        || addr.is_broadcast()
        // 0.0.0.0/8
        || a == 0
        // 192.0.0.0/24
        || (a == 192 && b == 0 && c == 0)
        // 198.18.0.0/15
        || (a == 198 && (b == 18 || b == 19))
        // 240.0.0.0/4
        || a >= 240
}

/// A field that would not pass a strict check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    InvalidHostname(String),
    InvalidMac(String),
    InvalidIp(String),
    /// Valid IPv4 outside every private range.
    PublicIp(String),
}

impl Display for RecordIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHostname(value) => write!(f, "hostname '{value}' is not DHCP-compliant"),
            Self::InvalidMac(value) => write!(f, "mac '{value}' is not a MAC address"),
            Self::InvalidIp(value) => write!(f, "ipaddr '{value}' is not an IPv4 address"),
            Self::PublicIp(value) => write!(f, "ipaddr '{value}' is not a private address"),
        }
    }
}

/// Check a normalized record against the strict predicates. Empty fields are
/// skipped.
pub fn audit(record: &MappingRecord) -> Vec<RecordIssue> {
    let mut issues = Vec::new();

    if !record.hostname.is_empty() && !is_valid_hostname(&record.hostname) {
        issues.push(RecordIssue::InvalidHostname(record.hostname.clone()));
    }
    if !record.mac_address.is_empty() && !is_valid_mac(&record.mac_address) {
        issues.push(RecordIssue::InvalidMac(record.mac_address.clone()));
    }
    if !record.ip_address.is_empty() {
        if !is_valid_ip(&record.ip_address) {
            issues.push(RecordIssue::InvalidIp(record.ip_address.clone()));
        } else if !is_rfc1918_ip(&record.ip_address) {
            issues.push(RecordIssue::PublicIp(record.ip_address.clone()));
        }
    }

    issues
}
