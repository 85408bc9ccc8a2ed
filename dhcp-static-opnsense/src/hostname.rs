//! DHCP hostname rules.
//!
//! A DHCP-compliant hostname is a single DNS label: it starts with an ASCII
//! letter, continues with letters, digits, or hyphens, ends with a letter or
//! digit, and is at most [`MAX_HOSTNAME_LEN`] characters long.
//!
//! [`fix_hostname`] is a best-effort cleanup, not a guarantee. Its output can
//! still fail [`is_valid_hostname`] (an all-digit name stays all digits, an
//! all-hyphen name collapses to the empty string), and the conversion emits
//! such names unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a single hostname label.
pub const MAX_HOSTNAME_LEN: usize = 63;

static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$").expect("hostname pattern compiles")
});

/// Return true if `hostname` is a valid DHCP hostname label.
pub fn is_valid_hostname(hostname: &str) -> bool {
    hostname.len() <= MAX_HOSTNAME_LEN && HOSTNAME_PATTERN.is_match(hostname)
}

/// Clean `hostname` toward DHCP label syntax.
///
/// Applied in order:
/// 1. spaces and underscores become hyphens
/// 2. anything other than ASCII letters, digits, and hyphens is dropped
/// 3. leading and trailing hyphens are stripped
/// 4. the result is cut to [`MAX_HOSTNAME_LEN`] characters
///
/// Case is preserved. Truncation happens after stripping, so a cut that lands
/// right after a hyphen leaves a trailing hyphen.
pub fn fix_hostname(hostname: &str) -> String {
    let cleaned: String = hostname
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    // Only ASCII survives the filter, so byte truncation is char-safe.
    let mut fixed = cleaned.trim_matches('-').to_string();
    fixed.truncate(MAX_HOSTNAME_LEN);
    fixed
}

/// The hostname step of the conversion pipeline: [`fix_hostname`], then
/// lowercase. The result is not validated.
pub fn normalize_hostname(hostname: &str) -> String {
    fix_hostname(hostname).to_ascii_lowercase()
}
