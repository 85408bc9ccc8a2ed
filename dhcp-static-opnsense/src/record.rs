use crate::hostname::normalize_hostname;

/// One static DHCP lease entry, as read from a CSV row.
///
/// Every field is a plain string. Absent or blank values are empty strings,
/// never missing, so each record always yields all seven XML elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingRecord {
    pub hostname: String,
    pub mac_address: String,
    pub ip_address: String,
    pub description: String,
    pub wins_server: String,
    pub dns_server: String,
    pub ntp_server: String,
}

impl MappingRecord {
    /// Trim every field and run the hostname through the pipeline's
    /// fix-and-lowercase step. MAC, IP, and the optional fields pass through
    /// untouched apart from trimming.
    pub fn normalize(&mut self) {
        for field in [
            &mut self.mac_address,
            &mut self.ip_address,
            &mut self.description,
            &mut self.wins_server,
            &mut self.dns_server,
            &mut self.ntp_server,
        ] {
            trim_in_place(field);
        }
        self.hostname = normalize_hostname(self.hostname.trim());
    }

    /// Consume the record and return its normalized form.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}
