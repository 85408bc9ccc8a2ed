use xml_tree_core::XmlNode;

use crate::record::MappingRecord;

/// Root element of an OPNsense configuration fragment.
pub const ROOT_TAG: &str = "opnsense";
/// Section holding per-interface DHCP server settings.
pub const DHCPD_TAG: &str = "dhcpd";
/// One static lease inside an interface block.
pub const STATICMAP_TAG: &str = "staticmap";

/// Build `<opnsense><dhcpd><{interface}>` with one `<staticmap>` per record,
/// in record order.
pub fn build_document(records: &[MappingRecord], interface: &str) -> XmlNode {
    let mut root = XmlNode::new(ROOT_TAG);
    let dhcpd = root.push_child(XmlNode::new(DHCPD_TAG));
    let iface = dhcpd.push_child(XmlNode::new(interface));
    iface
        .children
        .extend(records.iter().map(staticmap_node));
    root
}

/// Render one record as a `<staticmap>` element. All seven children are
/// always present, empty values included.
pub fn staticmap_node(record: &MappingRecord) -> XmlNode {
    let mut node = XmlNode::new(STATICMAP_TAG);
    node.push_text_child("mac", &record.mac_address);
    node.push_text_child("ipaddr", &record.ip_address);
    node.push_text_child("hostname", &record.hostname);
    node.push_text_child("descr", &record.description);
    node.push_text_child("winsserver", &record.wins_server);
    node.push_text_child("dnsserver", &record.dns_server);
    node.push_text_child("ntpserver", &record.ntp_server);
    node
}
