use std::collections::BTreeMap;

/// A generic XML element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements, in document order.
    pub children: Vec<XmlNode>,
    /// Optional text content.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create an element with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create a text-only element.
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Append `child` and return a mutable reference to it.
    pub fn push_child(&mut self, child: XmlNode) -> &mut XmlNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a text-only child element.
    pub fn push_text_child(&mut self, tag: &str, value: &str) {
        self.children.push(XmlNode::with_text(tag, value));
    }

    /// True when the element has neither children nor non-empty text.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().map_or(true, str::is_empty)
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Return all children with the provided tag.
    pub fn get_children(&self, tag: &str) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Walk a nested child path and return terminal node text if found.
    pub fn get_text<'a>(&'a self, path: &[&str]) -> Option<&'a str> {
        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        current.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::XmlNode;

    #[test]
    fn get_text_walks_nested_path() {
        let mut root = XmlNode::new("opnsense");
        let dhcpd = root.push_child(XmlNode::new("dhcpd"));
        dhcpd.push_text_child("note", "value");

        assert_eq!(root.get_text(&["dhcpd", "note"]), Some("value"));
        assert_eq!(root.get_text(&["dhcpd", "missing"]), None);
    }

    #[test]
    fn empty_text_counts_as_empty_element() {
        assert!(XmlNode::with_text("descr", "").is_empty());
        assert!(XmlNode::new("descr").is_empty());
        assert!(!XmlNode::with_text("descr", "desk").is_empty());
    }

    #[test]
    fn push_child_keeps_document_order() {
        let mut map = XmlNode::new("staticmap");
        map.push_text_child("mac", "aa:bb:cc:dd:ee:ff");
        map.push_child(XmlNode::new("descr"));
        map.push_text_child("mac", "second");

        let tags: Vec<&str> = map.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["mac", "descr", "mac"]);
        assert!(!map.is_empty());
        assert_eq!(map.get_children("mac").len(), 2);
        assert_eq!(map.get_text(&["mac"]), Some("aa:bb:cc:dd:ee:ff"));
    }
}
