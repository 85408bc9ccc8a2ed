use std::fs;

use pretty_assertions::assert_eq;
use xml_tree_core::{write, write_file, write_with_options, WriteOptions, XmlNode};

fn sample_tree() -> XmlNode {
    let mut root = XmlNode::new("opnsense");
    let section = root.push_child(XmlNode::new("dhcpd"));
    let lan = section.push_child(XmlNode::new("lan"));
    let entry = lan.push_child(XmlNode::new("staticmap"));
    entry.push_text_child("mac", "00:11:22:33:44:55");
    entry.push_text_child("descr", "");
    root
}

#[test]
fn writes_declaration_and_four_space_indent() {
    let bytes = write(&sample_tree()).expect("write should succeed");
    let text = String::from_utf8(bytes).expect("utf-8 output");

    assert_eq!(
        text,
        "<?xml version=\"1.0\"?>\n\
         <opnsense>\n\
         \x20   <dhcpd>\n\
         \x20       <lan>\n\
         \x20           <staticmap>\n\
         \x20               <mac>00:11:22:33:44:55</mac>\n\
         \x20               <descr/>\n\
         \x20           </staticmap>\n\
         \x20       </lan>\n\
         \x20   </dhcpd>\n\
         </opnsense>\n"
    );
}

#[test]
fn escapes_markup_but_not_quotes_in_text() {
    let node = XmlNode::with_text("descr", "Bob's \"lab\" <rack> & more");
    let options = WriteOptions {
        indent: 2,
        declaration: false,
    };

    let text = String::from_utf8(write_with_options(&node, options).expect("write")).expect("utf-8");
    assert_eq!(text, "<descr>Bob's \"lab\" &lt;rack&gt; &amp; more</descr>\n");
}

#[test]
fn childless_root_is_self_closing() {
    let options = WriteOptions {
        declaration: false,
        ..WriteOptions::default()
    };
    let text = String::from_utf8(write_with_options(&XmlNode::new("lan"), options).expect("write"))
        .expect("utf-8");
    assert_eq!(text, "<lan/>\n");
}

#[test]
fn write_file_replaces_existing_content() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let out_path = dir.path().join("out.xml");
    fs::write(&out_path, "stale content that is much longer than the new document")
        .expect("seed write");

    write_file(&sample_tree(), &out_path, WriteOptions::default()).expect("write_file");

    let written = fs::read(&out_path).expect("read back");
    assert_eq!(written, write(&sample_tree()).expect("write"));
}
