//! Generic XML tree and writing primitives used by higher-level tools.

pub mod tree;
pub mod writer;

pub use tree::XmlNode;
pub use writer::{write, write_file, write_with_options, WriteError, WriteOptions};
