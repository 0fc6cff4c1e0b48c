pub mod document;
pub mod metadata;
pub mod parser;

pub use crate::types::identifiers::DocumentId;
pub use document::DocumentRecord;
pub use metadata::FrontMatter;
pub use parser::{parse_front_matter, strip_front_matter, ParsedDocument};
