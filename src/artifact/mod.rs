pub mod page;
pub mod payload;

pub use page::{Artifact, ArtifactError, DATA_ELEMENT_ID, INDEX_FILE};
pub use payload::{neutralize_for_html, SitePayload};
