pub mod category;
pub mod identifiers;

pub use category::{Category, CategoryEntry, CategoryFilter, CategoryTable};
pub use identifiers::DocumentId;
