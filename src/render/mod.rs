pub mod block;
pub mod escape;
pub mod inline;
pub mod renderer;
pub mod slug;

pub use block::{Align, Block, Heading, ListKind, RenderedDocument, DEFAULT_CODE_LABEL};
pub use escape::escape_html;
pub use inline::format_inline;
pub use renderer::{render_markdown, BlockRenderer};
pub use slug::{is_slug_char, slugify, SlugAllocator};
