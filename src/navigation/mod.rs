pub mod clipboard;
pub mod route;
pub mod scroll_spy;
pub mod state;
pub mod view;

pub use clipboard::{copy_text, Clipboard, ClipboardError, Notice};
pub use route::{fragment_for, parse_fragment};
pub use scroll_spy::{HeadingVisibility, NoVisibility, ScrollSpy, VisibleHeading};
pub use state::{reduce, NavEvent, NavState, View};
pub use view::{
    category_pills, copy_source, list_items, mark_current, render_page, toc_entries, CopyTarget,
    ListItem, PageView, Pill, TocEntry,
};
