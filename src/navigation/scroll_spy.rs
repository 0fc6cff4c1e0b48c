//! Picks the TOC entry matching the heading currently in view.
//!
//! Visibility is reported by the host (intersection observation, polling, or
//! nothing at all in non-interactive targets) through [`HeadingVisibility`].

/// A heading element the host reports as visible.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleHeading {
    pub id: String,
    /// Distance from the top of the viewport.
    pub top: f64,
}

pub trait HeadingVisibility {
    fn visible_headings(&self) -> Vec<VisibleHeading>;
}

/// For targets that never scroll.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVisibility;

impl HeadingVisibility for NoVisibility {
    fn visible_headings(&self) -> Vec<VisibleHeading> {
        Vec::new()
    }
}

/// Tracks which of a document's TOC ids is current.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    ids: Vec<String>,
    current: Option<String>,
}

impl ScrollSpy {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            current: None,
        }
    }

    /// Update from a visibility report and return the current id.
    ///
    /// The topmost visible heading that belongs to the TOC wins. A report
    /// with nothing relevant in it leaves the previous choice in place.
    pub fn report_visible_headings(&mut self, visible: &[VisibleHeading]) -> Option<&str> {
        let topmost = visible
            .iter()
            .filter(|h| self.ids.iter().any(|id| *id == h.id))
            .min_by(|a, b| a.top.total_cmp(&b.top));
        if let Some(heading) = topmost {
            self.current = Some(heading.id.clone());
        }
        self.current.as_deref()
    }

    pub fn observe(&mut self, source: &impl HeadingVisibility) -> Option<&str> {
        let visible = source.visible_headings();
        self.report_visible_headings(&visible)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
