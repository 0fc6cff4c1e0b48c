use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::payload::SitePayload;
use crate::config::SiteConfig;
use crate::navigation::{render_page, NavState};
use crate::render::escape_html;
use crate::store::DocumentStore;

/// Element id of the embedded data island.
pub const DATA_ELEMENT_ID: &str = "skillsData";

/// Shows the document view named by the fragment and hides home while one is shown.
const VIEW_STYLE: &str =
    ".view{display:none}.view:target{display:block}main:has(.view:target) #home{display:none}";

/// File name the page is written to.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(PathBuf),
}

/// The single page handed to the hosting side.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub payload: SitePayload,
}

impl Artifact {
    pub fn new(payload: SitePayload) -> Self {
        Self { payload }
    }

    /// `<script type="application/json">` element carrying the payload.
    pub fn data_island(&self) -> Result<String, ArtifactError> {
        Ok(format!(
            r#"<script id="{DATA_ELEMENT_ID}" type="application/json">{}</script>"#,
            self.payload.to_embedded_json()?
        ))
    }

    /// Self-contained page: the data island, a server-rendered home view and
    /// one pre-rendered view per document.
    ///
    /// A document view's element id is its decoded route (`/<id>`), so the
    /// list's `#/<id>` links target it directly and the stylesheet swaps it in
    /// with `:target`. Search, pills and the TOC panel stay with a hosting
    /// script reading the data island.
    pub fn render_page(&self, config: &SiteConfig) -> Result<String, ArtifactError> {
        let store = DocumentStore::load(self.payload.skills.clone()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Payload violates store invariants, rendering without documents");
            DocumentStore::default()
        });
        let categories = self.payload.category_table();
        let home = render_page(&store, &categories, config, &NavState::default());

        let list: String = home
            .list
            .iter()
            .map(|item| {
                format!(
                    r#"<li><a href="{}">{}</a> <span>{}</span></li>"#,
                    escape_html(&item.href),
                    item.title_html,
                    escape_html(&item.category_label)
                )
            })
            .collect();

        let documents: String = store
            .iter()
            .map(|doc| {
                let state = NavState {
                    active_id: Some(doc.id.clone()),
                    ..NavState::default()
                };
                let view = render_page(&store, &categories, config, &state);
                format!(
                    concat!(
                        "<article class=\"view\" id=\"/{id}\" data-id=\"{id}\">",
                        "<h1>{title}</h1><p>{subtitle}</p>{body}</article>\n"
                    ),
                    id = escape_html(doc.id.as_str()),
                    title = escape_html(&view.title),
                    subtitle = escape_html(&view.subtitle),
                    body = view.body_html,
                )
            })
            .collect();

        Ok(format!(
            concat!(
                "<!doctype html>\n",
                "<html>\n",
                "<head>\n",
                "<meta charset=\"UTF-8\" />\n",
                "<title>{title}</title>\n",
                "<style>{style}</style>\n",
                "</head>\n",
                "<body>\n",
                "<nav><ul id=\"list\">{list}</ul></nav>\n",
                "<main id=\"content\">\n",
                "<section id=\"home\"><h1>{title}</h1><p>{subtitle}</p><article id=\"doc\">{body}</article></section>\n",
                "{documents}",
                "</main>\n",
                "<footer>Generated · {generated}</footer>\n",
                "{island}\n",
                "</body>\n",
                "</html>\n"
            ),
            title = escape_html(&home.title),
            subtitle = escape_html(&home.subtitle),
            style = VIEW_STYLE,
            list = list,
            body = home.body_html,
            documents = documents,
            generated = escape_html(&self.payload.generated_at),
            island = self.data_island()?,
        ))
    }

    /// Write `index.html` into `dir`, replacing any previous page atomically.
    pub fn write_to(&self, dir: &Path, config: &SiteConfig) -> Result<PathBuf, ArtifactError> {
        let html = self.render_page(config)?;
        fs::create_dir_all(dir)?;

        let target = dir.join(INDEX_FILE);
        if target.is_dir() {
            return Err(ArtifactError::OutputIsDirectory(target));
        }

        // Write to a sibling temp file, then rename over the target.
        let temp = dir.join(format!("{INDEX_FILE}.tmp"));
        {
            let mut f = fs::File::create(&temp)?;
            f.write_all(html.as_bytes())?;
            f.sync_all()?;
        }
        fs::rename(&temp, &target)?;

        tracing::info!(
            path = %target.display(),
            bytes = html.len(),
            documents = self.payload.skills.len(),
            "Wrote site artifact"
        );
        Ok(target)
    }
}
