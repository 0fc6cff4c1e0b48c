use serde::Serialize;

use super::escape::escape_html;
use super::inline::format_inline;

/// Label shown on a code card when the fence carries no language tag.
pub const DEFAULT_CODE_LABEL: &str = "code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Alignment from a separator cell such as `:---:`.
    pub fn from_separator(cell: &str) -> Self {
        let cell = cell.trim();
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Align::Center,
            (_, true) => Align::Right,
            _ => Align::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// A heading as listed in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// One rendered block. Text fields hold source text; markup is produced by
/// [`Block::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    List { kind: ListKind, items: Vec<String> },
    Quote(Vec<String>),
    Code { lang: String, text: String },
    Rule,
    Heading(Heading),
    Table {
        header: Vec<String>,
        aligns: Vec<Align>,
        rows: Vec<Vec<String>>,
    },
}

impl Block {
    pub fn to_html(&self) -> String {
        match self {
            Block::Paragraph(text) => format!("<p>{}</p>", format_inline(text)),
            Block::List { kind, items } => {
                let tag = kind.tag();
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", format_inline(item)))
                    .collect();
                format!("<{tag}>{items}</{tag}>")
            }
            Block::Quote(lines) => {
                let lines: Vec<String> = lines.iter().map(|l| format_inline(l)).collect();
                format!("<blockquote>{}</blockquote>", lines.join("<br/>"))
            }
            Block::Code { lang, text } => {
                let label = if lang.is_empty() { DEFAULT_CODE_LABEL } else { lang.as_str() };
                format!(
                    concat!(
                        r#"<div class="codeblock">"#,
                        r#"<div class="codebar">"#,
                        r#"<div class="codelang">{}</div>"#,
                        r#"<button class="btn small" type="button" data-copy-code>Copy</button>"#,
                        "</div>",
                        "<pre><code>{}</code></pre>",
                        "</div>"
                    ),
                    escape_html(label),
                    escape_html(text)
                )
            }
            Block::Rule => "<hr />".to_string(),
            Block::Heading(h) => format!(
                r#"<h{level} id="{id}">{text}</h{level}>"#,
                level = h.level,
                id = escape_html(&h.id),
                text = format_inline(&h.text)
            ),
            Block::Table {
                header,
                aligns,
                rows,
            } => {
                let align = |idx: usize| aligns.get(idx).copied().unwrap_or_default().as_str();
                let ths: String = header
                    .iter()
                    .enumerate()
                    .map(|(idx, cell)| {
                        format!(
                            r#"<th style="text-align:{}">{}</th>"#,
                            align(idx),
                            format_inline(cell)
                        )
                    })
                    .collect();
                let trs: String = rows
                    .iter()
                    .map(|row| {
                        let tds: String = row
                            .iter()
                            .enumerate()
                            .map(|(idx, cell)| {
                                format!(
                                    r#"<td style="text-align:{}">{}</td>"#,
                                    align(idx),
                                    format_inline(cell)
                                )
                            })
                            .collect();
                        format!("<tr>{tds}</tr>")
                    })
                    .collect();
                format!("<table><thead><tr>{ths}</tr></thead><tbody>{trs}</tbody></table>")
            }
        }
    }
}

/// Output of one render pass. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedDocument {
    pub blocks: Vec<Block>,
    pub toc: Vec<Heading>,
}

impl RenderedDocument {
    pub fn html(&self) -> String {
        self.blocks
            .iter()
            .map(Block::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
